// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Reverse Adaptor
//!
//! [`ReverseCursor<P>`] wraps a bidirectional-or-stronger cursor and inverts
//! its movement semantics: stepping the adaptor forward steps the wrapped
//! cursor backward, and vice versa. The adaptor itself satisfies the cursor
//! protocol, mirroring the capability level of the wrapped type, so all
//! generic algorithms apply to it unchanged.
//!
//! ## Position convention
//!
//! A reverse cursor wrapping `current` logically designates the
//! *predecessor* of `current`: reading it resolves the element one backward
//! step away from `current`, while [`base`](ReverseCursor::base) returns
//! `current` itself unchanged. Wrapping a sequence's end position therefore
//! reads the last element, and wrapping the begin position is the reverse
//! end, which must not be read.
//!
//! ## Highlights
//!
//! - Comparisons delegate to the wrapped values with operand order
//!   inverted, consistent with reversed traversal order.
//! - Offset arithmetic and `delta` exist exactly when the wrapped type is
//!   random-access; adapting a bidirectional-only cursor yields a
//!   bidirectional-only reverse cursor.

use crate::cursor::category::{Bidirectional, Implies};
use crate::cursor::protocol::{BidirectionalCursor, Cursor, RandomAccessCursor};
use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// A cursor adaptor that traverses its sequence back to front.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::cursor::{Cursor, ReverseCursor, SliceCursor, distance};
/// let data = ['a', 'b', 'c'];
/// let mut rev = ReverseCursor::new(SliceCursor::end(&data));
///
/// assert_eq!(*rev.read(), 'c');
/// rev.step();
/// assert_eq!(*rev.read(), 'b');
///
/// let rend = ReverseCursor::new(SliceCursor::begin(&data));
/// assert_eq!(distance(&rev, &rend), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseCursor<P> {
    current: P,
}

impl<P> ReverseCursor<P>
where
    P: BidirectionalCursor,
    P::Category: Implies<Bidirectional>,
{
    /// Wraps a forward cursor, designating the predecessor of `current`.
    #[inline]
    pub fn new(current: P) -> Self {
        Self { current }
    }

    /// Returns the wrapped forward cursor, unchanged.
    #[inline]
    pub fn base(&self) -> P {
        self.current.clone()
    }
}

impl<P> From<P> for ReverseCursor<P>
where
    P: BidirectionalCursor,
    P::Category: Implies<Bidirectional>,
{
    #[inline]
    fn from(current: P) -> Self {
        Self::new(current)
    }
}

impl<P> Cursor for ReverseCursor<P>
where
    P: BidirectionalCursor,
    P::Category: Implies<Bidirectional>,
{
    type Category = P::Category;
    type Item = P::Item;
    type Pointer = P::Pointer;
    type Ref = P::Ref;
    type Distance = P::Distance;

    #[inline]
    fn step(&mut self) {
        self.current.step_back();
    }

    #[inline]
    fn read(&self) -> Self::Ref {
        let mut pred = self.current.clone();
        pred.step_back();
        pred.read()
    }

    #[inline]
    fn as_ptr(&self) -> Self::Pointer {
        let mut pred = self.current.clone();
        pred.step_back();
        pred.as_ptr()
    }
}

impl<P> BidirectionalCursor for ReverseCursor<P>
where
    P: BidirectionalCursor,
    P::Category: Implies<Bidirectional>,
{
    #[inline]
    fn step_back(&mut self) {
        self.current.step();
    }
}

impl<P> PartialOrd for ReverseCursor<P>
where
    P: BidirectionalCursor + PartialOrd,
    P::Category: Implies<Bidirectional>,
{
    /// Reversed traversal order: `a < b` iff `b.base() < a.base()`.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.current.partial_cmp(&self.current)
    }
}

impl<P> RandomAccessCursor for ReverseCursor<P>
where
    P: RandomAccessCursor,
    P::Category: Implies<Bidirectional>,
{
    #[inline]
    fn seek(&mut self, n: Self::Distance) {
        self.current.seek(-n);
    }

    /// `self − origin` in reverse order is `origin.base() − self.base()`.
    #[inline]
    fn delta(&self, origin: &Self) -> Self::Distance {
        origin.current.delta(&self.current)
    }
}

impl<P> Add<P::Distance> for ReverseCursor<P>
where
    P: RandomAccessCursor,
    P::Category: Implies<Bidirectional>,
{
    type Output = Self;

    /// Moving a reverse cursor forward by `n` moves its base backward by
    /// `n`.
    #[inline]
    fn add(mut self, n: P::Distance) -> Self {
        self.current.seek(-n);
        self
    }
}

impl<P> Sub<P::Distance> for ReverseCursor<P>
where
    P: RandomAccessCursor,
    P::Category: Implies<Bidirectional>,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: P::Distance) -> Self {
        self.current.seek(n);
        self
    }
}
