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

//! # Generic Position Algorithms
//!
//! Measuring and moving positions generically: [`distance`] counts the
//! forward steps between two cursors, [`advance`] moves a cursor by a signed
//! step count. Both select their implementation strategy from the category
//! tag the cursor type declares, through the [`Motion`] dispatch trait.
//!
//! ## Dispatch
//!
//! Each category tag implements `Motion<P>` for the cursors declaring it.
//! Because a cursor type declares exactly one tag, the strongest declared
//! capability always wins: a random-access cursor resolves to the
//! constant-time strategy and can never fall into a linear walk, even though
//! the walk would be correct for it. Selection happens at compile time;
//! there is no runtime capability branch.
//!
//! ## Caller contracts
//!
//! - `distance(first, last)` over a non-random-access cursor requires `last`
//!   to be forward-reachable from `first`; otherwise the walk never
//!   terminates. This is a documented precondition, not a checked error.
//! - `distance` over a random-access cursor requires both positions to lie
//!   in the same sequence.
//! - `advance` by a negative count requires backward capability; for
//!   forward-only cursors this is guarded by a `debug_assert!`.

use crate::cursor::category::{Bidirectional, Category, Forward, Input, RandomAccess};
use crate::cursor::protocol::{BidirectionalCursor, Cursor, RandomAccessCursor};
use num_traits::{One, Zero};

/// The traversal strategy a category tag supplies for cursors declaring it.
///
/// This is the dispatch seam of the algorithm layer: [`distance`] and
/// [`advance`] delegate to `P::Category`, so the declared tag picks the
/// strategy once, at compile time. The four readable tags implement it;
/// write-only sinks have no traversal to measure.
pub trait Motion<P: Cursor>: Category {
    /// Counts the forward steps from `first` to `last`.
    fn distance(first: &P, last: &P) -> P::Distance;

    /// Moves `cursor` by `n` steps in place.
    fn advance(cursor: &mut P, n: P::Distance);
}

/// Walks a clone of `first` forward until it equals `last`, counting steps.
fn walk_count<P: Cursor>(first: &P, last: &P) -> P::Distance {
    let mut cur = first.clone();
    let mut n = P::Distance::zero();
    while cur != *last {
        cur.step();
        n = n + P::Distance::one();
    }
    n
}

/// Steps `cursor` forward `n` times. `n` must be non-negative.
fn walk_forward<P: Cursor>(cursor: &mut P, mut n: P::Distance) {
    debug_assert!(
        n >= P::Distance::zero(),
        "called a forward-only advance with a negative step count"
    );
    while n > P::Distance::zero() {
        cursor.step();
        n = n - P::Distance::one();
    }
}

/// Steps `cursor` backward `|n|` times. `n` must be non-positive.
fn walk_back<P: BidirectionalCursor>(cursor: &mut P, mut n: P::Distance) {
    while n < P::Distance::zero() {
        cursor.step_back();
        n = n + P::Distance::one();
    }
}

impl<P> Motion<P> for Input
where
    P: Cursor<Category = Input>,
{
    #[inline]
    fn distance(first: &P, last: &P) -> P::Distance {
        walk_count(first, last)
    }

    #[inline]
    fn advance(cursor: &mut P, n: P::Distance) {
        walk_forward(cursor, n);
    }
}

impl<P> Motion<P> for Forward
where
    P: Cursor<Category = Forward>,
{
    #[inline]
    fn distance(first: &P, last: &P) -> P::Distance {
        walk_count(first, last)
    }

    #[inline]
    fn advance(cursor: &mut P, n: P::Distance) {
        walk_forward(cursor, n);
    }
}

impl<P> Motion<P> for Bidirectional
where
    P: BidirectionalCursor<Category = Bidirectional>,
{
    #[inline]
    fn distance(first: &P, last: &P) -> P::Distance {
        walk_count(first, last)
    }

    #[inline]
    fn advance(cursor: &mut P, n: P::Distance) {
        if n >= P::Distance::zero() {
            walk_forward(cursor, n);
        } else {
            walk_back(cursor, n);
        }
    }
}

impl<P> Motion<P> for RandomAccess
where
    P: RandomAccessCursor<Category = RandomAccess>,
{
    #[inline]
    fn distance(first: &P, last: &P) -> P::Distance {
        last.delta(first)
    }

    #[inline]
    fn advance(cursor: &mut P, n: P::Distance) {
        cursor.seek(n);
    }
}

/// Counts the forward steps needed to go from `first` to `last`.
///
/// Constant time for random-access cursors, linear otherwise. See the
/// module documentation for the caller contracts.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::cursor::distance;
/// let data = [3u32, 1, 4, 1, 5];
/// let first = data.as_ptr();
/// let last = first.wrapping_add(data.len());
/// assert_eq!(distance(&first, &last), 5);
/// ```
#[inline]
pub fn distance<P>(first: &P, last: &P) -> P::Distance
where
    P: Cursor,
    P::Category: Motion<P>,
{
    <P::Category as Motion<P>>::distance(first, last)
}

/// Moves `cursor` by `n` steps in place.
///
/// Constant time for random-access cursors, linear otherwise. Negative `n`
/// requires backward capability. See the module documentation for the
/// caller contracts.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::cursor::advance;
/// let data = [3u32, 1, 4, 1, 5];
/// let mut p = data.as_ptr();
/// advance(&mut p, 4);
/// assert_eq!(unsafe { *p }, 5);
/// advance(&mut p, -4);
/// assert_eq!(p, data.as_ptr());
/// ```
#[inline]
pub fn advance<P>(cursor: &mut P, n: P::Distance)
where
    P: Cursor,
    P::Category: Motion<P>,
{
    <P::Category as Motion<P>>::advance(cursor, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::category::{Bidirectional, Forward, Input};
    use std::cell::Cell;

    /// An input-only cursor over a virtual sequence `0..`, sharing a step
    /// counter so tests can observe how many steps an algorithm takes.
    #[derive(Debug, Clone)]
    struct TallyCursor<'c> {
        pos: usize,
        steps: &'c Cell<usize>,
    }

    impl<'c> TallyCursor<'c> {
        fn at(pos: usize, steps: &'c Cell<usize>) -> Self {
            Self { pos, steps }
        }
    }

    impl PartialEq for TallyCursor<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.pos == other.pos
        }
    }

    impl<'c> Cursor for TallyCursor<'c> {
        type Category = Input;
        type Item = usize;
        type Pointer = *const usize;
        type Ref = usize;
        type Distance = isize;

        fn step(&mut self) {
            self.pos += 1;
            self.steps.set(self.steps.get() + 1);
        }

        fn read(&self) -> usize {
            self.pos
        }

        fn as_ptr(&self) -> *const usize {
            std::ptr::null()
        }
    }

    /// A bidirectional-only cursor over a virtual integer line.
    #[derive(Debug, Clone, PartialEq)]
    struct TwoWayCursor(i64);

    impl Cursor for TwoWayCursor {
        type Category = Bidirectional;
        type Item = i64;
        type Pointer = *const i64;
        type Ref = i64;
        type Distance = i64;

        fn step(&mut self) {
            self.0 += 1;
        }

        fn read(&self) -> i64 {
            self.0
        }

        fn as_ptr(&self) -> *const i64 {
            std::ptr::null()
        }
    }

    impl BidirectionalCursor for TwoWayCursor {
        fn step_back(&mut self) {
            self.0 -= 1;
        }
    }

    /// A random-access cursor whose single-step operations panic, proving
    /// that dispatch never routes a random-access type through the linear
    /// strategies.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct JumpProbe(isize);

    impl Cursor for JumpProbe {
        type Category = RandomAccess;
        type Item = isize;
        type Pointer = *const isize;
        type Ref = isize;
        type Distance = isize;

        fn step(&mut self) {
            panic!("random-access cursor was routed through a linear step");
        }

        fn read(&self) -> isize {
            self.0
        }

        fn as_ptr(&self) -> *const isize {
            std::ptr::null()
        }
    }

    impl BidirectionalCursor for JumpProbe {
        fn step_back(&mut self) {
            panic!("random-access cursor was routed through a linear step");
        }
    }

    impl RandomAccessCursor for JumpProbe {
        fn seek(&mut self, n: isize) {
            self.0 += n;
        }

        fn delta(&self, origin: &Self) -> isize {
            self.0 - origin.0
        }
    }

    #[test]
    fn test_pointer_distance_matches_range_length() {
        let data = [0u8; 13];
        let first = data.as_ptr();
        for n in 0..=data.len() {
            let last = first.wrapping_add(n);
            assert_eq!(distance(&first, &last), n as isize);
        }
    }

    #[test]
    fn test_pointer_advance_round_trip() {
        let data = [0u32; 9];
        let origin = data.as_ptr();
        for k in 0..=data.len() as isize {
            let mut p = origin;
            advance(&mut p, k);
            advance(&mut p, -k);
            assert_eq!(p, origin);
        }
    }

    #[test]
    fn test_input_distance_counts_and_is_linear() {
        let steps = Cell::new(0);
        let first = TallyCursor::at(2, &steps);
        let last = TallyCursor::at(42, &steps);

        assert_eq!(distance(&first, &last), 40);
        // The walk advances a clone of `first` exactly once per position.
        assert_eq!(steps.get(), 40);
        // `first` itself is untouched.
        assert_eq!(first.pos, 2);
    }

    #[test]
    fn test_input_advance_steps_forward() {
        let steps = Cell::new(0);
        let mut cur = TallyCursor::at(0, &steps);
        advance(&mut cur, 7);
        assert_eq!(cur.pos, 7);
        assert_eq!(steps.get(), 7);
    }

    #[test]
    fn test_bidirectional_advance_handles_negative_counts() {
        let mut cur = TwoWayCursor(10);
        advance(&mut cur, 5);
        assert_eq!(cur, TwoWayCursor(15));
        advance(&mut cur, -8);
        assert_eq!(cur, TwoWayCursor(7));
        advance(&mut cur, 0);
        assert_eq!(cur, TwoWayCursor(7));
    }

    #[test]
    fn test_bidirectional_distance_takes_the_linear_path() {
        // Bidirectional-but-not-random-access is the hierarchy boundary the
        // dispatch must not skip over: distance still walks.
        let first = TwoWayCursor(-3);
        let last = TwoWayCursor(4);
        assert_eq!(distance(&first, &last), 7);
    }

    #[test]
    fn test_random_access_never_takes_a_linear_step() {
        let first = JumpProbe(5);
        let last = JumpProbe(1000);
        // Any single step would panic; only the constant-time strategy can
        // produce these answers.
        assert_eq!(distance(&first, &last), 995);

        let mut cur = JumpProbe(0);
        advance(&mut cur, 123);
        advance(&mut cur, -400);
        assert_eq!(cur.0, -277);
    }
}
