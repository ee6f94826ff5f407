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

//! # Capability Detection
//!
//! Boolean answers to "does this cursor type support capability X",
//! evaluated entirely at compile time from the declared category tag. Each
//! predicate is a `const fn`, so the answers fold to constants and can feed
//! `const` assertions or configuration tables.
//!
//! A type that does not implement [`Cursor`] has no capabilities to query:
//! the predicates are simply not callable for it, and generic code guarded
//! by `where P: Cursor` does not exist for it. Detection therefore degrades
//! by absence rather than by error.

use crate::cursor::category::{
    Bidirectional, CapabilitySet, Category, Forward, Input, Output, RandomAccess,
};
use crate::cursor::protocol::Cursor;

/// Returns the capability set the cursor type `P` advertises.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::cursor::caps::capabilities;
/// let caps = capabilities::<*const u8>();
/// assert!(caps.jump);
/// assert!(!caps.write);
/// ```
#[inline(always)]
pub const fn capabilities<P: Cursor>() -> CapabilitySet {
    <P::Category as Category>::CAPS
}

/// Returns `true` if `P` supports read-forward traversal (category `Input`
/// or stronger).
#[inline(always)]
pub const fn is_input_cursor<P: Cursor>() -> bool {
    capabilities::<P>().contains(Input::CAPS)
}

/// Returns `true` if `P` is a write-only sink (category `Output`).
#[inline(always)]
pub const fn is_output_cursor<P: Cursor>() -> bool {
    capabilities::<P>().contains(Output::CAPS)
}

/// Returns `true` if `P` supports multi-pass forward traversal (category
/// `Forward` or stronger).
#[inline(always)]
pub const fn is_forward_cursor<P: Cursor>() -> bool {
    capabilities::<P>().contains(Forward::CAPS)
}

/// Returns `true` if `P` can step in both directions (category
/// `Bidirectional` or stronger).
#[inline(always)]
pub const fn is_bidirectional_cursor<P: Cursor>() -> bool {
    capabilities::<P>().contains(Bidirectional::CAPS)
}

/// Returns `true` if `P` can move by arbitrary offsets in constant time
/// (category `RandomAccess`).
#[inline(always)]
pub const fn is_random_access_cursor<P: Cursor>() -> bool {
    capabilities::<P>().contains(RandomAccess::CAPS)
}

/// Returns `true` if `P` participates in the cursor protocol at all, i.e.
/// has input or output capability.
#[inline(always)]
pub const fn is_cursor<P: Cursor>() -> bool {
    is_input_cursor::<P>() || is_output_cursor::<P>()
}
