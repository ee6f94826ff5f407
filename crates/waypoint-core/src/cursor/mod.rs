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

//! # Cursor Protocol
//!
//! A *cursor* is a value identifying a position within a sequence. This
//! module defines what it takes to be one, and everything generic code can
//! do with one without knowing the concrete sequence behind it.
//!
//! ## Submodules
//!
//! - `category`: Zero-sized capability tags (`Input`, `Output`, `Forward`,
//!   `Bidirectional`, `RandomAccess`), the `CapabilitySet` they advertise,
//!   and the `Implies` hierarchy relation between them.
//! - `protocol`: The `Cursor` trait family carrying the associated-type
//!   bundle (category, item, pointer, reference, distance) and the movement
//!   operations per capability level, with automatic conformance for raw
//!   pointers.
//! - `caps`: Compile-time boolean capability detection for cursor types.
//! - `motion`: The capability-dispatched `distance` and `advance` traversal
//!   algorithms.
//! - `reverse`: `ReverseCursor<P>`, an adaptor inverting the movement
//!   direction of a bidirectional-or-stronger cursor.
//! - `slice`: `SliceCursor<'a, T>`, a safe random-access cursor over a
//!   borrowed slice.
//!
//! ## Motivation
//!
//! Generic traversal code must not pay for capabilities it does not use, nor
//! silently downgrade the capabilities a position type has. Encoding the
//! capability level in an associated tag type lets every algorithm pick its
//! strategy at compile time: raw pointers and slice cursors measure ranges
//! in constant time, while list-like cursors walk and count, through the
//! same two entry points.

pub mod caps;
pub mod category;
pub mod motion;
pub mod protocol;
pub mod reverse;
pub mod slice;

pub use caps::{
    capabilities, is_bidirectional_cursor, is_cursor, is_forward_cursor, is_input_cursor,
    is_output_cursor, is_random_access_cursor,
};
pub use category::{
    Bidirectional, CapabilitySet, Category, Forward, Implies, Input, Output, RandomAccess,
};
pub use motion::{advance, distance, Motion};
pub use protocol::{BidirectionalCursor, Cursor, RandomAccessCursor};
pub use reverse::ReverseCursor;
pub use slice::SliceCursor;
