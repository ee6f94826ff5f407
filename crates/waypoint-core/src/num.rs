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

//! # Stride Numeric Bound
//!
//! Unified numeric bounds for position-difference types. `Stride` collects
//! the integer capabilities a step count between two cursor positions needs:
//! intrinsic primitive-integer behavior (`PrimInt`) plus a sign, so that
//! backward movement and position subtraction have a representation.
//!
//! ## Motivation
//!
//! Traversal algorithms should remain generic over the difference type a
//! cursor declares (containers over huge or tiny index spaces pick different
//! widths) while retaining predictable arithmetic semantics. Collecting the
//! bounds into a single alias keeps generic signatures short and consistent.

use num_traits::{PrimInt, Signed};

/// A trait alias for integer types that can measure the distance between two
/// cursor positions.
///
/// These are the signed primitive integers: `i8`, `i16`, `i32`, `i64`,
/// `i128` and `isize`. Raw-pointer cursors use `isize`; container-defined
/// cursors may declare any `Stride` type wide enough for their sequences.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::num::Stride;
/// fn halfway<D: Stride>(d: D) -> D {
///     d / (D::one() + D::one())
/// }
///
/// assert_eq!(halfway(10isize), 5);
/// assert_eq!(halfway(-7i32), -3);
/// ```
pub trait Stride: PrimInt + Signed {}

impl<T> Stride for T where T: PrimInt + Signed {}
