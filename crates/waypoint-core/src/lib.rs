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

//! # Waypoint Core
//!
//! Foundational cursor and traversal primitives for the Waypoint ecosystem.
//! This crate defines the structural protocol that makes a type a *cursor*
//! (a position within a sequence), detects at compile time which movement
//! capabilities a cursor type possesses, and provides generic traversal
//! algorithms whose implementation strategy is selected by that capability.
//!
//! ## Modules
//!
//! - `cursor`: Category tags and capability sets, the `Cursor` trait family
//!   (with automatic conformance for raw pointers), compile-time capability
//!   detection, the capability-dispatched `distance`/`advance` algorithms,
//!   the `ReverseCursor` adaptor, and a safe slice-backed cursor.
//! - `num`: The `Stride` numeric bound for position-difference types,
//!   collecting the `num_traits` capabilities a signed step count needs.
//! - `utils`: Small value-type helpers, currently the generic two-slot
//!   `Pair` record with lexicographic ordering.
//!
//! ## Purpose
//!
//! Container implementations produce positions of very different strengths:
//! a singly linked list can only step forward, a tree walks both ways, a
//! contiguous buffer can jump anywhere in constant time. These primitives
//! let generic code state the weakest capability it needs, while always
//! executing the strongest strategy the concrete cursor type provides, with
//! no runtime branching and no allocation.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cursor;
pub mod num;
pub mod utils;
