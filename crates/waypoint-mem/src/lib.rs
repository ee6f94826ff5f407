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

//! # Waypoint Mem
//!
//! Object-lifecycle primitives for container implementations: placing live
//! values into uninitialized storage and tearing them down again, one slot
//! or a cursor-delimited range at a time. Teardown of trivially-destructible
//! element types compiles away entirely.
//!
//! ## Modules
//!
//! - `lifecycle`: The `construct*` and `destroy*` free functions.
//!
//! ## Purpose
//!
//! Containers separate allocation from initialization: a growable buffer
//! owns uninitialized capacity and must initialize and drop element slots
//! individually, never through ordinary assignment. These functions are the
//! vocabulary for that, phrased over raw pointers and over any
//! forward-capable cursor from `waypoint-core`.

pub mod lifecycle;

pub use lifecycle::{construct, construct_default, construct_with, destroy, destroy_range};
