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

//! # Capability Tags
//!
//! Zero-sized marker types identifying how a cursor type can move. A cursor
//! declares exactly one tag; the tag advertises a `CapabilitySet`, and the
//! `Implies` relation encodes the hierarchy
//! `Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess`, with `Output` as an
//! unrelated leaf for write-only sinks.
//!
//! ## Highlights
//!
//! - Tags carry no state and no behavior; they exist purely as compile-time
//!   dispatch keys.
//! - `CapabilitySet` makes the advertisement queryable in `const` context,
//!   so capability queries fold to constants.
//! - Any algorithm written against a weaker tag works for every stronger
//!   tag; the `Implies` impl table is the authority on "stronger".

use std::fmt;

/// The set of movement capabilities a category tag advertises.
///
/// Each field answers one question about a cursor type:
///
/// - `read`: elements at the position can be resolved (input hierarchy).
/// - `write`: the position is a write-only sink.
/// - `multipass`: independent clones traverse the same sequence and may be
///   compared, so the sequence can be walked more than once.
/// - `backward`: the position can step toward the front of the sequence.
/// - `jump`: the position can move by arbitrary offsets and measure
///   distances in constant time.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::cursor::category::{Category, Forward, RandomAccess};
/// assert!(RandomAccess::CAPS.contains(Forward::CAPS));
/// assert!(!Forward::CAPS.contains(RandomAccess::CAPS));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    /// Elements at the position can be read.
    pub read: bool,
    /// The position accepts writes only.
    pub write: bool,
    /// The sequence may be traversed repeatedly by independent clones.
    pub multipass: bool,
    /// The position can step backward.
    pub backward: bool,
    /// The position can offset by arbitrary amounts in constant time.
    pub jump: bool,
}

impl CapabilitySet {
    /// The empty capability set.
    pub const EMPTY: Self = Self {
        read: false,
        write: false,
        multipass: false,
        backward: false,
        jump: false,
    };

    /// Returns `true` if every capability in `required` is present in `self`.
    ///
    /// This is the subset test that defines tag convertibility: a tag `A`
    /// counts as an `B` exactly when `A::CAPS.contains(B::CAPS)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::cursor::category::{Bidirectional, Category, Input, Output};
    /// assert!(Bidirectional::CAPS.contains(Input::CAPS));
    /// assert!(!Bidirectional::CAPS.contains(Output::CAPS));
    /// ```
    #[inline(always)]
    pub const fn contains(self, required: Self) -> bool {
        (self.read || !required.read)
            && (self.write || !required.write)
            && (self.multipass || !required.multipass)
            && (self.backward || !required.backward)
            && (self.jump || !required.jump)
    }
}

/// A trait for the capability tags of the cursor protocol.
///
/// Implemented by exactly five zero-sized types: [`Input`], [`Output`],
/// [`Forward`], [`Bidirectional`] and [`RandomAccess`]. A cursor type
/// declares one of them as its [`Cursor::Category`] associated type and is
/// thereby placed in the capability hierarchy.
///
/// [`Cursor::Category`]: crate::cursor::protocol::Cursor::Category
pub trait Category: Copy + Default + 'static {
    /// A human-readable tag name for diagnostics.
    const NAME: &'static str;
    /// The capability set this tag advertises.
    const CAPS: CapabilitySet;
}

/// The relation "every cursor tagged `Self` also counts as `C`".
///
/// The impl table below is the reflexive-transitive closure of the
/// hierarchy: `RandomAccess` implies `Bidirectional` implies `Forward`
/// implies `Input`, while `Output` relates only to itself. Algorithms state
/// their minimum requirement as a bound, e.g.
/// `P::Category: Implies<Bidirectional>`.
pub trait Implies<C: Category>: Category {}

macro_rules! impl_category_for {
    ($t:ty, $name:expr, $caps:expr) => {
        impl Category for $t {
            const NAME: &'static str = $name;
            const CAPS: CapabilitySet = $caps;
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", <$t as Category>::NAME)
            }
        }
    };
}

macro_rules! impl_implies_for {
    ($t:ty, $($implied:ty),+) => {
        $(impl Implies<$implied> for $t {})+
    };
}

/// Tag for single-pass, read-only forward movement.
///
/// The weakest readable capability: positions can step forward and be
/// compared for equality, but the sequence is not guaranteed to survive a
/// second pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Input;

/// Tag for write-only sinks.
///
/// Unrelated to the readable hierarchy: `Output` neither implies nor is
/// implied by any of the other four tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Output;

/// Tag for multi-pass forward movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Tag for movement in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Tag for constant-time movement by arbitrary offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

impl_category_for!(
    Input,
    "Input",
    CapabilitySet {
        read: true,
        ..CapabilitySet::EMPTY
    }
);

impl_category_for!(
    Output,
    "Output",
    CapabilitySet {
        write: true,
        ..CapabilitySet::EMPTY
    }
);

impl_category_for!(
    Forward,
    "Forward",
    CapabilitySet {
        read: true,
        multipass: true,
        ..CapabilitySet::EMPTY
    }
);

impl_category_for!(
    Bidirectional,
    "Bidirectional",
    CapabilitySet {
        read: true,
        multipass: true,
        backward: true,
        ..CapabilitySet::EMPTY
    }
);

impl_category_for!(
    RandomAccess,
    "RandomAccess",
    CapabilitySet {
        read: true,
        multipass: true,
        backward: true,
        jump: true,
        ..CapabilitySet::EMPTY
    }
);

impl_implies_for!(Input, Input);
impl_implies_for!(Output, Output);
impl_implies_for!(Forward, Input, Forward);
impl_implies_for!(Bidirectional, Input, Forward, Bidirectional);
impl_implies_for!(RandomAccess, Input, Forward, Bidirectional, RandomAccess);
