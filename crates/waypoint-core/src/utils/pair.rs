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

//! # Generic Pair
//!
//! A two-slot generic record. The slots are independently typed and
//! independently owned; the only relationship between them is the pairing
//! itself. Equality and ordering are lexicographic with the first slot
//! dominating, which makes `Pair` directly usable as a sort key.
//!
//! ## Construction and conversion
//!
//! Every construction path is gated by an ordinary trait bound: `Default`
//! requires both slots to be default-constructible, [`Pair::new`] moves two
//! values in (the argument's value category decides move versus copy), and
//! [`Pair::convert`] rebuilds the record with both slots converted through
//! their `Into` implementations. Tuples convert in both directions.

use std::fmt;

/// A generic record of two independently-typed values.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::utils::pair::Pair;
/// let a = Pair::new(1, "a");
/// let b = Pair::new(1, "a");
/// assert_eq!(a, b);
///
/// // The first slot dominates the ordering.
/// assert!(Pair::new(1, 100) < Pair::new(2, 0));
/// assert!(Pair::new(1, 2) < Pair::new(1, 3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    /// The first slot; dominates equality-ordering comparisons.
    pub first: A,
    /// The second slot; breaks ties.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from two values.
    ///
    /// Each argument is moved (or copied, for `Copy` types) into its slot;
    /// pass owned values to transfer ownership and references to borrow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::utils::pair::Pair;
    /// let owned = String::from("berth");
    /// let p = Pair::new(owned, 3usize);
    /// assert_eq!(p.first, "berth");
    /// assert_eq!(p.second, 3);
    /// ```
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Converts both slots into the target types.
    ///
    /// Available exactly when each slot type converts into its
    /// counterpart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::utils::pair::Pair;
    /// let small: Pair<u8, u16> = Pair::new(7, 300);
    /// let wide: Pair<u32, u64> = small.convert();
    /// assert_eq!(wide, Pair::new(7u32, 300u64));
    /// ```
    #[inline]
    pub fn convert<A2, B2>(self) -> Pair<A2, B2>
    where
        A: Into<A2>,
        B: Into<B2>,
    {
        Pair {
            first: self.first.into(),
            second: self.second.into(),
        }
    }

    /// Returns a pair of references to the slots.
    #[inline]
    pub const fn as_refs(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    /// Returns the pair with the slots exchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::utils::pair::Pair;
    /// assert_eq!(Pair::new(1, "x").flip(), Pair::new("x", 1));
    /// ```
    #[inline]
    pub fn flip(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A, B> fmt::Display for Pair<A, B>
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::Pair;

    #[test]
    fn test_equality_is_slot_wise() {
        assert_eq!(Pair::new(1, "a"), Pair::new(1, "a"));
        assert_ne!(Pair::new(1, "a"), Pair::new(1, "b"));
        assert_ne!(Pair::new(2, "a"), Pair::new(1, "a"));
    }

    #[test]
    fn test_first_slot_dominates_ordering() {
        assert!(Pair::new(1, 2) < Pair::new(1, 3));
        assert!(Pair::new(2, 0) > Pair::new(1, 100));
        assert!(Pair::new(1, 100) < Pair::new(2, 0));
    }

    #[test]
    fn test_second_slot_breaks_ties_only() {
        let mut pairs = vec![
            Pair::new(2, 1),
            Pair::new(1, 9),
            Pair::new(2, 0),
            Pair::new(1, 0),
        ];
        pairs.sort();
        assert_eq!(
            pairs,
            [
                Pair::new(1, 0),
                Pair::new(1, 9),
                Pair::new(2, 0),
                Pair::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_default_requires_both_slots() {
        let p: Pair<i32, String> = Pair::default();
        assert_eq!(p.first, 0);
        assert!(p.second.is_empty());
    }

    #[test]
    fn test_new_moves_owned_values() {
        let name = String::from("quay");
        let p = Pair::new(name, 1u8);
        // `name` is moved; the slot owns the data now.
        assert_eq!(p.first, "quay");

        // Temporaries work identically.
        let q = Pair::new(String::from("pier"), 2u8);
        assert_eq!(q.first, "pier");
    }

    #[test]
    fn test_new_borrows_when_given_references() {
        let name = String::from("dock");
        let p = Pair::new(&name, 1);
        assert_eq!(*p.first, *"dock");
        // The original is still usable; only a reference was stored.
        assert_eq!(name, "dock");
    }

    #[test]
    fn test_convert_widens_both_slots() {
        let p: Pair<u8, i8> = Pair::new(200, -5);
        let q: Pair<u64, i64> = p.convert();
        assert_eq!(q, Pair::new(200u64, -5i64));
    }

    #[test]
    fn test_tuple_round_trip() {
        let p: Pair<i32, char> = (3, 'z').into();
        assert_eq!(p, Pair::new(3, 'z'));
        let (a, b): (i32, char) = p.into();
        assert_eq!((a, b), (3, 'z'));
    }

    #[test]
    fn test_flip_and_as_refs() {
        let p = Pair::new(1, "one");
        assert_eq!(p.as_refs().first, &1);
        assert_eq!(p.flip(), Pair::new("one", 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Pair::new(4, "knots")), "(4, knots)");
    }
}
