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

//! # Construct and Destroy
//!
//! Initializing and tearing down element slots in storage a container
//! manages by hand. `construct*` places a live value into an uninitialized
//! slot without touching whatever bytes were there; `destroy*` runs the
//! element type's teardown where one exists and is a guaranteed no-op where
//! none does.
//!
//! ## Trivial-teardown fast path
//!
//! Whether an element type needs teardown is a compile-time property
//! (`std::mem::needs_drop`), never a runtime branch: for trivially
//! destructible types the destroy functions fold to nothing, including the
//! range walk itself.
//!
//! ## Highlights
//!
//! - `destroy(null)` is a no-op, not an error.
//! - `destroy_range` accepts any forward-capable cursor whose pointer type
//!   is mutable, including plain `*mut T` ranges.
//! - Nothing here allocates or frees; storage management stays with the
//!   caller.

use std::mem;
use waypoint_core::cursor::{Cursor, Forward, Implies};

/// Initializes the slot at `slot` with `value`.
///
/// The previous contents of the slot are not read and not dropped; the
/// storage is treated as uninitialized.
///
/// # Safety
///
/// `slot` must be non-null, properly aligned and valid for writes of `T`.
/// If the slot already holds a live value, that value leaks.
///
/// # Examples
///
/// ```rust
/// # use std::mem::MaybeUninit;
/// # use waypoint_mem::lifecycle::{construct, destroy};
/// let mut slot: MaybeUninit<String> = MaybeUninit::uninit();
/// unsafe {
///     construct(slot.as_mut_ptr(), String::from("halyard"));
///     assert_eq!(*slot.as_ptr(), "halyard");
///     destroy(slot.as_mut_ptr());
/// }
/// ```
#[inline(always)]
pub unsafe fn construct<T>(slot: *mut T, value: T) {
    unsafe { slot.write(value) };
}

/// Initializes the slot at `slot` with the element type's default value.
///
/// # Safety
///
/// Same contract as [`construct`].
#[inline(always)]
pub unsafe fn construct_default<T: Default>(slot: *mut T) {
    unsafe { slot.write(T::default()) };
}

/// Initializes the slot at `slot` with the value produced by `make`.
///
/// Useful when the value is expensive to build and should not exist before
/// the slot is known to be needed.
///
/// # Safety
///
/// Same contract as [`construct`].
#[inline(always)]
pub unsafe fn construct_with<T, F>(slot: *mut T, make: F)
where
    F: FnOnce() -> T,
{
    unsafe { slot.write(make()) };
}

/// Tears down the value at `slot`, if the element type has any teardown.
///
/// For trivially destructible types this is a no-op regardless of the
/// pointer value. A null `slot` is a no-op, not an error.
///
/// # Safety
///
/// If `slot` is non-null it must point to a live, properly aligned value
/// of `T`. The slot is uninitialized afterwards and must not be read.
#[inline(always)]
pub unsafe fn destroy<T>(slot: *mut T) {
    if !mem::needs_drop::<T>() {
        return;
    }
    if !slot.is_null() {
        unsafe { slot.drop_in_place() };
    }
}

/// Tears down every element in the cursor range `[first, last)`.
///
/// For trivially destructible element types the entire walk compiles away.
/// The range must be delimited by cursors whose pointer type is `*mut`, so
/// the elements can actually be dropped in place; plain `*mut T` pointer
/// ranges qualify.
///
/// # Safety
///
/// Every position in `[first, last)` must point to a live, properly
/// aligned value of the element type, `last` must be forward-reachable
/// from `first`, and the affected slots must not be read afterwards.
///
/// # Examples
///
/// ```rust
/// # use std::mem::MaybeUninit;
/// # use waypoint_mem::lifecycle::{construct, destroy_range};
/// let mut slots: [MaybeUninit<Box<u32>>; 3] =
///     [MaybeUninit::uninit(), MaybeUninit::uninit(), MaybeUninit::uninit()];
/// unsafe {
///     for (i, slot) in slots.iter_mut().enumerate() {
///         construct(slot.as_mut_ptr(), Box::new(i as u32));
///     }
///     let first = slots.as_mut_ptr().cast::<Box<u32>>();
///     destroy_range(first, first.wrapping_add(3));
/// }
/// ```
pub unsafe fn destroy_range<P>(first: P, last: P)
where
    P: Cursor<Pointer = *mut <P as Cursor>::Item>,
    P::Category: Implies<Forward>,
{
    if !mem::needs_drop::<P::Item>() {
        return;
    }
    let mut cur = first;
    while cur != last {
        unsafe { cur.as_ptr().drop_in_place() };
        cur.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::MaybeUninit;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A non-trivial element type that counts its teardowns.
    #[derive(Debug)]
    struct Tracked<'c> {
        drops: &'c AtomicUsize,
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_construct_then_destroy_runs_teardown_once_per_element() {
        let drops = AtomicUsize::new(0);
        let mut slots: [MaybeUninit<Tracked<'_>>; 4] = [
            MaybeUninit::uninit(),
            MaybeUninit::uninit(),
            MaybeUninit::uninit(),
            MaybeUninit::uninit(),
        ];

        unsafe {
            for slot in &mut slots {
                construct(slot.as_mut_ptr(), Tracked { drops: &drops });
            }
            assert_eq!(drops.load(Ordering::Relaxed), 0);

            let first = slots.as_mut_ptr().cast::<Tracked<'_>>();
            destroy_range(first, first.wrapping_add(slots.len()));
        }
        assert_eq!(drops.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_destroy_single_slot() {
        let drops = AtomicUsize::new(0);
        let mut slot: MaybeUninit<Tracked<'_>> = MaybeUninit::uninit();

        unsafe {
            construct(slot.as_mut_ptr(), Tracked { drops: &drops });
            destroy(slot.as_mut_ptr());
        }
        assert_eq!(drops.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_destroy_null_is_a_no_op() {
        unsafe { destroy(std::ptr::null_mut::<String>()) };
    }

    #[test]
    fn test_trivial_elements_need_no_teardown() {
        let mut data = [1u64, 2, 3];
        let first = data.as_mut_ptr();
        // Nothing observable may happen; in particular this must not read
        // or invalidate the values.
        unsafe { destroy_range(first, first.wrapping_add(3)) };
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_construct_default_and_with() {
        let mut a: MaybeUninit<Vec<u8>> = MaybeUninit::uninit();
        let mut b: MaybeUninit<String> = MaybeUninit::uninit();

        unsafe {
            construct_default(a.as_mut_ptr());
            construct_with(b.as_mut_ptr(), || "rigging".repeat(2));

            assert!((*a.as_ptr()).is_empty());
            assert_eq!(*b.as_ptr(), "riggingrigging");

            destroy(a.as_mut_ptr());
            destroy(b.as_mut_ptr());
        }
    }

    #[test]
    fn test_empty_range_is_a_no_op() {
        let drops = AtomicUsize::new(0);
        let mut slot: MaybeUninit<Tracked<'_>> = MaybeUninit::uninit();
        let first = slot.as_mut_ptr().cast::<Tracked<'_>>();
        unsafe { destroy_range(first, first) };
        assert_eq!(drops.load(Ordering::Relaxed), 0);
    }
}
