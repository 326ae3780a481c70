// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::{self, NonNull};

use crate::error::AllocError;

/// Largest element count a block of `T` may hold.
///
/// Blocks are limited to `isize::MAX` bytes, so this is
/// `isize::MAX / size_of::<T>()`, or `isize::MAX` for zero-sized types.
///
/// # Example
///
/// ```rust
/// use ordo_alloc::max_size_of;
///
/// assert_eq!(max_size_of::<u8>(), isize::MAX as usize);
/// assert_eq!(max_size_of::<u64>(), isize::MAX as usize / 8);
/// assert_eq!(max_size_of::<()>(), isize::MAX as usize);
/// ```
pub const fn max_size_of<T>() -> usize {
    let size = core::mem::size_of::<T>();

    if size == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / size
    }
}

/// Typed allocation capability.
///
/// An allocator hands out raw, uninitialized blocks sized in elements of `T`
/// and constructs or destroys single elements inside them. It never tracks
/// which slots are initialized; that is the container's job.
///
/// # Equality
///
/// Two allocators that compare equal must be able to release each other's
/// blocks. Containers rely on this when nodes move between lists.
///
/// # Rebind
///
/// [`Allocator::rebind`] produces an equivalent allocator for another element
/// type. The list uses it to allocate its nodes from the allocator supplied
/// for its payload type.
pub trait Allocator<T>: Clone + PartialEq {
    /// The same allocator, retargeted at elements of type `U`.
    type Rebind<U>: Allocator<U>;

    /// Returns an allocator for `U` sharing this allocator's resources.
    fn rebind<U>(&self) -> Self::Rebind<U>;

    /// Allocates uninitialized storage for exactly `n` elements.
    ///
    /// # Errors
    ///
    /// - [`AllocError::ExceedsMaxSize`] if `n > self.max_size()`, checked
    ///   before any memory is requested.
    /// - [`AllocError::Exhausted`] if the underlying heap refuses the request.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases a block previously obtained from [`Allocator::allocate`].
    ///
    /// Null pointers are ignored.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or come from `allocate(n)` on an allocator equal to
    /// `self`, with the same `n`, and must not have been released already.
    /// Every element in the block must already be destroyed or moved out.
    unsafe fn deallocate(&self, ptr: *mut T, n: usize);

    /// Writes `value` into the slot at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to an uninitialized slot inside a live block.
    unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        unsafe { ptr.as_ptr().write(value) };
    }

    /// Builds a value with `f` and writes it into the slot at `ptr`.
    ///
    /// A panic raised by `f` leaves the slot uninitialized.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::construct`].
    unsafe fn construct_with<F>(&self, ptr: NonNull<T>, f: F)
    where
        F: FnOnce() -> T,
    {
        let value = f();
        unsafe { self.construct(ptr, value) };
    }

    /// Drops the element at `ptr` in place, leaving the slot uninitialized.
    ///
    /// # Safety
    ///
    /// `ptr` must point to an initialized element that is not used afterwards.
    unsafe fn destroy(&self, ptr: NonNull<T>) {
        unsafe { ptr::drop_in_place(ptr.as_ptr()) };
    }

    /// Largest `n` accepted by [`Allocator::allocate`].
    fn max_size(&self) -> usize {
        max_size_of::<T>()
    }
}
