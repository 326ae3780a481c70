// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::allocator::{Allocator, max_size_of};
use crate::error::AllocError;

/// Stateless allocator backed by the global heap.
///
/// Every `DefaultAllocator` compares equal to every other one, whatever its
/// element type, so blocks may be released through any instance.
///
/// # Example
///
/// ```rust
/// use ordo_alloc::{Allocator, DefaultAllocator};
///
/// let ints = DefaultAllocator::<i32>::new();
/// let bytes: DefaultAllocator<u8> = ints.rebind();
///
/// assert!(ints == bytes);
/// assert_eq!(bytes.max_size(), isize::MAX as usize);
/// ```
pub struct DefaultAllocator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> DefaultAllocator<T> {
    /// Creates a new allocator.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    fn layout(n: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(n).map_err(|_| AllocError::ExceedsMaxSize {
            requested: n,
            max: max_size_of::<T>(),
        })
    }
}

impl<T> Allocator<T> for DefaultAllocator<T> {
    type Rebind<U> = DefaultAllocator<U>;

    fn rebind<U>(&self) -> DefaultAllocator<U> {
        DefaultAllocator::new()
    }

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let max = self.max_size();
        if n > max {
            log::debug!("DefaultAllocator: refusing allocate({}) above max_size {}", n, max);
            return Err(AllocError::ExceedsMaxSize { requested: n, max });
        }

        let layout = Self::layout(n)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc(layout) };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                log::trace!("DefaultAllocator: allocate({}) -> {:p}", n, ptr);
                Ok(ptr)
            }
            None => {
                log::debug!("DefaultAllocator: heap refused {} bytes", layout.size());
                Err(AllocError::Exhausted {
                    bytes: layout.size(),
                })
            }
        }
    }

    unsafe fn deallocate(&self, ptr: *mut T, n: usize) {
        if ptr.is_null() {
            return;
        }

        let Ok(layout) = Self::layout(n) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }

        log::trace!("DefaultAllocator: deallocate({:p}, {})", ptr, n);

        // SAFETY: the caller guarantees `ptr` came from `allocate(n)`, which
        // used this exact layout.
        unsafe { dealloc(ptr.cast::<u8>(), layout) };
    }
}

impl<T> Clone for DefaultAllocator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DefaultAllocator<T> {}

impl<T> Default for DefaultAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for DefaultAllocator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DefaultAllocator")
    }
}

impl<T, U> PartialEq<DefaultAllocator<U>> for DefaultAllocator<T> {
    fn eq(&self, _other: &DefaultAllocator<U>) -> bool {
        true
    }
}

impl<T> Eq for DefaultAllocator<T> {}
