// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop guards that keep storage consistent while elements are constructed.
//!
//! ```text
//!   FreshBlock (reallocating paths, strong guarantee)
//!   ┌────────┬───────────────┬────────┐
//!   │  raw   │ filled [s..)  │  raw   │   on unwind: destroy filled, free block
//!   └────────┴───────────────┴────────┘
//!
//!   Gap (in-place paths, basic guarantee)
//!   ┌──────────┬─────────┬──────┬────────┐
//!   │ [0, at)  │ filled  │ hole │  tail  │   on drop: slide tail over the hole
//!   └──────────┴─────────┴──────┴────────┘
//! ```

use core::mem::ManuallyDrop;
use core::ptr::{self, NonNull};

use ordo_alloc::Allocator;

use crate::error::VectorError;

/// Constructs up to `n - *filled` values from `next` into consecutive slots
/// starting at `first + *filled`. Stops early when `next` runs dry.
///
/// # Safety
///
/// The slots `first..first + n` must be raw storage inside one live block.
unsafe fn fill_slots<T, A, F>(
    alloc: &A,
    first: NonNull<T>,
    n: usize,
    filled: &mut usize,
    next: &mut F,
)
where
    A: Allocator<T>,
    F: FnMut() -> Option<T>,
{
    while *filled < n {
        let Some(value) = next() else {
            break;
        };
        unsafe { alloc.construct(first.add(*filled), value) };
        *filled += 1;
    }
}

/// A newly allocated block being populated from slot `start`.
///
/// Dropping the guard destroys everything constructed so far and releases the
/// block, so the container that requested it is left untouched.
pub(crate) struct FreshBlock<'a, T, A: Allocator<T>> {
    alloc: &'a A,
    ptr: NonNull<T>,
    cap: usize,
    start: usize,
    filled: usize,
}

impl<'a, T, A: Allocator<T>> FreshBlock<'a, T, A> {
    /// Allocates `cap` slots. Construction will begin at slot `start`.
    pub(crate) fn new(alloc: &'a A, cap: usize, start: usize) -> Result<Self, VectorError> {
        debug_assert!(start <= cap);

        let ptr = alloc.allocate(cap).map_err(|err| {
            log::debug!("Vector: allocate({}) failed: {}", cap, err);
            VectorError::from(err)
        })?;

        Ok(Self {
            alloc,
            ptr,
            cap,
            start,
            filled: 0,
        })
    }

    /// Constructs up to `n` elements in total from `next`.
    pub(crate) fn fill<F>(&mut self, n: usize, next: &mut F)
    where
        F: FnMut() -> Option<T>,
    {
        debug_assert!(self.start + n <= self.cap);

        // SAFETY: slots [start, start + n) lie inside the block and are raw.
        unsafe {
            fill_slots(
                self.alloc,
                self.ptr.add(self.start),
                n,
                &mut self.filled,
                next,
            )
        };
    }

    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    /// Disarms the guard, handing the block and its capacity to the caller.
    pub(crate) fn into_raw(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.ptr, this.cap)
    }
}

impl<T, A: Allocator<T>> Drop for FreshBlock<'_, T, A> {
    fn drop(&mut self) {
        for i in self.start..self.start + self.filled {
            // SAFETY: exactly these slots were constructed by `fill`.
            unsafe { self.alloc.destroy(self.ptr.add(i)) };
        }

        // SAFETY: block came from `self.alloc.allocate(self.cap)`.
        unsafe { self.alloc.deallocate(self.ptr.as_ptr(), self.cap) };
    }
}

/// A hole of `width` slots opened at `at` inside a live block.
///
/// While the guard lives the owner's length is `at`, so the shifted tail is
/// invisible. Dropping the guard slides the tail back against whatever was
/// constructed and publishes the final length.
pub(crate) struct Gap<'a, T, A: Allocator<T>> {
    alloc: &'a A,
    base: NonNull<T>,
    len: &'a mut usize,
    at: usize,
    width: usize,
    tail: usize,
    filled: usize,
}

impl<'a, T, A: Allocator<T>> Gap<'a, T, A> {
    /// Shifts `[at, *len)` right by `width`.
    ///
    /// # Safety
    ///
    /// `base` must point to a block with room for `*len + width` elements,
    /// `[0, *len)` live, and `at <= *len`.
    pub(crate) unsafe fn open(
        alloc: &'a A,
        base: NonNull<T>,
        len: &'a mut usize,
        at: usize,
        width: usize,
    ) -> Self {
        let tail = *len - at;

        unsafe { ptr::copy(base.add(at).as_ptr(), base.add(at + width).as_ptr(), tail) };
        *len = at;

        Self {
            alloc,
            base,
            len,
            at,
            width,
            tail,
            filled: 0,
        }
    }

    /// Constructs up to `width` elements in total from `next`.
    pub(crate) fn fill<F>(&mut self, next: &mut F)
    where
        F: FnMut() -> Option<T>,
    {
        // SAFETY: the hole [at, at + width) is raw storage.
        unsafe {
            fill_slots(
                self.alloc,
                self.base.add(self.at),
                self.width,
                &mut self.filled,
                next,
            )
        };
    }

    pub(crate) fn filled(&self) -> usize {
        self.filled
    }
}

impl<T, A: Allocator<T>> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        if self.filled < self.width {
            // SAFETY: tail was moved to [at + width, ..) by `open`.
            unsafe {
                ptr::copy(
                    self.base.add(self.at + self.width).as_ptr(),
                    self.base.add(self.at + self.filled).as_ptr(),
                    self.tail,
                )
            };
        }

        *self.len = self.at + self.filled + self.tail;
    }
}
