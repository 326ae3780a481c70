// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::vector::Vector;

/// Owning iterator returned by `Vector::into_iter`.
///
/// Holds the vector's block; elements not yet yielded are destroyed and the
/// block released when the iterator is dropped.
pub struct IntoIter<T, A: Allocator<T>> {
    ptr: Option<NonNull<T>>,
    cap: usize,
    alloc: A,
    head: usize,
    tail: usize,
}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    pub(crate) fn new(vector: Vector<T, A>) -> Self {
        let mut vector = ManuallyDrop::new(vector);
        // SAFETY: `vector` is never used or dropped again.
        let alloc = unsafe { core::ptr::read(&vector.alloc) };

        Self {
            ptr: vector.ptr.take(),
            cap: vector.cap,
            alloc,
            head: 0,
            tail: vector.len,
        }
    }

    fn base(&self) -> NonNull<T> {
        self.ptr.unwrap_or(NonNull::dangling())
    }

    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [head, tail) is live.
        unsafe {
            core::slice::from_raw_parts(self.base().add(self.head).as_ptr(), self.tail - self.head)
        }
    }
}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        let slot = self.head;
        self.head += 1;
        // SAFETY: `slot` was live and is now outside [head, tail).
        Some(unsafe { self.base().add(slot).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tail - self.head;
        (n, Some(n))
    }
}

impl<T, A: Allocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        // SAFETY: slot `tail` was live and is now outside [head, tail).
        Some(unsafe { self.base().add(self.tail).read() })
    }
}

impl<T, A: Allocator<T>> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}

impl<T: core::fmt::Debug, A: Allocator<T>> core::fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator<T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let base = self.base();
        while self.head < self.tail {
            let slot = self.head;
            self.head += 1;
            // SAFETY: [head, tail) is live.
            unsafe { self.alloc.destroy(base.add(slot)) };
        }

        if let Some(ptr) = self.ptr.take() {
            // SAFETY: the block came from the vector's allocator.
            unsafe { self.alloc.deallocate(ptr.as_ptr(), self.cap) };
        }
    }
}
