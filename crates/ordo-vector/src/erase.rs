// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::RangeBounds;
use core::ptr;

use ordo_alloc::Allocator;

use crate::error::{VectorError, resolve_range};
use crate::vector::Vector;

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Removes and returns the last element, `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { self.block().add(self.len).read() })
    }

    /// Removes the element at `at`, shifting the tail left, and returns it.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] when `at >= len()`.
    pub fn remove(&mut self, at: usize) -> Result<T, VectorError> {
        if at >= self.len {
            return Err(VectorError::OutOfRange {
                index: at,
                len: self.len,
            });
        }

        let base = self.block();
        // SAFETY: `at` is live; the tail [at + 1, len) slides down by one.
        unsafe {
            let value = base.add(at).read();
            ptr::copy(base.add(at + 1).as_ptr(), base.add(at).as_ptr(), self.len - at - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Destroys the element at `at` and returns the index of its successor
    /// (which is `at` after the shift).
    pub fn erase(&mut self, at: usize) -> Result<usize, VectorError> {
        self.remove(at)?;
        Ok(at)
    }

    /// Destroys `self[range]`, shifting the tail left by the range length.
    ///
    /// Returns the index of the element that followed the range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_vector::vector;
    ///
    /// let mut v = vector![0, 1, 2, 3, 4, 5];
    /// let next = v.erase_range(1..4).unwrap();
    ///
    /// assert_eq!(next, 1);
    /// assert_eq!(v, [0, 4, 5]);
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, VectorError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.len)?;
        let (start, end) = (range.start, range.end);
        if start == end {
            return Ok(start);
        }

        let old_len = self.len;
        // Hide [start, len) first: a panicking destructor leaks the tail
        // instead of dropping anything twice.
        self.len = start;

        let base = self.block();
        for i in start..end {
            // SAFETY: slots in [start, end) are live and dropped exactly once.
            unsafe { self.alloc.destroy(base.add(i)) };
        }

        // SAFETY: [end, old_len) is live; slide it onto [start, ..).
        unsafe { ptr::copy(base.add(end).as_ptr(), base.add(start).as_ptr(), old_len - end) };
        self.len = old_len - (end - start);

        Ok(start)
    }

    /// Destroys every element at or past `n`. Capacity is unchanged.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }

        let old_len = self.len;
        self.len = n;

        let base = self.block();
        for i in n..old_len {
            // SAFETY: [n, old_len) was live and is no longer reachable.
            unsafe { self.alloc.destroy(base.add(i)) };
        }
    }

    /// Destroys all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
