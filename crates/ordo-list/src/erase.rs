// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::RangeBounds;
use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::error::{ListError, resolve_range};
use crate::list::List;
use crate::node::{self, Links};

impl<T, A: Allocator<T>> List<T, A> {
    /// Removes and returns the first element, `None` when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let first = self.first();
        // SAFETY: a non-empty list's first link is a node.
        Some(unsafe { self.take_node(first) })
    }

    /// Removes and returns the last element, `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.last();
        // SAFETY: a non-empty list's last link is a node.
        Some(unsafe { self.take_node(last) })
    }

    /// Unlinks the element at `at` and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when `at >= len()`.
    pub fn remove(&mut self, at: usize) -> Result<T, ListError> {
        self.check_element(at)?;
        let link = self.node_at(at);
        // SAFETY: `at < len`, so `link` is a node.
        Ok(unsafe { self.take_node(link) })
    }

    /// Destroys the element at `at` and returns the position of its
    /// successor, which is `at` again.
    pub fn erase(&mut self, at: usize) -> Result<usize, ListError> {
        self.remove(at)?;
        Ok(at)
    }

    /// Destroys the elements in `range` and returns the position of the
    /// element that followed them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::list;
    ///
    /// let mut l = list![0, 1, 2, 3, 4, 5];
    /// let next = l.erase_range(1..4).unwrap();
    ///
    /// assert_eq!(next, 1);
    /// assert_eq!(l, [0, 4, 5]);
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, ListError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.len)?;
        let first = self.node_at(range.start);
        self.erase_links(first, range.len());
        Ok(range.start)
    }

    /// Destroys every element at or past position `n`.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }

        let first = self.node_at(n);
        self.erase_links(first, self.len - n);
    }

    /// Destroys all elements. Only the sentinel remains allocated.
    pub fn clear(&mut self) {
        let first = self.first();
        self.erase_links(first, self.len);
    }

    /// Destroys `count` nodes starting at `link`, one at a time, so a
    /// panicking destructor never leaves a dangling link behind.
    pub(crate) fn erase_links(&mut self, mut link: NonNull<Links>, count: usize) {
        for _ in 0..count {
            // SAFETY: the caller guarantees `count` nodes follow `link`.
            unsafe {
                let next = node::next(link);
                drop(self.take_node(link));
                link = next;
            }
        }
    }
}
