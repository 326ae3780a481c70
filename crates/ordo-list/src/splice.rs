// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! O(1) relinking of node runs between and within lists.
//!
//! Splicing never constructs, clones or destroys a payload. Moved nodes
//! keep their identity; only their list membership and the two length
//! counters change. Moving a run of `k` nodes costs O(1) link surgery plus
//! the O(k) walk needed to locate its end by position.

use core::ops::RangeBounds;

use ordo_alloc::Allocator;

use crate::error::{ListError, resolve_range};
use crate::list::List;
use crate::node;

impl<T, A: Allocator<T>> List<T, A> {
    /// Moves every element of `other` before position `at`, leaving `other`
    /// empty.
    ///
    /// # Errors
    ///
    /// - [`ListError::AllocatorMismatch`] when the allocators differ.
    /// - [`ListError::OutOfRange`] when `at > len()`.
    /// - [`ListError::Length`] when the combined length exceeds `max_size()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::{List, ListError};
    ///
    /// fn example() -> Result<(), ListError> {
    ///     let mut a = List::from_slice(&[1, 4])?;
    ///     let mut b = List::from_slice(&[2, 3])?;
    ///
    ///     a.splice(1, &mut b)?;
    ///     assert_eq!(a, [1, 2, 3, 4]);
    ///     assert!(b.is_empty());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn splice(&mut self, at: usize, other: &mut Self) -> Result<(), ListError> {
        self.check_allocator(other)?;
        self.check_position(at)?;
        self.required(other.len)?;

        let pos = self.node_at(at);
        self.adopt_before(pos, other);
        Ok(())
    }

    /// Moves the element at `index` of `other` before position `at`.
    pub fn splice_one(
        &mut self,
        at: usize,
        other: &mut Self,
        index: usize,
    ) -> Result<(), ListError> {
        self.check_allocator(other)?;
        other.check_element(index)?;
        self.splice_range(at, other, index..=index)
    }

    /// Moves the elements in `range` of `other` before position `at`.
    pub fn splice_range<R>(
        &mut self,
        at: usize,
        other: &mut Self,
        range: R,
    ) -> Result<(), ListError>
    where
        R: RangeBounds<usize>,
    {
        self.check_allocator(other)?;
        self.check_position(at)?;
        let range = resolve_range(range, other.len)?;
        let count = range.len();
        self.required(count)?;

        if count == 0 {
            return Ok(());
        }

        let pos = self.node_at(at);
        let first = other.node_at(range.start);
        // SAFETY: `count` nodes follow `first` inside `other`.
        let last = unsafe { node::advance(first, count) };

        // SAFETY: the run belongs to `other`, a different list from `self`.
        unsafe { node::transfer(pos, first, last) };
        other.len -= count;
        self.len += count;
        Ok(())
    }

    /// Moves the elements in `range` before position `at` of the same list.
    ///
    /// `at` equal to either end of the range leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// - [`ListError::OutOfRange`] when `at` or the range falls outside the
    ///   list.
    /// - [`ListError::OverlappingSplice`] when `range.start < at < range.end`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::list;
    ///
    /// let mut l = list![0, 1, 2, 3, 4];
    /// l.splice_within(0, 3..5).unwrap();
    /// assert_eq!(l, [3, 4, 0, 1, 2]);
    /// ```
    pub fn splice_within<R>(&mut self, at: usize, range: R) -> Result<(), ListError>
    where
        R: RangeBounds<usize>,
    {
        self.check_position(at)?;
        let range = resolve_range(range, self.len)?;

        if range.start < at && at < range.end {
            return Err(ListError::OverlappingSplice {
                at,
                start: range.start,
                end: range.end,
            });
        }
        if range.is_empty() || at == range.start || at == range.end {
            return Ok(());
        }

        let pos = self.node_at(at);
        let first = self.node_at(range.start);
        // SAFETY: `range.len()` nodes follow `first`.
        let last = unsafe { node::advance(first, range.len()) };

        // SAFETY: `pos` lies outside `[first, last)`.
        unsafe { node::transfer(pos, first, last) };
        Ok(())
    }
}
