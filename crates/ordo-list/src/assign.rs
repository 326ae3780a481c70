// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_alloc::Allocator;

use crate::error::ListError;
use crate::list::List;
use crate::node;

impl<T, A: Allocator<T>> List<T, A> {
    /// Replaces the contents with the items of `iter`.
    ///
    /// Existing nodes are reused for the leading items; surplus nodes are
    /// destroyed and missing ones appended as a staged chain.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut link = self.first();
        let mut kept = 0;

        while link != self.sentinel {
            let Some(value) = iter.next() else {
                let surplus = self.len - kept;
                self.erase_links(link, surplus);
                return Ok(());
            };

            // SAFETY: `link` is a node of this list.
            unsafe {
                *node::value_mut::<T>(link) = value;
                link = node::next(link);
            }
            kept += 1;
        }

        let end = self.sentinel;
        self.insert_staged(end, iter)?;
        Ok(())
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// [`ListError::Length`] when `n > max_size()`, before anything changes.
    pub fn assign_n(&mut self, n: usize, value: &T) -> Result<(), ListError>
    where
        T: Clone,
    {
        let max = self.max_size();
        if n > max {
            return Err(ListError::Length { requested: n, max });
        }

        self.assign_iter(core::iter::repeat_with(|| value.clone()).take(n))
    }

    /// Replaces the contents with clones of `items`.
    pub fn assign_slice(&mut self, items: &[T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        self.assign_iter(items.iter().cloned())
    }

    /// Shrinks to `n` elements or appends clones of `value` up to `n`.
    pub fn resize(&mut self, n: usize, value: &T) -> Result<(), ListError>
    where
        T: Clone,
    {
        self.resize_with(n, || value.clone())
    }

    /// Shrinks to `n` elements or appends default values up to `n`.
    pub fn resize_default(&mut self, n: usize) -> Result<(), ListError>
    where
        T: Default,
    {
        self.resize_with(n, T::default)
    }

    /// Shrinks to `n` elements or appends values built by `f` up to `n`.
    ///
    /// Growth is all-or-nothing: the new nodes are staged before linking.
    pub fn resize_with<F>(&mut self, n: usize, f: F) -> Result<(), ListError>
    where
        F: FnMut() -> T,
    {
        if n <= self.len {
            self.truncate(n);
            return Ok(());
        }

        let extra = n - self.len;
        self.required(extra)?;

        let end = self.sentinel;
        self.insert_staged(end, core::iter::repeat_with(f).take(extra))?;
        Ok(())
    }
}
