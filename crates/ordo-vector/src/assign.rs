// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::RangeBounds;

use ordo_alloc::Allocator;

use crate::error::{VectorError, resolve_range};
use crate::raw::FreshBlock;
use crate::vector::Vector;

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Replaces the contents with up to `n` values pulled from `next`.
    ///
    /// When `n` fits the current capacity, live elements are overwritten in
    /// place and the remainder constructed after them. Otherwise a block of
    /// exactly `n` slots is populated before the old contents are destroyed.
    pub(crate) fn assign_exact<F>(&mut self, n: usize, mut next: F) -> Result<(), VectorError>
    where
        F: FnMut() -> Option<T>,
    {
        let max = self.max_size();
        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        if n <= self.cap {
            let overlap = n.min(self.len);
            for i in 0..overlap {
                let Some(value) = next() else {
                    self.truncate(i);
                    return Ok(());
                };
                self.as_mut_slice()[i] = value;
            }

            self.truncate(n);
            let at = self.len;
            self.insert_fill(at, n - overlap, next)?;
            return Ok(());
        }

        let mut fresh = FreshBlock::new(&self.alloc, n, 0)?;
        fresh.fill(n, &mut next);
        let filled = fresh.filled();
        let (ptr, cap) = fresh.into_raw();

        self.clear();
        self.install(ptr, cap);
        self.len = filled;
        Ok(())
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// - [`VectorError::Length`] when `n > max_size()`.
    /// - [`VectorError::Exhausted`] when a larger block is needed and the
    ///   allocator refuses; the vector is unchanged.
    pub fn assign_n(&mut self, n: usize, value: &T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.assign_exact(n, || Some(value.clone()))
    }

    /// Replaces the contents with clones of `items`.
    pub fn assign_slice(&mut self, items: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let mut iter = items.iter();
        self.assign_exact(items.len(), || iter.next().cloned())
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                self.assign_exact(lower, || iter.next())?;
                let at = self.len;
                self.insert_rest(at, iter)
            }
            _ => {
                let staged = Self::collect_growing(iter, self.alloc.clone())?;
                let n = staged.len();
                let mut staged = staged.into_iter();
                self.assign_exact(n, || staged.next())
            }
        }
    }

    /// Replaces the contents with clones of `self[range]`.
    pub fn assign_from_within<R>(&mut self, range: R) -> Result<(), VectorError>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let range = resolve_range(range, self.len)?;
        let snapshot = Self::from_slice_in(&self.as_slice()[range], self.alloc.clone())?;
        let n = snapshot.len();
        let mut snapshot = snapshot.into_iter();

        self.assign_exact(n, || snapshot.next())
    }

    /// Shrinks to `n` elements or appends clones of `value` up to `n`.
    pub fn resize(&mut self, n: usize, value: &T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.resize_with(n, || value.clone())
    }

    /// Shrinks to `n` elements or appends default values up to `n`.
    pub fn resize_default(&mut self, n: usize) -> Result<(), VectorError>
    where
        T: Default,
    {
        self.resize_with(n, T::default)
    }

    /// Shrinks to `n` elements or appends values built by `f` up to `n`.
    pub fn resize_with<F>(&mut self, n: usize, mut f: F) -> Result<(), VectorError>
    where
        F: FnMut() -> T,
    {
        if n <= self.len {
            self.truncate(n);
            return Ok(());
        }

        let at = self.len;
        self.insert_fill(at, n - at, || Some(f()))?;
        Ok(())
    }
}
