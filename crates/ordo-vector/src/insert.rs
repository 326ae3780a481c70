// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::RangeBounds;
use core::ptr;

use ordo_alloc::Allocator;

use crate::error::{VectorError, resolve_range};
use crate::raw::{FreshBlock, Gap};
use crate::vector::Vector;

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Inserts up to `n` values pulled from `next` before `at` and returns the
    /// number actually inserted (less than `n` only if `next` runs dry).
    ///
    /// With enough capacity the tail is shifted and the hole filled in place;
    /// otherwise a fresh block is populated first and the old elements are
    /// moved around the inserted run.
    pub(crate) fn insert_fill<F>(
        &mut self,
        at: usize,
        n: usize,
        mut next: F,
    ) -> Result<usize, VectorError>
    where
        F: FnMut() -> Option<T>,
    {
        if at > self.len {
            return Err(VectorError::OutOfRange {
                index: at,
                len: self.len,
            });
        }

        let required = self.required(n)?;
        if n == 0 {
            return Ok(0);
        }

        if required <= self.cap {
            let base = self.block();
            // SAFETY: capacity covers len + n and `at <= len`.
            let mut gap = unsafe { Gap::open(&self.alloc, base, &mut self.len, at, n) };
            gap.fill(&mut next);
            return Ok(gap.filled());
        }

        let mut fresh = FreshBlock::new(&self.alloc, self.grown_capacity(required), at)?;
        fresh.fill(n, &mut next);
        let inserted = fresh.filled();
        let (ptr, cap) = fresh.into_raw();

        let old = self.block();
        // SAFETY: the new block holds `inserted` elements at [at, at + inserted)
        // and has room for the prefix and the tail on either side.
        unsafe {
            ptr::copy_nonoverlapping(old.as_ptr(), ptr.as_ptr(), at);
            ptr::copy_nonoverlapping(
                old.add(at).as_ptr(),
                ptr.add(at + inserted).as_ptr(),
                self.len - at,
            );
        }

        self.install(ptr, cap);
        self.len += inserted;
        Ok(inserted)
    }

    /// Appends `value`, growing the capacity geometrically when full.
    ///
    /// # Errors
    ///
    /// [`VectorError::Length`] or [`VectorError::Exhausted`] when the vector
    /// cannot grow. The vector is unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), VectorError> {
        if self.len == self.cap {
            self.grow_for(1)?;
        }

        // SAFETY: len < cap after growing.
        unsafe { self.alloc.construct(self.block().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Appends the value built by `f` and returns a reference to it.
    ///
    /// If `f` panics the vector keeps its contents and capacity.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, VectorError>
    where
        F: FnOnce() -> T,
    {
        let at = self.len;
        self.emplace(at, f)
    }

    /// Inserts the value built by `f` before `at` and returns a reference to it.
    pub fn emplace<F>(&mut self, at: usize, f: F) -> Result<&mut T, VectorError>
    where
        F: FnOnce() -> T,
    {
        let mut f = Some(f);
        self.insert_fill(at, 1, || f.take().map(|f| f()))?;

        // SAFETY: `insert_fill` succeeded, so slot `at` holds the new element.
        Ok(unsafe { &mut *self.block().add(at).as_ptr() })
    }

    /// Inserts `value` before `at` and returns `at`.
    ///
    /// # Errors
    ///
    /// - [`VectorError::OutOfRange`] when `at > len()`.
    /// - [`VectorError::Length`] / [`VectorError::Exhausted`] when the vector
    ///   cannot grow.
    pub fn insert(&mut self, at: usize, value: T) -> Result<usize, VectorError> {
        let mut value = Some(value);
        self.insert_fill(at, 1, || value.take())?;
        Ok(at)
    }

    /// Inserts `n` clones of `value` before `at` and returns `at`.
    pub fn insert_n(&mut self, at: usize, n: usize, value: &T) -> Result<usize, VectorError>
    where
        T: Clone,
    {
        self.insert_fill(at, n, || Some(value.clone()))?;
        Ok(at)
    }

    /// Inserts clones of `items` before `at` and returns `at`.
    pub fn insert_slice(&mut self, at: usize, items: &[T]) -> Result<usize, VectorError>
    where
        T: Clone,
    {
        let mut iter = items.iter();
        self.insert_fill(at, items.len(), || iter.next().cloned())?;
        Ok(at)
    }

    /// Inserts every item of `iter` before `at`, keeping their order.
    ///
    /// Iterators with an exact size hint are written straight into place;
    /// items beyond the hint are still inserted after them. Others are first
    /// collected into a temporary vector.
    pub fn insert_iter<I>(&mut self, at: usize, iter: I) -> Result<usize, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        if at > self.len {
            return Err(VectorError::OutOfRange {
                index: at,
                len: self.len,
            });
        }

        let mut iter = iter.into_iter();
        match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                let inserted = self.insert_fill(at, lower, || iter.next())?;
                self.insert_rest(at + inserted, iter)?;
            }
            _ => {
                let staged = Self::collect_growing(iter, self.alloc.clone())?;
                let n = staged.len();
                let mut staged = staged.into_iter();
                self.insert_fill(at, n, || staged.next())?;
            }
        }

        Ok(at)
    }

    /// Inserts whatever `iter` still yields before `at`, for iterators that
    /// under-reported their length.
    pub(crate) fn insert_rest<I>(&mut self, at: usize, iter: I) -> Result<(), VectorError>
    where
        I: Iterator<Item = T>,
    {
        let rest = Self::collect_growing(iter, self.alloc.clone())?;
        if rest.is_empty() {
            return Ok(());
        }

        let n = rest.len();
        let mut rest = rest.into_iter();
        self.insert_fill(at, n, || rest.next())?;
        Ok(())
    }

    /// Inserts clones of `self[range]` before `at`.
    ///
    /// The range is copied out before anything moves, so it may overlap the
    /// insertion point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_vector::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut v = Vector::from_slice(&[1, 2, 3, 4])?;
    ///     v.insert_from_within(1, 2..)?;
    ///     assert_eq!(v, [1, 3, 4, 2, 3, 4]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_from_within<R>(&mut self, at: usize, range: R) -> Result<usize, VectorError>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        if at > self.len {
            return Err(VectorError::OutOfRange {
                index: at,
                len: self.len,
            });
        }

        let range = resolve_range(range, self.len)?;
        let snapshot = Self::from_slice_in(&self.as_slice()[range], self.alloc.clone())?;
        let n = snapshot.len();
        let mut snapshot = snapshot.into_iter();

        self.insert_fill(at, n, || snapshot.next())?;
        Ok(at)
    }

    /// Appends clones of `self[range]`.
    pub fn extend_from_within<R>(&mut self, range: R) -> Result<(), VectorError>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let at = self.len;
        self.insert_from_within(at, range)?;
        Ok(())
    }

    /// Appends clones of `items`.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let at = self.len;
        self.insert_slice(at, items)?;
        Ok(())
    }
}
