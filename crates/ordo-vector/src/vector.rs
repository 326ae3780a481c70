// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use ordo_alloc::{Allocator, DefaultAllocator};

use crate::cursor::Cursor;
use crate::error::VectorError;
use crate::raw::FreshBlock;

/// Contiguous growable array whose storage comes from an [`Allocator`].
///
/// Elements `[0, len)` are live and `[len, capacity)` is raw storage. The
/// block pointer is absent exactly when the capacity is zero.
///
/// # Panic safety
///
/// Element construction (`Clone`, `Default`, user closures, iterators) may
/// panic. Operations that reallocate populate the new block completely before
/// touching the old one, so a panic leaves the vector exactly as it was.
/// Operations that work in place keep every element that was already
/// constructed and adjust the length to match.
///
/// # Example
///
/// ```rust
/// use ordo_vector::{Vector, VectorError};
///
/// fn example() -> Result<(), VectorError> {
///     let mut v = Vector::from_slice(&[1, 2, 3])?;
///     v.reserve(100)?;
///     assert_eq!(v.capacity(), 100);
///
///     v.insert_n(1, 2, &9)?;
///     assert_eq!(v, [1, 9, 9, 2, 3]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Vector<T, A: Allocator<T> = DefaultAllocator<T>> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: Vector owns its elements and allocator exclusively.
unsafe impl<T: Send, A: Allocator<T> + Send> Send for Vector<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T> {
    /// Creates an empty vector. Nothing is allocated.
    pub const fn new() -> Self {
        Self::new_in(DefaultAllocator::new())
    }

    /// Creates a vector of `n` default values with capacity exactly `n`.
    pub fn with_default(n: usize) -> Result<Self, VectorError>
    where
        T: Default,
    {
        Self::with_default_in(n, DefaultAllocator::new())
    }

    /// Creates a vector of `n` clones of `value` with capacity exactly `n`.
    pub fn from_elem(n: usize, value: &T) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_elem_in(n, value, DefaultAllocator::new())
    }

    /// Creates a vector holding clones of `items`.
    pub fn from_slice(items: &[T]) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_slice_in(items, DefaultAllocator::new())
    }

    /// Collects `iter` with capacity exactly equal to the resulting length.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_iter_in(iter, DefaultAllocator::new())
    }
}

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Creates an empty vector using `alloc`. Nothing is allocated.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// [`Vector::with_default`] with an explicit allocator.
    pub fn with_default_in(n: usize, alloc: A) -> Result<Self, VectorError>
    where
        T: Default,
    {
        let mut v = Self::new_in(alloc);
        v.insert_fill(0, n, || Some(T::default()))?;
        Ok(v)
    }

    /// [`Vector::from_elem`] with an explicit allocator.
    pub fn from_elem_in(n: usize, value: &T, alloc: A) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut v = Self::new_in(alloc);
        v.insert_fill(0, n, || Some(value.clone()))?;
        Ok(v)
    }

    /// [`Vector::from_slice`] with an explicit allocator.
    pub fn from_slice_in(items: &[T], alloc: A) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut v = Self::new_in(alloc);
        let mut iter = items.iter();
        v.insert_fill(0, items.len(), || iter.next().cloned())?;
        Ok(v)
    }

    /// [`Vector::try_from_iter`] with an explicit allocator.
    pub fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::new_in(alloc);
        v.assign_iter(iter)?;
        Ok(v)
    }

    /// Collects with amortized growth. Capacity may exceed the length.
    pub(crate) fn collect_growing<I>(iter: I, alloc: A) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::new_in(alloc);
        for value in iter {
            v.push_back(value)?;
        }
        Ok(v)
    }

    /// Deep copy using a clone of this vector's allocator.
    ///
    /// The copy's capacity equals its length.
    pub fn try_clone(&self) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_slice_in(self.as_slice(), self.alloc.clone())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots in the current block.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Largest length this vector can reach:
    /// `min(allocator.max_size(), isize::MAX)`.
    pub fn max_size(&self) -> usize {
        self.alloc.max_size().min(isize::MAX as usize)
    }

    /// Returns the allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Pointer to the block, null when no block is held.
    pub fn data(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Pointer to the first element; dangling but aligned without a block.
    pub fn as_ptr(&self) -> *const T {
        self.block().as_ptr()
    }

    /// Mutable counterpart of [`Vector::as_ptr`].
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block().as_ptr()
    }

    /// Live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live; the pointer is aligned even without a block.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus exclusive access through `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// Mutable bounds-checked access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// First element, `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // =========================================================================
    // Cursors
    // =========================================================================

    /// Cursor at the first element (the ghost when empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor at the ghost position past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Cursor at `index`; `index == len()` yields the ghost.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, VectorError> {
        if index > self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(Cursor::new(self.as_slice(), index))
    }

    /// Reverse cursor at the last element.
    pub fn rcursor_front(&self) -> ordo_iter::Reverse<Cursor<'_, T>> {
        ordo_iter::Reverse::new(self.cursor_end())
    }

    /// Reverse cursor at its ghost, before the first element.
    pub fn rcursor_end(&self) -> ordo_iter::Reverse<Cursor<'_, T>> {
        ordo_iter::Reverse::new(self.cursor_front())
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Grows the capacity to exactly `n` when it is smaller. Never shrinks.
    ///
    /// # Errors
    ///
    /// - [`VectorError::Length`] when `n > max_size()`.
    /// - [`VectorError::Exhausted`] when the allocator refuses; the vector is
    ///   unchanged.
    pub fn reserve(&mut self, n: usize) -> Result<(), VectorError> {
        if n <= self.cap {
            return Ok(());
        }

        let max = self.max_size();
        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        self.relocate(n)
    }

    /// Reallocates so that the capacity equals the length.
    ///
    /// An empty vector releases its block entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), VectorError> {
        if self.cap == self.len {
            return Ok(());
        }

        if self.len == 0 {
            self.release_block();
            return Ok(());
        }

        self.relocate(self.len)
    }

    /// Exchanges contents, capacity and allocator with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    // =========================================================================
    // Storage internals
    // =========================================================================

    /// Block pointer, dangling when no block is held.
    pub(crate) fn block(&self) -> NonNull<T> {
        self.ptr.unwrap_or(NonNull::dangling())
    }

    /// `len + extra`, rejected when it would exceed `max_size()`.
    pub(crate) fn required(&self, extra: usize) -> Result<usize, VectorError> {
        let max = self.max_size();

        match self.len.checked_add(extra) {
            Some(required) if required <= max => Ok(required),
            Some(requested) => Err(VectorError::Length { requested, max }),
            None => Err(VectorError::Length {
                requested: usize::MAX,
                max,
            }),
        }
    }

    /// Growth policy: `max(2 * capacity, required)`, clamped to `max_size()`.
    pub(crate) fn grown_capacity(&self, required: usize) -> usize {
        self.cap.saturating_mul(2).max(required).min(self.max_size())
    }

    /// Ensures room for `extra` more elements, growing geometrically.
    pub(crate) fn grow_for(&mut self, extra: usize) -> Result<(), VectorError> {
        let required = self.required(extra)?;
        if required > self.cap {
            self.relocate(self.grown_capacity(required))?;
        }
        Ok(())
    }

    /// Moves every live element into a fresh block of `new_cap` slots.
    ///
    /// Moves are bitwise, so once the block is obtained nothing can fail.
    pub(crate) fn relocate(&mut self, new_cap: usize) -> Result<(), VectorError> {
        debug_assert!(new_cap >= self.len && new_cap > 0);

        let fresh = FreshBlock::new(&self.alloc, new_cap, 0)?;
        let (ptr, cap) = fresh.into_raw();

        // SAFETY: distinct blocks; [0, len) live in the old one.
        unsafe { ptr::copy_nonoverlapping(self.block().as_ptr(), ptr.as_ptr(), self.len) };

        self.install(ptr, cap);
        Ok(())
    }

    /// Releases the old block without destroying anything and adopts `ptr`.
    ///
    /// The caller must already have moved the live elements into `ptr`.
    pub(crate) fn install(&mut self, ptr: NonNull<T>, cap: usize) {
        log::debug!("Vector: reallocated, capacity {} -> {}", self.cap, cap);

        self.release_block();
        self.ptr = Some(ptr);
        self.cap = cap;
    }

    /// Frees the block. Live elements must already be destroyed or moved.
    pub(crate) fn release_block(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: block came from `self.alloc.allocate(self.cap)`.
            unsafe { self.alloc.deallocate(ptr.as_ptr(), self.cap) };
        }
        self.cap = 0;
    }
}

impl<T, A: Allocator<T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.clear();
        self.release_block();
    }
}
