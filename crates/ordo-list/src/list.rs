// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use ordo_alloc::{Allocator, DefaultAllocator};
use ordo_iter::Reverse;

use crate::cursor::{Cursor, CursorMut};
use crate::error::ListError;
use crate::iter::{Iter, IterMut};
use crate::node::{self, Links, Node};

/// Circular doubly linked list whose nodes come from an [`Allocator`].
///
/// Each element lives in its own node, allocated from
/// `A::Rebind<Node<T>>`. A heap sentinel closes the ring, so the list value
/// itself can move without invalidating any link.
///
/// # Panic safety
///
/// Bulk inserts build a detached chain before linking it in, so a panicking
/// constructor leaves the list exactly as it was. Algorithms that reorder
/// nodes ([`List::sort_by`], [`List::merge_by`], [`List::unique_by`]) only
/// relink between calls to user code, so a panic leaves a consistent list
/// holding every element.
///
/// # Example
///
/// ```rust
/// use ordo_list::{List, ListError};
///
/// fn example() -> Result<(), ListError> {
///     let mut list = List::new();
///     for v in [5, 3, 4, 1] {
///         list.push_back(v)?;
///     }
///
///     list.sort();
///     assert_eq!(list, [1, 3, 4, 5]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct List<T, A: Allocator<T> = DefaultAllocator<T>> {
    pub(crate) sentinel: NonNull<Links>,
    pub(crate) len: usize,
    pub(crate) alloc: A,
    pub(crate) node_alloc: A::Rebind<Node<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: List owns its nodes and both allocators exclusively.
unsafe impl<T: Send, A> Send for List<T, A>
where
    A: Allocator<T> + Send,
    A::Rebind<Node<T>>: Send,
{
}
// SAFETY: shared access only hands out `&T`, `&A` and `&A::Rebind<Node<T>>`.
unsafe impl<T: Sync, A> Sync for List<T, A>
where
    A: Allocator<T> + Sync,
    A::Rebind<Node<T>>: Sync,
{
}

impl<T> List<T> {
    /// Creates an empty list. Only the sentinel is allocated.
    pub fn new() -> Self {
        Self::new_in(DefaultAllocator::new())
    }

    /// Creates a list of `n` default values.
    pub fn with_default(n: usize) -> Result<Self, ListError>
    where
        T: Default,
    {
        Self::with_default_in(n, DefaultAllocator::new())
    }

    /// Creates a list of `n` clones of `value`.
    pub fn from_elem(n: usize, value: &T) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::from_elem_in(n, value, DefaultAllocator::new())
    }

    /// Creates a list holding clones of `items`.
    pub fn from_slice(items: &[T]) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::from_slice_in(items, DefaultAllocator::new())
    }

    /// Collects `iter` into a list.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_iter_in(iter, DefaultAllocator::new())
    }
}

impl<T, A: Allocator<T>> List<T, A> {
    /// Creates an empty list whose nodes come from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        let node_alloc = alloc.rebind::<Node<T>>();

        Self {
            sentinel: node::new_sentinel(),
            len: 0,
            alloc,
            node_alloc,
            _marker: PhantomData,
        }
    }

    /// [`List::with_default`] with an explicit allocator.
    pub fn with_default_in(n: usize, alloc: A) -> Result<Self, ListError>
    where
        T: Default,
    {
        let mut list = Self::new_in(alloc);
        list.resize_default(n)?;
        Ok(list)
    }

    /// [`List::from_elem`] with an explicit allocator.
    pub fn from_elem_in(n: usize, value: &T, alloc: A) -> Result<Self, ListError>
    where
        T: Clone,
    {
        let mut list = Self::new_in(alloc);
        list.insert_n(0, n, value)?;
        Ok(list)
    }

    /// [`List::from_slice`] with an explicit allocator.
    pub fn from_slice_in(items: &[T], alloc: A) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::try_from_iter_in(items.iter().cloned(), alloc)
    }

    /// [`List::try_from_iter`] with an explicit allocator.
    pub fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new_in(alloc);
        for value in iter {
            list.push_back(value)?;
        }
        Ok(list)
    }

    /// Deep copy sharing this list's allocator.
    pub fn try_clone(&self) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::try_from_iter_in(self.iter().cloned(), self.alloc.clone())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest element count the node allocator can address.
    pub fn max_size(&self) -> usize {
        self.node_alloc.max_size()
    }

    /// The allocator supplied at construction.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// First element, `None` when empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: a non-empty list's first link is a node.
        (!self.is_empty()).then(|| unsafe { node::value(self.first()) })
    }

    /// Mutable first element, `None` when empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.first();
        // SAFETY: as in `front`, and `&mut self` makes the borrow unique.
        (!self.is_empty()).then(|| unsafe { node::value_mut(first) })
    }

    /// Last element, `None` when empty.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: a non-empty list's last link is a node.
        (!self.is_empty()).then(|| unsafe { node::value(self.last()) })
    }

    /// Mutable last element, `None` when empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.last();
        // SAFETY: as in `back`, and `&mut self` makes the borrow unique.
        (!self.is_empty()).then(|| unsafe { node::value_mut(last) })
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first(), self.last(), self.len)
    }

    /// Front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first(), self.last(), self.len)
    }

    /// `true` when some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Cursor on the first element (on the ghost when empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self.first(), 0, self.sentinel, self.len)
    }

    /// Cursor on the ghost position past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.sentinel, self.len, self.sentinel, self.len)
    }

    /// Cursor on position `index`; `len()` addresses the ghost.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, ListError> {
        self.check_position(index)?;
        Ok(Cursor::new(self.node_at(index), index, self.sentinel, self.len))
    }

    /// Reverse cursor on the last element.
    pub fn rcursor_front(&self) -> Reverse<Cursor<'_, T>> {
        Reverse::new(self.cursor_end())
    }

    /// Reverse cursor on the ghost before the first element.
    pub fn rcursor_end(&self) -> Reverse<Cursor<'_, T>> {
        Reverse::new(self.cursor_front())
    }

    /// Editing cursor on the first element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, A> {
        let first = self.first();
        CursorMut::new(self, first, 0)
    }

    /// Editing cursor on the ghost.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, A> {
        let (end, len) = (self.sentinel, self.len);
        CursorMut::new(self, end, len)
    }

    /// Editing cursor on position `index`; `len()` addresses the ghost.
    pub fn cursor_at_mut(&mut self, index: usize) -> Result<CursorMut<'_, T, A>, ListError> {
        self.check_position(index)?;
        let link = self.node_at(index);
        Ok(CursorMut::new(self, link, index))
    }

    /// Exchanges contents and allocators with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    pub(crate) fn first(&self) -> NonNull<Links> {
        // SAFETY: the sentinel lives as long as the list.
        unsafe { node::next(self.sentinel) }
    }

    pub(crate) fn last(&self) -> NonNull<Links> {
        // SAFETY: the sentinel lives as long as the list.
        unsafe { node::prev(self.sentinel) }
    }

    /// Link at position `index` (`index <= len`), walking from the nearer end.
    pub(crate) fn node_at(&self, index: usize) -> NonNull<Links> {
        debug_assert!(index <= self.len);

        // SAFETY: at most `len` steps around a ring of `len + 1` links.
        unsafe {
            if index <= self.len / 2 {
                node::advance(self.first(), index)
            } else {
                node::retreat(self.sentinel, self.len - index)
            }
        }
    }

    pub(crate) fn check_position(&self, at: usize) -> Result<(), ListError> {
        if at > self.len {
            return Err(ListError::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        Ok(())
    }

    pub(crate) fn check_element(&self, at: usize) -> Result<(), ListError> {
        if at >= self.len {
            return Err(ListError::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Length after adding `extra` elements, checked against `max_size()`.
    pub(crate) fn required(&self, extra: usize) -> Result<usize, ListError> {
        let max = self.max_size();
        match self.len.checked_add(extra) {
            Some(required) if required <= max => Ok(required),
            Some(required) => Err(ListError::Length { requested: required, max }),
            None => Err(ListError::Length {
                requested: usize::MAX,
                max,
            }),
        }
    }

    pub(crate) fn check_allocator(&self, other: &Self) -> Result<(), ListError> {
        if self.alloc != other.alloc {
            log::debug!("List: refusing to move nodes between unequal allocators");
            return Err(ListError::AllocatorMismatch);
        }
        Ok(())
    }

    /// Allocates a detached node and builds its payload with `f`.
    ///
    /// A panic in `f` releases the node storage.
    pub(crate) fn create_node<F>(&self, f: F) -> Result<NonNull<Links>, ListError>
    where
        F: FnOnce() -> T,
    {
        let ptr = self.node_alloc.allocate(1).map_err(|err| {
            log::debug!("List: node allocation failed: {err}");
            ListError::from(err)
        })?;

        let guard = NodeStorage {
            alloc: &self.node_alloc,
            ptr,
        };
        // SAFETY: `ptr` is a fresh uninitialized node slot.
        unsafe { guard.alloc.construct_with(ptr, || Node::new(f())) };
        core::mem::forget(guard);

        Ok(ptr.cast())
    }

    /// Unlinks the node at `link`, releases its storage and returns the payload.
    ///
    /// # Safety
    ///
    /// `link` must be a node of this list.
    pub(crate) unsafe fn take_node(&mut self, link: NonNull<Links>) -> T {
        unsafe {
            node::unlink_nodes(link, link);
            self.len -= 1;

            let value = node::read_value::<T>(link);
            self.node_alloc.deallocate(link.cast::<Node<T>>().as_ptr(), 1);
            value
        }
    }

    /// Links every node of `staged` in front of `pos`, leaving it empty.
    pub(crate) fn adopt_before(&mut self, pos: NonNull<Links>, staged: &mut Self) {
        if staged.is_empty() {
            return;
        }

        // SAFETY: `staged` is a distinct list with an equal allocator.
        unsafe { node::transfer(pos, staged.first(), staged.sentinel) };
        self.len += staged.len;
        staged.len = 0;
    }

    /// Empty list sharing this list's allocator, used to stage nodes.
    pub(crate) fn staging(&self) -> Self {
        Self::new_in(self.alloc.clone())
    }
}

/// Releases a node slot whose payload was never constructed.
struct NodeStorage<'a, N, B: Allocator<N>> {
    alloc: &'a B,
    ptr: NonNull<N>,
}

impl<N, B: Allocator<N>> Drop for NodeStorage<'_, N, B> {
    fn drop(&mut self) {
        // SAFETY: the slot came from `allocate(1)` and holds no value.
        unsafe { self.alloc.deallocate(self.ptr.as_ptr(), 1) };
    }
}

impl<T, A: Allocator<T>> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: no node references the sentinel any more.
        unsafe { node::free_sentinel(self.sentinel) };
    }
}
