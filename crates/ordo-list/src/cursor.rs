// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;
use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::error::ListError;
use crate::list::List;
use crate::node::{self, Links};

/// Bidirectional cursor over a `List`.
///
/// The cursor rests on an element or on the ghost (the sentinel) between
/// the last and the first element. Moving past either end wraps through
/// the ghost.
pub struct Cursor<'a, T> {
    current: NonNull<Links>,
    index: usize,
    sentinel: NonNull<Links>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> Cursor<'_, T> {
    pub(crate) fn new(
        current: NonNull<Links>,
        index: usize,
        sentinel: NonNull<Links>,
        len: usize,
    ) -> Self {
        Self {
            current,
            index,
            sentinel,
            len,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> core::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> Cursor<'a, T> {
    fn payload(&self, link: NonNull<Links>) -> Option<&'a T> {
        // SAFETY: every link but the sentinel is a node borrowed for 'a.
        (link != self.sentinel).then(|| unsafe { node::value(link) })
    }
}

impl<'a, T> ordo_iter::Cursor for Cursor<'a, T> {
    type Item = &'a T;

    fn current(&self) -> Option<&'a T> {
        self.payload(self.current)
    }

    fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: the ring stays intact while the list is borrowed.
        self.payload(unsafe { node::next(self.current) })
    }

    fn peek_prev(&self) -> Option<&'a T> {
        // SAFETY: as in `peek_next`.
        self.payload(unsafe { node::prev(self.current) })
    }

    fn move_next(&mut self) {
        // SAFETY: as in `peek_next`.
        self.current = unsafe { node::next(self.current) };
        self.index = if self.index == self.len { 0 } else { self.index + 1 };
    }

    fn move_prev(&mut self) {
        // SAFETY: as in `peek_next`.
        self.current = unsafe { node::prev(self.current) };
        self.index = if self.index == 0 { self.len } else { self.index - 1 };
    }

    fn index(&self) -> Option<usize> {
        (self.current != self.sentinel).then_some(self.index)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Editing cursor over a `List`.
///
/// Besides moving like [`Cursor`], it inserts, removes and splices around
/// its position in O(1) without walking from either end.
///
/// # Example
///
/// ```rust
/// use ordo_list::{List, ListError};
///
/// fn example() -> Result<(), ListError> {
///     let mut list = List::from_slice(&[1, 2, 4])?;
///
///     let mut cursor = list.cursor_at_mut(2)?;
///     cursor.insert_before(3)?;
///     cursor.move_next();
///     assert_eq!(cursor.remove_current(), None);
///
///     assert_eq!(list, [1, 2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct CursorMut<'a, T, A: Allocator<T>> {
    list: &'a mut List<T, A>,
    current: NonNull<Links>,
    index: usize,
}

impl<'a, T, A: Allocator<T>> CursorMut<'a, T, A> {
    pub(crate) fn new(list: &'a mut List<T, A>, current: NonNull<Links>, index: usize) -> Self {
        Self {
            list,
            current,
            index,
        }
    }

    fn on_ghost(&self) -> bool {
        self.current == self.list.sentinel
    }

    /// Element under the cursor, `None` on the ghost.
    pub fn current(&mut self) -> Option<&mut T> {
        let current = self.current;
        // SAFETY: non-sentinel links are nodes, borrowed through `&mut self`.
        (!self.on_ghost()).then(|| unsafe { node::value_mut(current) })
    }

    /// Element after the cursor, `None` at the last element.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        // SAFETY: the ring is intact while the cursor holds the list.
        let next = unsafe { node::next(self.current) };
        // SAFETY: as in `current`.
        (next != self.list.sentinel).then(|| unsafe { node::value_mut(next) })
    }

    /// Element before the cursor, `None` at the first element.
    pub fn peek_prev(&mut self) -> Option<&mut T> {
        // SAFETY: as in `peek_next`.
        let prev = unsafe { node::prev(self.current) };
        // SAFETY: as in `current`.
        (prev != self.list.sentinel).then(|| unsafe { node::value_mut(prev) })
    }

    /// Position of the cursor, `None` on the ghost.
    pub fn index(&self) -> Option<usize> {
        (!self.on_ghost()).then_some(self.index)
    }

    /// Steps forward, wrapping from the ghost to the first element.
    pub fn move_next(&mut self) {
        // SAFETY: as in `peek_next`.
        self.current = unsafe { node::next(self.current) };
        self.index = if self.index == self.list.len { 0 } else { self.index + 1 };
    }

    /// Steps backward, wrapping from the first element to the ghost.
    pub fn move_prev(&mut self) {
        // SAFETY: as in `peek_next`.
        self.current = unsafe { node::prev(self.current) };
        self.index = if self.index == 0 { self.list.len } else { self.index - 1 };
    }

    /// Read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.current, self.index, self.list.sentinel, self.list.len)
    }

    /// Inserts `value` before the cursor. The cursor keeps its element.
    pub fn insert_before(&mut self, value: T) -> Result<(), ListError> {
        self.list.link_new(self.current, || value)?;
        self.index += 1;
        Ok(())
    }

    /// Inserts `value` after the cursor; on the ghost this prepends.
    pub fn insert_after(&mut self, value: T) -> Result<(), ListError> {
        // SAFETY: as in `peek_next`.
        let next = unsafe { node::next(self.current) };
        self.list.link_new(next, || value)?;
        if self.on_ghost() {
            self.index = self.list.len;
        }
        Ok(())
    }

    /// Unlinks the element under the cursor and returns it. The cursor moves
    /// to the following element (or the ghost). `None` on the ghost.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.on_ghost() {
            return None;
        }

        let link = self.current;
        // SAFETY: `link` is a node of the list.
        unsafe {
            self.current = node::next(link);
            Some(self.list.take_node(link))
        }
    }

    /// Moves every element of `other` before the cursor.
    pub fn splice_before(&mut self, other: &mut List<T, A>) -> Result<(), ListError> {
        self.list.check_allocator(other)?;
        self.list.required(other.len)?;

        let moved = other.len;
        self.list.adopt_before(self.current, other);
        self.index += moved;
        Ok(())
    }

    /// Moves every element of `other` after the cursor; on the ghost this
    /// prepends.
    pub fn splice_after(&mut self, other: &mut List<T, A>) -> Result<(), ListError> {
        self.list.check_allocator(other)?;
        self.list.required(other.len)?;

        // SAFETY: as in `peek_next`.
        let next = unsafe { node::next(self.current) };
        self.list.adopt_before(next, other);
        if self.on_ghost() {
            self.index = self.list.len;
        }
        Ok(())
    }
}

impl<T, A: Allocator<T>> core::fmt::Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.list.len)
            .finish()
    }
}
