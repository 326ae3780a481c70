// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::list::List;
use crate::node::{self, Links};

/// Borrowing iterator over a `List`, created by [`List::iter`].
pub struct Iter<'a, T> {
    head: NonNull<Links>,
    tail: NonNull<Links>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> Iter<'_, T> {
    pub(crate) fn new(head: NonNull<Links>, tail: NonNull<Links>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.head, self.tail, self.len)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let link = self.head;
        // SAFETY: `len` counts the nodes left in [head, tail].
        unsafe {
            self.head = node::next(link);
            Some(node::value(link))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let link = self.tail;
        // SAFETY: as in `next`.
        unsafe {
            self.tail = node::prev(link);
            Some(node::value(link))
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a `List`, created by [`List::iter_mut`].
pub struct IterMut<'a, T> {
    head: NonNull<Links>,
    tail: NonNull<Links>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(head: NonNull<Links>, tail: NonNull<Links>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let link = self.head;
        // SAFETY: each node is yielded at most once from either end.
        unsafe {
            self.head = node::next(link);
            Some(node::value_mut(link))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let link = self.tail;
        // SAFETY: as in `next`.
        unsafe {
            self.tail = node::prev(link);
            Some(node::value_mut(link))
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a `List`.
///
/// Each node is released as soon as its element is yielded.
pub struct IntoIter<T, A: Allocator<T>> {
    list: List<T, A>,
}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    pub(crate) fn new(list: List<T, A>) -> Self {
        Self { list }
    }
}

impl<T: core::fmt::Debug, A: Allocator<T>> core::fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, A: Allocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, A: Allocator<T>> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}
