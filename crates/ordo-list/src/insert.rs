// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::error::ListError;
use crate::list::List;
use crate::node::{self, Links};

impl<T, A: Allocator<T>> List<T, A> {
    /// Builds a node with `f` and links it in front of `pos`.
    pub(crate) fn link_new<F>(
        &mut self,
        pos: NonNull<Links>,
        f: F,
    ) -> Result<NonNull<Links>, ListError>
    where
        F: FnOnce() -> T,
    {
        self.required(1)?;
        let link = self.create_node(f)?;

        // SAFETY: `link` is detached and `pos` belongs to this list.
        unsafe { node::link_nodes(pos, link, link) };
        self.len += 1;
        Ok(link)
    }

    /// Stages every value of `iter` in a detached list, then links the whole
    /// chain in front of `pos`. Returns the number of values inserted.
    pub(crate) fn insert_staged<I>(
        &mut self,
        pos: NonNull<Links>,
        iter: I,
    ) -> Result<usize, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.required(iter.size_hint().0)?;

        let mut staged = self.staging();
        for value in iter {
            staged.push_back(value)?;
        }
        self.required(staged.len)?;

        let n = staged.len;
        self.adopt_before(pos, &mut staged);
        Ok(n)
    }

    /// Prepends `value`.
    ///
    /// # Errors
    ///
    /// [`ListError::Length`] or [`ListError::Exhausted`] when no node can be
    /// allocated. The list is unchanged and `value` is dropped.
    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        let first = self.first();
        self.link_new(first, || value)?;
        Ok(())
    }

    /// Appends `value`.
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        let end = self.sentinel;
        self.link_new(end, || value)?;
        Ok(())
    }

    /// Prepends the value built by `f` and returns a reference to it.
    pub fn emplace_front<F>(&mut self, f: F) -> Result<&mut T, ListError>
    where
        F: FnOnce() -> T,
    {
        let first = self.first();
        let link = self.link_new(first, f)?;
        // SAFETY: `link` is a node of this list, borrowed through `&mut self`.
        Ok(unsafe { node::value_mut(link) })
    }

    /// Appends the value built by `f` and returns a reference to it.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, ListError>
    where
        F: FnOnce() -> T,
    {
        let end = self.sentinel;
        let link = self.link_new(end, f)?;
        // SAFETY: as in `emplace_front`.
        Ok(unsafe { node::value_mut(link) })
    }

    /// Inserts the value built by `f` before position `at`.
    ///
    /// If `f` panics the list is unchanged and no node is leaked.
    pub fn emplace<F>(&mut self, at: usize, f: F) -> Result<&mut T, ListError>
    where
        F: FnOnce() -> T,
    {
        self.check_position(at)?;
        let pos = self.node_at(at);
        let link = self.link_new(pos, f)?;
        // SAFETY: as in `emplace_front`.
        Ok(unsafe { node::value_mut(link) })
    }

    /// Inserts `value` before position `at` and returns `at`.
    ///
    /// # Errors
    ///
    /// - [`ListError::OutOfRange`] when `at > len()`.
    /// - [`ListError::Length`] / [`ListError::Exhausted`] when no node can
    ///   be allocated.
    pub fn insert(&mut self, at: usize, value: T) -> Result<usize, ListError> {
        self.emplace(at, || value)?;
        Ok(at)
    }

    /// Inserts `n` clones of `value` before position `at` and returns `at`.
    ///
    /// Either all `n` clones are linked in or none are.
    pub fn insert_n(&mut self, at: usize, n: usize, value: &T) -> Result<usize, ListError>
    where
        T: Clone,
    {
        self.check_position(at)?;
        self.required(n)?;

        let pos = self.node_at(at);
        self.insert_staged(pos, core::iter::repeat_with(|| value.clone()).take(n))?;
        Ok(at)
    }

    /// Inserts clones of `items` before position `at` and returns `at`.
    pub fn insert_slice(&mut self, at: usize, items: &[T]) -> Result<usize, ListError>
    where
        T: Clone,
    {
        self.insert_iter(at, items.iter().cloned())
    }

    /// Inserts every item of `iter` before position `at` and returns `at`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::{List, ListError};
    ///
    /// fn example() -> Result<(), ListError> {
    ///     let mut list = List::from_slice(&[1, 5])?;
    ///     list.insert_iter(1, 2..5)?;
    ///     assert_eq!(list, [1, 2, 3, 4, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_iter<I>(&mut self, at: usize, iter: I) -> Result<usize, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(at)?;
        let pos = self.node_at(at);
        self.insert_staged(pos, iter)?;
        Ok(at)
    }
}
