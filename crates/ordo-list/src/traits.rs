// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use ordo_alloc::Allocator;

use crate::iter::{IntoIter, Iter, IterMut};
use crate::list::List;

impl<T: Clone, A: Allocator<T>> Clone for List<T, A> {
    /// # Panics
    ///
    /// When a node cannot be allocated. Use [`List::try_clone`] to handle
    /// that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("List::clone: {err}"),
        }
    }

    /// Reuses this list's nodes for the leading elements.
    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_iter(source.iter().cloned()) {
            panic!("List::clone_from: {err}");
        }
    }
}

impl<T, A: Allocator<T> + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: core::fmt::Debug, A: Allocator<T>> core::fmt::Debug for List<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Relational operators
// =============================================================================

impl<T, U, A, B> PartialEq<List<U, B>> for List<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
    B: Allocator<U>,
{
    fn eq(&self, other: &List<U, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, U, A, const N: usize> PartialEq<[U; N]> for List<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T, U, A> PartialEq<[U]> for List<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Eq, A: Allocator<T>> Eq for List<T, A> {}

impl<T, A, B> PartialOrd<List<T, B>> for List<T, A>
where
    T: PartialOrd,
    A: Allocator<T>,
    B: Allocator<T>,
{
    fn partial_cmp(&self, other: &List<T, B>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, A: Allocator<T>> Ord for List<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, A: Allocator<T>> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T, A: Allocator<T>> IntoIterator for List<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a List<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, A: Allocator<T>> Extend<T> for List<T, A> {
    /// Appends every item; either all of them are linked in or none.
    ///
    /// # Panics
    ///
    /// When a node cannot be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let at = self.len();
        if let Err(err) = self.insert_iter(at, iter) {
            panic!("List::extend: {err}");
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator<T>> Extend<&'a T> for List<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for List<T> {
    /// # Panics
    ///
    /// When a node cannot be allocated.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(list) => list,
            Err(err) => panic!("List::from_iter: {err}"),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
