// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use ordo_alloc::Allocator;

use crate::into_iter::IntoIter;
use crate::vector::Vector;

impl<T: Clone, A: Allocator<T>> Clone for Vector<T, A> {
    /// # Panics
    ///
    /// When the copy cannot be allocated. Use [`Vector::try_clone`] to
    /// handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("Vector::clone: {err}"),
        }
    }

    /// Reuses this vector's storage when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_slice(source.as_slice()) {
            panic!("Vector::clone_from: {err}");
        }
    }
}

impl<T, A: Allocator<T> + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: core::fmt::Debug, A: Allocator<T>> core::fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, A: Allocator<T>> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<T>> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator<T>> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<T>> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// =============================================================================
// Relational operators
// =============================================================================

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
    B: Allocator<U>,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A, const N: usize> PartialEq<[U; N]> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A> PartialEq<[U]> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, A: Allocator<T>> Eq for Vector<T, A> {}

impl<T, A, B> PartialOrd<Vector<T, B>> for Vector<T, A>
where
    T: PartialOrd,
    A: Allocator<T>,
    B: Allocator<T>,
{
    fn partial_cmp(&self, other: &Vector<T, B>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator<T>> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, A: Allocator<T>> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T, A: Allocator<T>> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, A: Allocator<T>> Extend<T> for Vector<T, A> {
    /// # Panics
    ///
    /// When the vector cannot grow.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let at = self.len();
        if let Err(err) = self.insert_iter(at, iter) {
            panic!("Vector::extend: {err}");
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator<T>> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    /// # Panics
    ///
    /// When the storage cannot be allocated.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(v) => v,
            Err(err) => panic!("Vector::from_iter: {err}"),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
