// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_iter::RandomAccessCursor;

/// Random-access cursor over the live elements of a `Vector`.
///
/// Positions are `0..=len`; `len` is the ghost past the last element. The
/// cursor borrows the vector, so any reallocation is ruled out while it lives.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        Self { slice, pos }
    }

    /// Elements from the cursor to the end.
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
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
        core::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> core::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> ordo_iter::Cursor for Cursor<'a, T> {
    type Item = &'a T;

    fn current(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    fn peek_next(&self) -> Option<&'a T> {
        if self.pos == self.slice.len() {
            self.slice.first()
        } else {
            self.slice.get(self.pos + 1)
        }
    }

    fn peek_prev(&self) -> Option<&'a T> {
        match self.pos {
            0 => None,
            pos => self.slice.get(pos - 1),
        }
    }

    fn move_next(&mut self) {
        self.pos = if self.pos == self.slice.len() { 0 } else { self.pos + 1 };
    }

    fn move_prev(&mut self) {
        self.pos = if self.pos == 0 { self.slice.len() } else { self.pos - 1 };
    }

    fn index(&self) -> Option<usize> {
        (self.pos < self.slice.len()).then_some(self.pos)
    }

    fn len(&self) -> usize {
        self.slice.len()
    }
}

impl<T> RandomAccessCursor for Cursor<'_, T> {
    fn seek(&mut self, index: usize) {
        self.pos = index.min(self.slice.len());
    }

    fn position(&self) -> usize {
        self.pos
    }
}
