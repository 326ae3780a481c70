// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::cursor::{Cursor, RandomAccessCursor};

/// Reverse adapter over a cursor.
///
/// The adapter points one element *before* its base: `current()` is
/// `base.peek_prev()`. Wrapping the end cursor therefore starts at the last
/// element, and the reverse ghost is reached when the base sits on the first
/// element.
///
/// ```text
///   base:      [0]   [1]   [2]   (end)
///   reverse:  (end)  [2]'  [1]'  [0]'     (' = element yielded)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverse<C> {
    base: C,
}

impl<C: Cursor> Reverse<C> {
    /// Wraps `base`.
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the wrapped cursor.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the adapter.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Cursor + Clone> Cursor for Reverse<C> {
    type Item = C::Item;

    fn current(&self) -> Option<C::Item> {
        self.base.peek_prev()
    }

    fn peek_next(&self) -> Option<C::Item> {
        let mut ahead = self.base.clone();
        ahead.move_prev();
        ahead.peek_prev()
    }

    fn peek_prev(&self) -> Option<C::Item> {
        self.base.current()
    }

    fn move_next(&mut self) {
        self.base.move_prev();
    }

    fn move_prev(&mut self) {
        self.base.move_next();
    }

    fn index(&self) -> Option<usize> {
        let len = self.base.len();
        match self.base.index() {
            Some(0) => None,
            Some(pos) => Some(len - pos),
            None if len == 0 => None,
            None => Some(0),
        }
    }

    fn len(&self) -> usize {
        self.base.len()
    }
}

impl<C: RandomAccessCursor + Clone> RandomAccessCursor for Reverse<C> {
    fn seek(&mut self, index: usize) {
        let len = self.base.len();
        self.base.seek(len - index.min(len));
    }
}
