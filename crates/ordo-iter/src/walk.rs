// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::cursor::Cursor;

/// [`Iterator`] over a cursor, from its position up to the ghost.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    cursor: C,
}

impl<C: Cursor> Walk<C> {
    /// Wraps `cursor`.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the underlying cursor at its current position.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let item = self.cursor.current()?;
        self.cursor.move_next();
        Some(item)
    }
}
