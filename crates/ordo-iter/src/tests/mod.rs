// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod range;

use crate::{Cursor, RandomAccessCursor};

/// Minimal slice cursor used to exercise the traits.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slots<'a> {
    data: &'a [i32],
    pos: usize,
}

impl<'a> Slots<'a> {
    pub(crate) fn front(data: &'a [i32]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn end(data: &'a [i32]) -> Self {
        Self {
            data,
            pos: data.len(),
        }
    }
}

impl<'a> Cursor for Slots<'a> {
    type Item = &'a i32;

    fn current(&self) -> Option<&'a i32> {
        self.data.get(self.pos)
    }

    fn peek_next(&self) -> Option<&'a i32> {
        if self.pos >= self.data.len() {
            self.data.first()
        } else {
            self.data.get(self.pos + 1)
        }
    }

    fn peek_prev(&self) -> Option<&'a i32> {
        match self.pos {
            0 => None,
            pos => self.data.get(pos - 1),
        }
    }

    fn move_next(&mut self) {
        self.pos = (self.pos + 1) % (self.data.len() + 1);
    }

    fn move_prev(&mut self) {
        self.pos = (self.pos + self.data.len()) % (self.data.len() + 1);
    }

    fn index(&self) -> Option<usize> {
        (self.pos < self.data.len()).then_some(self.pos)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl RandomAccessCursor for Slots<'_> {
    fn seek(&mut self, index: usize) {
        self.pos = index.min(self.data.len());
    }
}
