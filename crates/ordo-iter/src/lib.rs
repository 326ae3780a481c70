// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cursor traits shared by the ordo containers.
//!
//! A cursor is a non-owning position inside a sequence of `len` elements.
//! Besides the element positions `0..len` every cursor has one extra *ghost*
//! position past the last element, the equivalent of `end()`. The positions
//! form a ring:
//!
//! ```text
//!        move_next            move_next            move_next
//!   [0] ─────────► [1] ─────► ... ─────► [len-1] ─────────► (ghost)
//!    ▲                                                         │
//!    └─────────────────────────── move_next ───────────────────┘
//! ```
//!
//! - [`Cursor`]: bidirectional traversal (list nodes, vector slots).
//! - [`RandomAccessCursor`]: O(1) seek, offset and distance (vector slots).
//! - [`Reverse`]: walks any cursor backwards; `current()` is the base's
//!   `peek_prev()`, so `Reverse::new(end)` starts at the last element.
//! - [`Walk`]: adapts a cursor into an [`Iterator`] running to the ghost.
//! - [`distance`]: step count between two bidirectional cursors.
//! - [`resolve_range`]: bounds-checks a `RangeBounds<usize>` against a length.
//!
//! # Example
//!
//! ```rust
//! use ordo_iter::{Cursor, RandomAccessCursor, Reverse};
//!
//! # #[derive(Clone, PartialEq)]
//! # struct Slots<'a> { data: &'a [i32], pos: usize }
//! # impl<'a> Cursor for Slots<'a> {
//! #     type Item = &'a i32;
//! #     fn current(&self) -> Option<&'a i32> { self.data.get(self.pos) }
//! #     fn peek_next(&self) -> Option<&'a i32> {
//! #         if self.pos >= self.data.len() { self.data.first() } else { self.data.get(self.pos + 1) }
//! #     }
//! #     fn peek_prev(&self) -> Option<&'a i32> {
//! #         if self.pos == 0 { None } else { self.data.get(self.pos - 1) }
//! #     }
//! #     fn move_next(&mut self) { self.pos = (self.pos + 1) % (self.data.len() + 1); }
//! #     fn move_prev(&mut self) { self.pos = (self.pos + self.data.len()) % (self.data.len() + 1); }
//! #     fn index(&self) -> Option<usize> { (self.pos < self.data.len()).then_some(self.pos) }
//! #     fn len(&self) -> usize { self.data.len() }
//! # }
//! # impl<'a> RandomAccessCursor for Slots<'a> {
//! #     fn seek(&mut self, index: usize) { self.pos = index.min(self.data.len()); }
//! # }
//! let data = [1, 2, 3];
//! let end = Slots { data: &data, pos: 3 };
//!
//! let backwards: Vec<i32> = Reverse::new(end).walk().copied().collect();
//! assert_eq!(backwards, [3, 2, 1]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod cursor;
mod range;
mod reverse;
mod walk;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, RandomAccessCursor, distance};
pub use range::resolve_range;
pub use reverse::Reverse;
pub use walk::Walk;
