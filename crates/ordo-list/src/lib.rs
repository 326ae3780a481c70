// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator-aware circular doubly linked list.
//!
//! [`List<T, A>`] allocates one node per element from
//! `A::Rebind<Node<T>>` and closes the chain with a payload-free sentinel:
//!
//! ```text
//!   ┌─► [sentinel] ⇄ [e0] ⇄ [e1] ⇄ [e2] ─┐
//!   └────────────────────────────────────┘
//! ```
//!
//! # Core Guarantees
//!
//! - **Ring invariant**: walking `next` from the sentinel visits exactly
//!   `len()` nodes before returning to it, and `prev` mirrors `next`.
//! - **Splice is relinking**: [`List::splice`] and friends move nodes
//!   between lists without touching payloads. Both lengths are adjusted and
//!   moving nodes between unequal allocators is refused.
//! - **Strong guarantee for bulk inserts**: new nodes are staged in a
//!   detached chain and linked in only once all of them exist.
//! - **Stable sort and merge**: [`List::sort_by`] and [`List::merge_by`]
//!   keep equal elements in their original order and never move a payload.
//!
//! Positions are indices in `0..=len()`, where `len()` denotes the ghost
//! position past the last element. [`CursorMut`] edits around a position
//! without walking from either end.
//!
//! # Example
//!
//! ```rust
//! use ordo_list::{List, ListError};
//!
//! fn example() -> Result<(), ListError> {
//!     let mut a = List::from_slice(&[1, 3, 5])?;
//!     let mut b = List::from_slice(&[2, 4, 6])?;
//!
//!     a.merge(&mut b)?;
//!     assert_eq!(a, [1, 2, 3, 4, 5, 6]);
//!     assert!(b.is_empty());
//!
//!     a.reverse();
//!     assert_eq!(a.front(), Some(&6));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod algorithms;
mod assign;
mod cursor;
mod erase;
mod error;
mod insert;
mod iter;
mod list;
mod macros;
mod node;
mod splice;
mod traits;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorMut};
pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::List;
