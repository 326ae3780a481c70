// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator-aware dynamic array.
//!
//! [`Vector<T, A>`] owns one contiguous block obtained from an
//! [`Allocator<T>`](ordo_alloc::Allocator):
//!
//! ```text
//!   ptr ─► ┌────┬────┬────┬─────────┬─────────┐
//!          │ e0 │ e1 │ e2 │   raw   │   raw   │
//!          └────┴────┴────┴─────────┴─────────┘
//!           ◄──── len ───►
//!           ◄───────────── capacity ─────────►
//! ```
//!
//! # Core Guarantees
//!
//! - **Size invariant**: `len() <= capacity()` at every observable point.
//! - **Amortized growth**: a full vector grows to
//!   `max(2 * capacity, len + extra)`, clamped to `max_size()`.
//! - **Strong guarantee when reallocating**: the new block is fully
//!   populated before the old one is touched. A panic or allocation failure
//!   leaves contents and capacity exactly as before.
//! - **Basic guarantee in place**: a panic while filling a hole keeps every
//!   element that was already constructed and closes the hole.
//! - **Self-aliasing**: [`Vector::insert_from_within`],
//!   [`Vector::extend_from_within`] and [`Vector::assign_from_within`]
//!   snapshot the source range before mutating.
//!
//! Positions are indices. Mutators that take a position return the index of
//! the first inserted element, or of the element that followed an erased
//! range.
//!
//! # Example
//!
//! ```rust
//! use ordo_vector::{Vector, VectorError};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut v: Vector<i32> = Vector::new();
//!     for i in 0..5 {
//!         v.push_back(i)?;
//!     }
//!
//!     v.erase_range(1..3)?;
//!     assert_eq!(v, [0, 3, 4]);
//!     assert!(matches!(v.at(7), Err(VectorError::OutOfRange { index: 7, len: 3 })));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod assign;
mod cursor;
mod erase;
mod error;
mod insert;
mod into_iter;
mod macros;
mod raw;
mod traits;
mod vector;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::VectorError;
pub use into_iter::IntoIter;
pub use vector::Vector;
