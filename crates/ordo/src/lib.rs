// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Allocator-aware containers with explicit failure semantics.</em></p>
//!
//! ---
//!
//! Ordo provides two sequence containers parameterized by an allocator
//! capability:
//!
//! - [`Vector`]: contiguous growable array with amortized O(1) append.
//! - [`List`]: circular doubly linked list with O(1) splice and a stable,
//!   relink-only merge sort.
//!
//! Both report allocation failure, length overflow and bad positions as
//! `Result` errors, and both stay valid when element construction panics.
//!
//! # Features
//!
//! - **Pluggable allocation**: any [`Allocator`](alloc::Allocator); the list
//!   rebinds it to allocate its nodes.
//! - **Strong guarantee where it matters**: reallocation and bulk list
//!   inserts leave the container untouched when a constructor panics.
//! - **Cursors**: bidirectional and random-access cursors with a
//!   [`Reverse`](iter::Reverse) adapter, wrapping through a ghost position.
//! - **`no_std`**: only `alloc` is required.
//!
//! # Quick Start
//!
//! ```rust
//! use ordo::{List, Vector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut v = Vector::from_slice(&[1, 2, 3])?;
//!     v.reserve(100)?;
//!     v.insert_n(1, 2, &9)?;
//!     assert_eq!(v, [1, 9, 9, 2, 3]);
//!     assert_eq!(v.capacity(), 100);
//!
//!     let mut list = List::new();
//!     for x in [5, 3, 4, 1] {
//!         list.push_back(x)?;
//!     }
//!     list.sort();
//!     assert_eq!(list, [1, 3, 4, 5]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Test utilities
//!
//! The `test-utils` feature exposes `ProbeAllocator`, an allocator that
//! counts blocks and injects failures, through [`alloc`].

#![cfg_attr(not(test), no_std)]

pub use ordo_alloc as alloc;
pub use ordo_iter as iter;
pub use ordo_list as list;
pub use ordo_vector as vector;

pub use ordo_alloc::{AllocError, Allocator, DefaultAllocator};
pub use ordo_list::{List, ListError};
pub use ordo_vector::{Vector, VectorError};
