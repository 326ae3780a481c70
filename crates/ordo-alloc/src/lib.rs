// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed allocator capability consumed by the ordo containers.
//!
//! Containers never talk to the heap directly. They hold an [`Allocator<T>`]
//! value and ask it for raw blocks sized in elements, then construct and
//! destroy elements in place through the same value.
//!
//! ```text
//!   Allocator<T>
//!       │
//!       ├── allocate(n)        -> raw block for n elements (or AllocError)
//!       ├── deallocate(p, n)   -> release a block (no-op on null)
//!       ├── construct(p, v)    -> write one element in place
//!       ├── destroy(p)         -> drop one element in place
//!       ├── max_size()         -> largest n accepted by allocate
//!       └── rebind::<U>()      -> equivalent allocator for another type
//! ```
//!
//! # Core Guarantees
//!
//! - **Checked sizes**: `allocate(n)` rejects `n > max_size()` with
//!   [`AllocError::ExceedsMaxSize`] before any raw request is issued.
//! - **Zero-sized requests**: `n == 0` and zero-sized `T` yield a dangling,
//!   well-aligned pointer and never touch the heap.
//! - **Substitutability**: equal allocators can free each other's blocks.
//!   All [`DefaultAllocator`] values are equal.
//!
//! # Example
//!
//! ```rust
//! use ordo_alloc::{AllocError, Allocator, DefaultAllocator};
//!
//! fn example() -> Result<(), AllocError> {
//!     let alloc = DefaultAllocator::<u32>::new();
//!     let block = alloc.allocate(2)?;
//!
//!     unsafe {
//!         alloc.construct(block, 7);
//!         alloc.construct(block.add(1), 8);
//!         assert_eq!(*block.as_ptr().add(1), 8);
//!
//!         alloc.destroy(block);
//!         alloc.destroy(block.add(1));
//!         alloc.deallocate(block.as_ptr(), 2);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get [`ProbeAllocator`], an allocator
//! that counts live blocks and can be told to fail:
//!
//! ```toml
//! [dev-dependencies]
//! ordo-alloc = { version = "*", features = ["test-utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod allocator;
mod default;
mod error;

#[cfg(any(test, feature = "test-utils"))]
mod probe;

#[cfg(test)]
mod tests;

pub use allocator::{Allocator, max_size_of};
pub use default::DefaultAllocator;
pub use error::AllocError;

#[cfg(any(test, feature = "test-utils"))]
pub use probe::{ProbeAllocator, ProbeBehaviour, ProbeStats};
