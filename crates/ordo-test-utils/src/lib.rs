// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for ordo crates.
//!
//! - [`Tracked`]: element type that reports every construction and drop to a
//!   thread-local [`Ledger`], which can also arm a fuse that makes the Nth
//!   clone or default construction panic.
//! - [`index_permutations`] / [`permuted`]: exhaustive ordering helpers.
//! - [`panics`]: runs a closure under `catch_unwind`.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod tracked;

pub use permutations::{index_permutations, permuted};
pub use tracked::{Ledger, Tracked, panics};
