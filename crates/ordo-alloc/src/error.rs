// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ordo-alloc.

use thiserror::Error;

/// Failures reported by [`Allocator::allocate`](crate::Allocator::allocate).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested element count exceeds [`max_size`](crate::Allocator::max_size).
    ///
    /// Raised before the raw memory request is issued.
    #[error("allocate({requested}) exceeds maximum supported size {max}")]
    ExceedsMaxSize {
        /// Requested element count.
        requested: usize,
        /// Largest element count the allocator accepts.
        max: usize,
    },

    /// The underlying heap refused the request.
    #[error("allocator could not provide {bytes} bytes")]
    Exhausted {
        /// Size of the refused request in bytes.
        bytes: usize,
    },
}
