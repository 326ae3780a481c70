// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ordo-vector.

use core::ops::{Range, RangeBounds};

use ordo_alloc::AllocError;
use thiserror::Error;

/// Error type for `Vector` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
    /// The resulting length or capacity would exceed `max_size()`.
    #[error("vector length {requested} exceeds max_size {max}")]
    Length {
        /// Requested element count (saturated on overflow).
        requested: usize,
        /// Largest supported element count.
        max: usize,
    },

    /// An index or range bound lies outside the live elements.
    #[error("index {index} out of range for vector of length {len}")]
    OutOfRange {
        /// Offending index or bound.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// The allocator could not provide a new block.
    #[error("allocator could not provide {bytes} bytes")]
    Exhausted {
        /// Size of the refused request in bytes.
        bytes: usize,
    },
}

impl From<AllocError> for VectorError {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::ExceedsMaxSize { requested, max } => Self::Length { requested, max },
            AllocError::Exhausted { bytes } => Self::Exhausted { bytes },
        }
    }
}

pub(crate) fn resolve_range<R>(range: R, len: usize) -> Result<Range<usize>, VectorError>
where
    R: RangeBounds<usize>,
{
    ordo_iter::resolve_range(range, len)
        .map_err(|(index, len)| VectorError::OutOfRange { index, len })
}
