// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ordo-list.

use core::ops::{Range, RangeBounds};

use ordo_alloc::AllocError;
use thiserror::Error;

/// Error type for `List` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ListError {
    /// The resulting length would exceed `max_size()`.
    #[error("list length {requested} exceeds max_size {max}")]
    Length {
        /// Requested element count (saturated on overflow).
        requested: usize,
        /// Largest supported element count.
        max: usize,
    },

    /// A position or range bound lies outside the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// Offending position or bound.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// The node allocator could not provide a node.
    #[error("allocator could not provide {bytes} bytes")]
    Exhausted {
        /// Size of the refused request in bytes.
        bytes: usize,
    },

    /// Nodes cannot move between lists whose allocators differ.
    #[error("lists use different allocators; nodes cannot be transferred")]
    AllocatorMismatch,

    /// The destination of a splice lies strictly inside the moved range.
    #[error("cannot splice {start}..{end} to position {at} inside itself")]
    OverlappingSplice {
        /// Destination position.
        at: usize,
        /// First moved position.
        start: usize,
        /// One past the last moved position.
        end: usize,
    },
}

impl From<AllocError> for ListError {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::ExceedsMaxSize { requested, max } => Self::Length { requested, max },
            AllocError::Exhausted { bytes } => Self::Exhausted { bytes },
        }
    }
}

pub(crate) fn resolve_range<R>(range: R, len: usize) -> Result<Range<usize>, ListError>
where
    R: RangeBounds<usize>,
{
    ordo_iter::resolve_range(range, len)
        .map_err(|(index, len)| ListError::OutOfRange { index, len })
}
