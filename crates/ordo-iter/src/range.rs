// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Bound, Range, RangeBounds};

/// Resolves `range` against a sequence of `len` elements.
///
/// Fails with `(offending_bound, len)` when the range is inverted, ends past
/// `len`, or a bound overflows. The end is checked before the start.
///
/// # Example
///
/// ```rust
/// use ordo_iter::resolve_range;
///
/// assert_eq!(resolve_range(1.., 4), Ok(1..4));
/// assert_eq!(resolve_range(..=4, 4), Err((5, 4)));
/// assert_eq!(resolve_range(3..2, 4), Err((3, 4)));
/// ```
pub fn resolve_range<R>(range: R, len: usize) -> Result<Range<usize>, (usize, usize)>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).ok_or((s, len))?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1).ok_or((e, len))?,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err((end, len));
    }
    if start > end {
        return Err((start, len));
    }

    Ok(start..end)
}
