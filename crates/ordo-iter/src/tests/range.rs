// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Bound;

use crate::resolve_range;

#[test]
fn test_resolve_range_forms() {
    assert_eq!(resolve_range(.., 5), Ok(0..5));
    assert_eq!(resolve_range(2.., 5), Ok(2..5));
    assert_eq!(resolve_range(..3, 5), Ok(0..3));
    assert_eq!(resolve_range(1..=3, 5), Ok(1..4));
    assert_eq!(resolve_range((Bound::Excluded(1), Bound::Unbounded), 5), Ok(2..5));
}

#[test]
fn test_resolve_range_empty_at_end() {
    assert_eq!(resolve_range(5..5, 5), Ok(5..5));
    assert_eq!(resolve_range(.., 0), Ok(0..0));
}

#[test]
fn test_resolve_range_end_past_len() {
    assert_eq!(resolve_range(0..6, 5), Err((6, 5)));
    assert_eq!(resolve_range(..=5, 5), Err((6, 5)));
}

#[test]
fn test_resolve_range_inverted() {
    assert_eq!(resolve_range(4..2, 5), Err((4, 5)));
}

#[test]
fn test_resolve_range_end_checked_before_start() {
    assert_eq!(resolve_range(9..7, 5), Err((7, 5)));
}

#[test]
fn test_resolve_range_overflowing_bounds() {
    assert_eq!(resolve_range(..=usize::MAX, 5), Err((usize::MAX, 5)));
    assert_eq!(
        resolve_range((Bound::Excluded(usize::MAX), Bound::Unbounded), 5),
        Err((usize::MAX, 5))
    );
}
