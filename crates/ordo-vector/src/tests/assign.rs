// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_test_utils::{Ledger, Tracked};

use super::{Misreported, tracked, values};
use crate::{Vector, VectorError, vector};

// =============================================================================
// assign_n()
// =============================================================================

#[test]
fn test_assign_n_shrinking_reuses_storage() {
    let mut v = vector![1, 2, 3, 4, 5];
    let data = v.data();

    v.assign_n(2, &7).expect("Failed to assign_n");

    assert_eq!(v, [7, 7]);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.data(), data);
}

#[test]
fn test_assign_n_growing_within_capacity() {
    let mut v = vector![1, 2];
    v.reserve(8).expect("Failed to reserve");

    v.assign_n(6, &0).expect("Failed to assign_n");

    assert_eq!(v, [0; 6]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_assign_n_reallocates_exactly() {
    let mut v = vector![1, 2, 3];

    v.assign_n(10, &4).expect("Failed to assign_n");

    assert_eq!(v.len(), 10);
    assert_eq!(v.capacity(), 10);
    assert!(v.iter().all(|&x| x == 4));
}

#[test]
fn test_assign_n_above_max_size() {
    let mut v = vector![1u16];

    assert!(matches!(
        v.assign_n(usize::MAX, &0),
        Err(VectorError::Length { requested: usize::MAX, .. })
    ));
    assert_eq!(v, [1]);
}

#[test]
fn test_assign_n_zero_clears() {
    Ledger::reset();
    let mut v = tracked(&[1, 2]);
    let template = Tracked::new(5);

    v.assign_n(0, &template).expect("Failed to assign_n(0)");

    assert!(v.is_empty());
    assert_eq!(Ledger::live(), 1);
}

// =============================================================================
// assign_slice() / assign_iter()
// =============================================================================

#[test]
fn test_assign_slice() {
    let mut v = vector!["old"; 3];
    v.assign_slice(&["a", "b"]).expect("Failed to assign_slice");

    assert_eq!(v, ["a", "b"]);
}

#[test]
fn test_assign_iter_exact() {
    let mut v: Vector<i32> = Vector::new();
    v.assign_iter(1..=4).expect("Failed to assign_iter");

    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_assign_iter_unknown_length() {
    let mut v = vector![9, 9, 9, 9, 9, 9, 9, 9];
    v.assign_iter("a1b2c3".chars().filter(char::is_ascii_digit).map(|c| c as i32 - '0' as i32))
        .expect("Failed to assign_iter");

    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_assign_iter_keeps_items_beyond_size_hint() {
    let mut v = vector![9, 9, 9];
    let items = Misreported {
        inner: 0..5,
        claimed: 2,
    };

    v.assign_iter(items).expect("Failed to assign_iter");

    assert_eq!(v, [0, 1, 2, 3, 4]);
}

#[test]
fn test_from_iter_keeps_items_beyond_size_hint() {
    let items = Misreported {
        inner: 0..5,
        claimed: 2,
    };

    let v: Vector<i32> = items.collect();

    assert_eq!(v.len(), 5);
}

#[test]
fn test_assign_keeps_tracked_balance() {
    Ledger::reset();
    let mut v = tracked(&[1, 2, 3, 4]);

    v.assign_iter([Tracked::new(7), Tracked::new(8)])
        .expect("Failed to assign_iter");

    assert_eq!(values(&v), [7, 8]);
    assert_eq!(Ledger::live(), 2);
}

// =============================================================================
// assign_from_within()
// =============================================================================

#[test]
fn test_assign_from_within() {
    let mut v = vector![1, 2, 3, 4, 5];
    v.assign_from_within(1..4).expect("Failed to assign_from_within");

    assert_eq!(v, [2, 3, 4]);
    assert_eq!(v.capacity(), 5);
}

// =============================================================================
// resize() / resize_default() / resize_with()
// =============================================================================

#[test]
fn test_resize_grows_and_shrinks() {
    let mut v = vector![1, 2, 3];

    v.resize(5, &0).expect("Failed to resize up");
    assert_eq!(v, [1, 2, 3, 0, 0]);
    assert_eq!(v.capacity(), 6);

    v.resize(2, &0).expect("Failed to resize down");
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 6);
}

#[test]
fn test_resize_default() {
    let mut v: Vector<String> = Vector::new();
    v.resize_default(2).expect("Failed to resize_default");

    assert_eq!(v, ["", ""]);
}

#[test]
fn test_resize_with_counter() {
    let mut v = vector![0];
    let mut next = 0;
    v.resize_with(4, || {
        next += 10;
        next
    })
    .expect("Failed to resize_with");

    assert_eq!(v, [0, 10, 20, 30]);
}

#[test]
fn test_resize_length_error() {
    let mut v = vector![1u64];

    assert!(matches!(v.resize(usize::MAX, &0), Err(VectorError::Length { .. })));
    assert_eq!(v, [1]);
}
