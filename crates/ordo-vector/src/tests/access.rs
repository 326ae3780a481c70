// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Vector, VectorError, vector};

// =============================================================================
// at() / at_mut()
// =============================================================================

#[test]
fn test_at_in_bounds() {
    let v = vector![10, 20, 30];

    assert_eq!(v.at(0), Ok(&10));
    assert_eq!(v.at(2), Ok(&30));
}

#[test]
fn test_at_out_of_range() {
    let v = vector![10, 20, 30];

    assert_eq!(v.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(
        v.at(3).unwrap_err().to_string(),
        "index 3 out of range for vector of length 3"
    );
}

#[test]
fn test_at_mut_writes() {
    let mut v = vector![1, 2];
    *v.at_mut(1).expect("Failed to at_mut(1)") = 5;

    assert_eq!(v, [1, 5]);
    assert!(v.at_mut(2).is_err());
}

// =============================================================================
// Index / front() / back()
// =============================================================================

#[test]
fn test_index_operator() {
    let mut v = vector![1, 2, 3];
    v[1] = 7;

    assert_eq!(v[1], 7);
    assert_eq!(&v[1..], &[7, 3]);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let v = vector![1, 2, 3];
    let _ = v[3];
}

#[test]
fn test_front_back() {
    let mut v = vector![1, 2, 3];

    assert_eq!(v.front(), Some(&1));
    assert_eq!(v.back(), Some(&3));

    *v.front_mut().expect("Failed to front_mut") = 0;
    *v.back_mut().expect("Failed to back_mut") = 4;
    assert_eq!(v, [0, 2, 4]);
}

#[test]
fn test_front_back_empty() {
    let mut v: Vector<i32> = Vector::new();

    assert_eq!(v.front(), None);
    assert_eq!(v.back(), None);
    assert_eq!(v.front_mut(), None);
}

// =============================================================================
// data() / as_ptr()
// =============================================================================

#[test]
fn test_data_points_at_first_element() {
    let v = vector![5u32, 6];

    assert!(!v.data().is_null());
    assert_eq!(v.data(), v.as_ptr());
    assert_eq!(unsafe { *v.data().add(1) }, 6);
}

#[test]
fn test_as_ptr_without_block_is_aligned() {
    let v: Vector<u64> = Vector::new();

    assert!(v.data().is_null());
    assert!(!v.as_ptr().is_null());
    assert_eq!(v.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
}

#[test]
fn test_slice_algorithms_through_deref() {
    let mut v = vector![3, 1, 2];
    v.sort_unstable();

    assert_eq!(v.binary_search(&2), Ok(1));
    assert!(v.contains(&3));
    assert_eq!(v.iter().sum::<i32>(), 6);
}
