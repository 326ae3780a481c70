// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_alloc::ProbeAllocator;
use ordo_test_utils::Ledger;

use super::{assert_consistent, tracked, values};
use crate::{List, ListError, list};

fn probed(values: &[i32], probe: &ProbeAllocator<i32>) -> List<i32, ProbeAllocator<i32>> {
    List::from_slice_in(values, probe.clone()).expect("Failed to from_slice_in")
}

// =============================================================================
// splice()
// =============================================================================

#[test]
fn test_splice_whole_list() {
    let mut a = list![1, 5];
    let mut b = list![2, 3, 4];

    a.splice(1, &mut b).expect("Failed to splice");

    assert_eq!(a, [1, 2, 3, 4, 5]);
    assert!(b.is_empty());
    assert_consistent(&a);
    assert_consistent(&b);
}

#[test]
fn test_splice_moves_nodes_without_copying() {
    Ledger::reset();
    let mut a = tracked(&[1]);
    let mut b = tracked(&[2, 3]);
    let constructed = Ledger::constructed();
    let node = b.front().expect("non-empty") as *const _;

    a.splice(0, &mut b).expect("Failed to splice");

    assert_eq!(values(&a), [2, 3, 1]);
    assert_eq!(Ledger::constructed(), constructed);
    assert_eq!(a.front().expect("non-empty") as *const _, node);
}

#[test]
fn test_splice_empty_source() {
    let mut a = list![1];
    let mut b = List::new();

    a.splice(0, &mut b).expect("Failed to splice");
    assert_eq!(a, [1]);
}

#[test]
fn test_splice_into_empty_then_reuse_source() {
    let mut a = List::new();
    let mut b = list![1, 2];

    a.splice(0, &mut b).expect("Failed to splice");
    b.push_back(3).expect("Failed to push_back");

    assert_eq!(a, [1, 2]);
    assert_eq!(b, [3]);
    assert_consistent(&b);
}

#[test]
fn test_splice_rejects_unequal_allocators() {
    let p = ProbeAllocator::new();
    let q = ProbeAllocator::new();
    let mut a = probed(&[1], &p);
    let mut b = probed(&[2], &q);

    assert_eq!(a.splice(0, &mut b), Err(ListError::AllocatorMismatch));
    assert_eq!(a, [1]);
    assert_eq!(b, [2]);
}

#[test]
fn test_splice_accepts_equal_allocators() {
    let p = ProbeAllocator::new();
    let mut a = probed(&[1], &p);
    let mut b = probed(&[2], &p);

    a.splice(1, &mut b).expect("Failed to splice");
    drop(b);
    assert_eq!(p.stats().live_blocks, 2);

    drop(a);
    assert_eq!(p.stats().live_blocks, 0);
}

#[test]
fn test_splice_position_out_of_range() {
    let mut a = list![1];
    let mut b = list![2];

    assert_eq!(a.splice(2, &mut b), Err(ListError::OutOfRange { index: 2, len: 1 }));
    assert_eq!(b, [2]);
}

// =============================================================================
// splice_one() / splice_range()
// =============================================================================

#[test]
fn test_splice_one() {
    let mut a = list![1, 3];
    let mut b = list![9, 2, 8];

    a.splice_one(1, &mut b, 1).expect("Failed to splice_one");

    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [9, 8]);
    assert_consistent(&a);
    assert_consistent(&b);
}

#[test]
fn test_splice_one_bad_index() {
    let mut a = list![1];
    let mut b = list![2];

    assert_eq!(a.splice_one(0, &mut b, 1), Err(ListError::OutOfRange { index: 1, len: 1 }));
}

#[test]
fn test_splice_range() {
    let mut a = list![0, 4];
    let mut b = list![9, 1, 2, 3, 9];

    a.splice_range(1, &mut b, 1..4).expect("Failed to splice_range");

    assert_eq!(a, [0, 1, 2, 3, 4]);
    assert_eq!(b, [9, 9]);
    assert_eq!(a.len() + b.len(), 7);
    assert_consistent(&a);
    assert_consistent(&b);
}

#[test]
fn test_splice_range_to_ghost() {
    let mut a = list![1];
    let mut b = list![2, 3];

    a.splice_range(1, &mut b, ..).expect("Failed to splice_range");
    assert_eq!(a, [1, 2, 3]);
    assert!(b.is_empty());
}

#[test]
fn test_splice_range_empty_range() {
    let mut a = list![1];
    let mut b = list![2];

    a.splice_range(0, &mut b, 1..1).expect("Failed to splice_range");
    assert_eq!(a, [1]);
    assert_eq!(b, [2]);
}

// =============================================================================
// splice_within()
// =============================================================================

#[test]
fn test_splice_within_forward_and_back() {
    let mut list = list![0, 1, 2, 3, 4];

    list.splice_within(0, 3..5).expect("Failed to splice_within");
    assert_eq!(list, [3, 4, 0, 1, 2]);

    list.splice_within(5, 0..2).expect("Failed to splice_within");
    assert_eq!(list, [0, 1, 2, 3, 4]);
    assert_consistent(&list);
}

#[test]
fn test_splice_within_boundaries_are_noops() {
    let mut list = list![0, 1, 2, 3];

    list.splice_within(1, 1..3).expect("Failed to splice_within");
    list.splice_within(3, 1..3).expect("Failed to splice_within");
    assert_eq!(list, [0, 1, 2, 3]);
}

#[test]
fn test_splice_within_overlap_rejected() {
    let mut list = list![0, 1, 2, 3];

    assert_eq!(
        list.splice_within(2, 1..3),
        Err(ListError::OverlappingSplice {
            at: 2,
            start: 1,
            end: 3
        })
    );
    assert_eq!(list, [0, 1, 2, 3]);
}

#[test]
fn test_splice_within_single_element() {
    let mut list = list!['a', 'b', 'c'];

    list.splice_within(0, 2..=2).expect("Failed to splice_within");
    assert_eq!(list, ['c', 'a', 'b']);
    assert_eq!(list.len(), 3);
}
