// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_alloc::ProbeAllocator;

use crate::{List, list};

#[test]
fn test_front_back() {
    let mut list = list![1, 2, 3];

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    *list.front_mut().expect("non-empty") = 10;
    *list.back_mut().expect("non-empty") = 30;
    assert_eq!(list, [10, 2, 30]);
}

#[test]
fn test_single_element_is_front_and_back() {
    let list = list![7];
    assert_eq!(list.front(), list.back());
}

#[test]
fn test_empty_front_back_mut() {
    let mut list: List<i32> = List::new();

    assert!(list.front_mut().is_none());
    assert!(list.back_mut().is_none());
}

#[test]
fn test_iter_both_ends() {
    let list = list![1, 2, 3, 4];
    let mut iter = list.iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iter_rev() {
    let list = list![1, 2, 3];
    let reversed: Vec<i32> = list.iter().rev().copied().collect();
    assert_eq!(reversed, [3, 2, 1]);
}

#[test]
fn test_iter_mut() {
    let mut list = list![1, 2, 3];
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list, [2, 4, 6]);
}

#[test]
fn test_into_iter_releases_nodes_as_it_goes() {
    let probe = ProbeAllocator::new();
    let list = List::from_slice_in(&[1u16, 2, 3], probe.clone()).expect("Failed to from_slice_in");
    let mut iter = list.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(probe.stats().live_blocks, 2);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.len(), 1);

    drop(iter);
    assert_eq!(probe.stats().live_blocks, 0);
}

#[test]
fn test_contains() {
    let list = list!["a", "b"];

    assert!(list.contains(&"b"));
    assert!(!list.contains(&"c"));
}

#[test]
fn test_max_size_accounts_for_links() {
    let list: List<u8> = List::new();

    assert!(list.max_size() < isize::MAX as usize / 8);
    assert!(list.max_size() > 0);
}
