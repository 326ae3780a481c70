// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ordo_alloc::{ProbeAllocator, ProbeBehaviour};

use super::assert_consistent;
use crate::{List, ListError};

fn probed(values: &[i32]) -> (List<i32, ProbeAllocator<i32>>, ProbeAllocator<i32>) {
    let probe = ProbeAllocator::new();
    let list = List::from_slice_in(values, probe.clone()).expect("Failed to from_slice_in");
    (list, probe)
}

#[test]
fn test_push_back_exhausted_leaves_list() {
    let (mut list, probe) = probed(&[1, 2]);
    probe.change_behaviour(ProbeBehaviour::FailAlways);

    let node_bytes = core::mem::size_of::<crate::node::Node<i32>>();
    assert_eq!(list.push_back(3), Err(ListError::Exhausted { bytes: node_bytes }));
    assert_eq!(list.push_front(0), Err(ListError::Exhausted { bytes: node_bytes }));
    assert_eq!(list, [1, 2]);
    assert_consistent(&list);
}

#[test]
fn test_insert_n_partial_failure_releases_staged_nodes() {
    let (mut list, probe) = probed(&[1, 2]);
    probe.change_behaviour(ProbeBehaviour::FailAtAllocation(3));

    assert!(matches!(list.insert_n(1, 5, &0), Err(ListError::Exhausted { .. })));

    assert_eq!(list, [1, 2]);
    assert_eq!(probe.stats().live_blocks, 2);
    assert_eq!(probe.stats().failures, 1);
}

#[test]
fn test_from_slice_in_failure_leaks_nothing() {
    let probe = ProbeAllocator::new();
    probe.change_behaviour(ProbeBehaviour::FailAtAllocation(4));

    let result = List::from_slice_in(&[1, 2, 3, 4, 5], probe.clone());

    assert!(matches!(result, Err(ListError::Exhausted { .. })));
    assert_eq!(probe.stats().live_blocks, 0);
}

#[test]
fn test_emplace_failure_skips_constructor() {
    let (mut list, probe) = probed(&[1]);
    probe.change_behaviour(ProbeBehaviour::FailAlways);

    let mut called = false;
    let result = list.emplace_back(|| {
        called = true;
        2
    });

    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn test_relinking_needs_no_allocation() {
    let probe = ProbeAllocator::new();
    let mut a = List::from_slice_in(&[5, 1, 3], probe.clone()).expect("Failed to build");
    let mut b = List::from_slice_in(&[4, 2], probe.clone()).expect("Failed to build");
    probe.change_behaviour(ProbeBehaviour::FailAlways);

    a.sort();
    b.sort();
    a.merge(&mut b).expect("merge must not allocate");
    a.reverse();
    a.splice_within(0, 4..5).expect("splice_within must not allocate");
    b.splice(0, &mut a).expect("splice must not allocate");

    assert_eq!(b, [1, 5, 4, 3, 2]);
    assert_eq!(probe.stats().failures, 0);
}

#[test]
fn test_resize_failure_leaves_list() {
    let (mut list, probe) = probed(&[1]);
    probe.change_behaviour(ProbeBehaviour::FailAtAllocation(2));

    assert!(list.resize(4, &7).is_err());
    assert_eq!(list, [1]);

    list.resize(4, &7).expect("Failed to resize after probe disarmed");
    assert_eq!(list, [1, 7, 7, 7]);
}
