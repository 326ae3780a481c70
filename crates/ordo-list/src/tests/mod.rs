// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod access;
mod alloc_failure;
mod proptests;
mod splice;

use ordo_alloc::Allocator;
use ordo_test_utils::Tracked;

use crate::List;
use crate::node;

/// Builds a list of tracked values with push_back.
pub(crate) fn tracked(values: &[i32]) -> List<Tracked> {
    let mut list = List::new();
    for &value in values {
        list.push_back(Tracked::new(value)).expect("Failed to push_back");
    }
    list
}

pub(crate) fn values<A: Allocator<Tracked>>(list: &List<Tracked, A>) -> Vec<i32> {
    list.iter().map(Tracked::value).collect()
}

/// Walks the ring in both directions and checks it against `len()`.
pub(crate) fn assert_consistent<T, A: Allocator<T>>(list: &List<T, A>) {
    let sentinel = list.sentinel;

    // SAFETY: the list is borrowed, so its ring is stable.
    unsafe {
        let mut link = node::next(sentinel);
        let mut forward = 0;
        while link != sentinel {
            assert_eq!(node::prev(node::next(link)), link, "broken back link");
            link = node::next(link);
            forward += 1;
            assert!(forward <= list.len(), "ring longer than len()");
        }
        assert_eq!(forward, list.len(), "forward walk disagrees with len()");

        let mut link = node::prev(sentinel);
        let mut backward = 0;
        while link != sentinel {
            link = node::prev(link);
            backward += 1;
            assert!(backward <= list.len(), "ring longer than len()");
        }
        assert_eq!(backward, list.len(), "backward walk disagrees with len()");
    }
}
