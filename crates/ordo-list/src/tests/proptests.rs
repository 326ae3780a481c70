// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use proptest::prelude::*;

use super::assert_consistent;
use crate::List;

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    InsertN(usize, usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize, i32),
    SpliceWithin(usize, usize, usize),
    RemoveIf(i32),
    Unique,
    Sort,
    Reverse,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-20i32..20).prop_map(Op::PushFront),
        (-20i32..20).prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (0usize..30, -20i32..20).prop_map(|(at, v)| Op::Insert(at, v)),
        (0usize..30, 0usize..6, -20i32..20).prop_map(|(at, n, v)| Op::InsertN(at, n, v)),
        (0usize..30).prop_map(Op::Erase),
        (0usize..30, 0usize..30).prop_map(|(a, b)| Op::EraseRange(a.min(b), a.max(b))),
        (0usize..30, -20i32..20).prop_map(|(n, v)| Op::Resize(n, v)),
        (0usize..30, 0usize..30, 0usize..30)
            .prop_map(|(at, a, b)| Op::SpliceWithin(at, a.min(b), a.max(b))),
        (2i32..5).prop_map(Op::RemoveIf),
        Just(Op::Unique),
        Just(Op::Sort),
        Just(Op::Reverse),
    ]
}

/// Applies `op` to both the list and a `VecDeque` model.
fn apply(list: &mut List<i32>, model: &mut VecDeque<i32>, op: &Op) {
    let len = model.len();

    match *op {
        Op::PushFront(x) => {
            list.push_front(x).expect("Failed to push_front");
            model.push_front(x);
        }
        Op::PushBack(x) => {
            list.push_back(x).expect("Failed to push_back");
            model.push_back(x);
        }
        Op::PopFront => assert_eq!(list.pop_front(), model.pop_front()),
        Op::PopBack => assert_eq!(list.pop_back(), model.pop_back()),
        Op::Insert(at, x) => {
            let result = list.insert(at, x);
            if at <= len {
                assert_eq!(result, Ok(at));
                model.insert(at, x);
            } else {
                assert!(result.is_err());
            }
        }
        Op::InsertN(at, n, x) => {
            let result = list.insert_n(at, n, &x);
            if at <= len {
                assert_eq!(result, Ok(at));
                for _ in 0..n {
                    model.insert(at, x);
                }
            } else {
                assert!(result.is_err());
            }
        }
        Op::Erase(at) => {
            let result = list.erase(at);
            if at < len {
                assert_eq!(result, Ok(at));
                model.remove(at);
            } else {
                assert!(result.is_err());
            }
        }
        Op::EraseRange(start, end) => {
            let result = list.erase_range(start..end);
            if end <= len {
                assert_eq!(result, Ok(start));
                model.drain(start..end);
            } else {
                assert!(result.is_err());
            }
        }
        Op::Resize(n, x) => {
            list.resize(n, &x).expect("Failed to resize");
            model.resize(n, x);
        }
        Op::SpliceWithin(at, start, end) => {
            let result = list.splice_within(at, start..end);
            let valid = at <= len && end <= len;
            let overlapping = start < at && at < end;

            if valid && !overlapping {
                assert_eq!(result, Ok(()));
                let moved: Vec<i32> = model.drain(start..end).collect();
                let dest = if at >= end { at - moved.len() } else { at };
                for (i, v) in moved.into_iter().enumerate() {
                    model.insert(dest + i, v);
                }
            } else {
                assert!(result.is_err());
            }
        }
        Op::RemoveIf(m) => {
            let removed = list.remove_if(|v| v % m == 0);
            let before = model.len();
            model.retain(|v| v % m != 0);
            assert_eq!(removed, before - model.len());
        }
        Op::Unique => {
            list.unique();
            let mut deduped: Vec<i32> = model.drain(..).collect();
            deduped.dedup();
            model.extend(deduped);
        }
        Op::Sort => {
            list.sort();
            model.make_contiguous().sort();
        }
        Op::Reverse => {
            list.reverse();
            model.make_contiguous().reverse();
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_deque_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut list = List::new();
        let mut model = VecDeque::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
            assert_consistent(&list);
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.iter().eq(model.iter()), "after {:?}", op);
        }
    }

    #[test]
    fn prop_sort_is_stable(items in prop::collection::vec((0u8..6, any::<u16>()), 0..80)) {
        let mut list = List::from_slice(&items).expect("Failed to from_slice");
        list.sort_by_key(|pair| pair.0);

        let mut expected = items.clone();
        expected.sort_by_key(|pair| pair.0);

        assert_consistent(&list);
        prop_assert_eq!(&list, &expected[..]);
    }

    #[test]
    fn prop_merge_of_sorted_is_sorted(
        mut a in prop::collection::vec(-50i32..50, 0..40),
        mut b in prop::collection::vec(-50i32..50, 0..40),
    ) {
        a.sort();
        b.sort();
        let mut left = List::from_slice(&a).expect("Failed to from_slice");
        let mut right = List::from_slice(&b).expect("Failed to from_slice");

        left.merge(&mut right).expect("Failed to merge");

        let mut expected = [a, b].concat();
        expected.sort();
        prop_assert!(right.is_empty());
        prop_assert_eq!(&left, &expected[..]);
    }

    #[test]
    fn prop_splice_range_preserves_total(
        a in prop::collection::vec(any::<i32>(), 0..20),
        b in prop::collection::vec(any::<i32>(), 0..20),
        at in 0usize..21,
        start in 0usize..21,
        width in 0usize..21,
    ) {
        let at = at.min(a.len());
        let start = start.min(b.len());
        let end = (start + width).min(b.len());

        let mut left = List::from_slice(&a).expect("Failed to from_slice");
        let mut right = List::from_slice(&b).expect("Failed to from_slice");
        left.splice_range(at, &mut right, start..end).expect("Failed to splice_range");

        let mut expected_left = a.clone();
        expected_left.splice(at..at, b[start..end].iter().copied());
        let mut expected_right = b.clone();
        expected_right.drain(start..end);

        assert_consistent(&left);
        assert_consistent(&right);
        prop_assert_eq!(left.len() + right.len(), a.len() + b.len());
        prop_assert_eq!(&left, &expected_left[..]);
        prop_assert_eq!(&right, &expected_right[..]);
    }
}
