// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Node-level algorithms: filtering, deduplication, merging, sorting and
//! reversal. None of them moves or clones a payload; reordering is done by
//! relinking, and user callbacks only run between complete relink steps.

use core::cmp::Ordering;
use core::ptr::NonNull;

use ordo_alloc::Allocator;

use crate::error::ListError;
use crate::list::List;
use crate::node::{self, Links};

impl<T, A: Allocator<T>> List<T, A> {
    /// Destroys every element equal to `value` and returns how many went.
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|v| v == value)
    }

    /// Destroys every element matching `pred`, keeping the survivors' order.
    /// Returns the number of destroyed elements.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut link = self.first();

        while link != self.sentinel {
            // SAFETY: `link` is a node; its successor is read before unlinking.
            unsafe {
                let next = node::next(link);
                if pred(node::value(link)) {
                    drop(self.take_node(link));
                }
                link = next;
            }
        }

        before - self.len
    }

    /// Collapses each run of consecutive equal elements to its first member.
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|kept, candidate| kept == candidate)
    }

    /// Collapses runs where `same(kept, candidate)` holds, comparing each
    /// candidate against the last element kept. Returns the number of
    /// destroyed elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::list;
    ///
    /// let mut l = list![1, 2, 4, 5, 9, 10, 11];
    /// let removed = l.unique_by(|kept, next| next - kept == 1);
    ///
    /// assert_eq!(removed, 3);
    /// assert_eq!(l, [1, 4, 9, 11]);
    /// ```
    pub fn unique_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len < 2 {
            return 0;
        }

        let before = self.len;
        let mut kept = self.first();

        // SAFETY: `kept` is always a node; candidates are read before unlinking.
        unsafe {
            let mut link = node::next(kept);
            while link != self.sentinel {
                let next = node::next(link);
                if same(node::value(kept), node::value(link)) {
                    drop(self.take_node(link));
                } else {
                    kept = link;
                }
                link = next;
            }
        }

        before - self.len
    }

    /// Merges the sorted `other` into this sorted list. See
    /// [`List::merge_by`].
    pub fn merge(&mut self, other: &mut Self) -> Result<(), ListError>
    where
        T: Ord,
    {
        self.merge_by(other, T::cmp)
    }

    /// Moves every node of `other` into this list so that, when both were
    /// sorted by `compare`, the result is sorted too. Equal elements keep
    /// this list's members first.
    ///
    /// # Errors
    ///
    /// - [`ListError::AllocatorMismatch`] when the allocators differ.
    /// - [`ListError::Length`] when the combined length exceeds `max_size()`.
    ///
    /// Neither list is touched on error.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.check_allocator(other)?;
        self.required(other.len)?;

        let mut less = |a: NonNull<Links>, b: NonNull<Links>| {
            // SAFETY: only called on nodes.
            unsafe { compare(node::value(a), node::value(b)) == Ordering::Less }
        };

        let end = self.sentinel;
        let other_end = other.sentinel;
        let mut f1 = self.first();
        let mut f2 = other.first();

        // SAFETY: every pointer below is a node of one of the two lists or a
        // sentinel, and each relink completes before `less` runs again.
        unsafe {
            while f1 != end && f2 != other_end {
                if !less(f2, f1) {
                    f1 = node::next(f1);
                    continue;
                }

                let mut run_end = node::next(f2);
                let mut count = 1;
                while run_end != other_end && less(run_end, f1) {
                    run_end = node::next(run_end);
                    count += 1;
                }

                let run = f2;
                f2 = run_end;
                node::transfer(f1, run, run_end);
                other.len -= count;
                self.len += count;
                f1 = node::next(f1);
            }
        }

        self.adopt_before(end, other);
        Ok(())
    }

    /// Sorts ascending. Stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts by the key `f` extracts. Stable.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Stable merge sort over the node chain.
    ///
    /// The range is halved recursively, each half sorted in place, and the
    /// halves merged by moving runs of the right half in front of the left.
    /// Recursion depth is O(log n) and no payload is ever moved.
    ///
    /// A panic in `compare` leaves every element in the list, partially
    /// sorted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordo_list::list;
    ///
    /// let mut l = list![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    /// l.sort_by(|x, y| x.0.cmp(&y.0));
    ///
    /// assert_eq!(l, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut less = |a: NonNull<Links>, b: NonNull<Links>| {
            // SAFETY: only called on nodes.
            unsafe { compare(node::value::<T>(a), node::value::<T>(b)) == Ordering::Less }
        };

        let first = self.first();
        // SAFETY: `[first, sentinel)` holds exactly `len` nodes.
        unsafe { sort_run(first, self.sentinel, self.len, &mut less) };
    }

    /// Reverses the order of the elements in O(n) by swapping the links of
    /// every node and of the sentinel.
    pub fn reverse(&mut self) {
        let mut link = self.sentinel;

        // SAFETY: visits each of the `len + 1` links of the ring once.
        unsafe {
            for _ in 0..=self.len {
                let next = node::next(link);
                node::flip(link);
                link = next;
            }
        }
    }
}

/// Sorts the `n` nodes of `[first, end)` and returns the new first node.
///
/// `end` itself is never relinked, so the caller's boundary stays valid.
///
/// # Safety
///
/// `[first, end)` must hold exactly `n` nodes of one well-formed ring.
unsafe fn sort_run<F>(
    first: NonNull<Links>,
    end: NonNull<Links>,
    n: usize,
    less: &mut F,
) -> NonNull<Links>
where
    F: FnMut(NonNull<Links>, NonNull<Links>) -> bool,
{
    match n {
        0 | 1 => return first,
        2 => {
            // SAFETY: two nodes: `first` and its successor.
            unsafe {
                let second = node::prev(end);
                if less(second, first) {
                    node::unlink_nodes(second, second);
                    node::link_nodes(first, second, second);
                    return second;
                }
            }
            return first;
        }
        _ => {}
    }

    let half = n / 2;

    // SAFETY: both halves are well-formed sub-runs of the ring; relinking only
    // moves nodes of the right half in front of nodes of the left half.
    unsafe {
        let mid = node::advance(first, half);
        let mut f1 = sort_run(first, mid, half, less);
        let mut f2 = sort_run(mid, end, n - half, less);
        let mut e1 = f2;
        let mut head = f1;

        while f1 != e1 && f2 != end {
            if !less(f2, f1) {
                f1 = node::next(f1);
                continue;
            }

            let mut run_end = node::next(f2);
            while run_end != end && less(run_end, f1) {
                run_end = node::next(run_end);
            }

            let run_last = node::prev(run_end);
            if f1 == head {
                head = f2;
            }
            if e1 == f2 {
                e1 = run_end;
            }

            node::unlink_nodes(f2, run_last);
            node::link_nodes(f1, f2, run_last);
            f2 = run_end;
            f1 = node::next(f1);
        }

        head
    }
}
