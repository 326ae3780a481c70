// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod access;
mod assign;

use ordo_test_utils::Tracked;

use crate::Vector;

/// Builds a vector of tracked values with push_back.
pub(crate) fn tracked(values: &[i32]) -> Vector<Tracked> {
    let mut v = Vector::new();
    for &value in values {
        v.push_back(Tracked::new(value)).expect("Failed to push_back");
    }
    v
}

pub(crate) fn values(v: &Vector<Tracked>) -> Vec<i32> {
    v.iter().map(Tracked::value).collect()
}

/// Iterator that claims an exact length of `claimed` whatever it yields.
pub(crate) struct Misreported<I> {
    pub(crate) inner: I,
    pub(crate) claimed: usize,
}

impl<I: Iterator> Iterator for Misreported<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.claimed, Some(self.claimed))
    }
}
