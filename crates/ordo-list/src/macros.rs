// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`List`](crate::List) with the default allocator.
///
/// Accepts the same forms as `vec!`. Panics when a node cannot be
/// allocated.
///
/// # Example
///
/// ```rust
/// use ordo_list::list;
///
/// let l = list![1, 2, 3];
/// assert_eq!(l.len(), 3);
///
/// let ones = list!['x'; 2];
/// assert_eq!(ones, ['x', 'x']);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($value:expr; $n:expr) => {
        match $crate::List::from_elem($n, &$value) {
            Ok(list) => list,
            Err(err) => panic!("list!: {}", err),
        }
    };
    ($($item:expr),+ $(,)?) => {
        $crate::List::from([$($item),+])
    };
}
