// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`Vector`](crate::Vector) with the default allocator.
///
/// - `vector![]` is empty.
/// - `vector![a, b, c]` holds the given elements.
/// - `vector![value; n]` holds `n` clones of `value`.
///
/// Capacity equals length. Panics when the storage cannot be allocated.
///
/// # Example
///
/// ```rust
/// use ordo_vector::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = vector![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($value:expr; $n:expr) => {
        match $crate::Vector::from_elem($n, &$value) {
            Ok(v) => v,
            Err(err) => panic!("vector!: {}", err),
        }
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Vector::from([$($item),+])
    };
}
