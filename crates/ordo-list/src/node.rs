// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Link surgery on the circular node chain.
//!
//! Every node starts with a [`Links`] header, so a `NonNull<Links>` addresses
//! either the sentinel or a live [`Node<T>`]. Only the sentinel lacks a payload.
//!
//! ```text
//!        ┌──────────────────────────────────────────────┐
//!        ▼                                              │
//!   [sentinel] ⇄ [node 0] ⇄ [node 1] ⇄ ... ⇄ [node n-1] ┘
//! ```

use alloc::boxed::Box;
use core::ptr::NonNull;

#[repr(C)]
pub(crate) struct Links {
    next: NonNull<Links>,
    prev: NonNull<Links>,
}

#[repr(C)]
pub struct Node<T> {
    links: Links,
    value: T,
}

impl<T> Node<T> {
    /// A detached node holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            links: Links {
                next: NonNull::dangling(),
                prev: NonNull::dangling(),
            },
            value,
        }
    }
}

/// Allocates a self-linked sentinel on the heap.
pub(crate) fn new_sentinel() -> NonNull<Links> {
    let ptr = NonNull::from(Box::leak(Box::new(Links {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
    })));

    // SAFETY: freshly leaked, exclusively owned.
    unsafe {
        set_next(ptr, ptr);
        set_prev(ptr, ptr);
    }
    ptr
}

/// # Safety
///
/// `ptr` must come from [`new_sentinel`] and not be used afterwards.
pub(crate) unsafe fn free_sentinel(ptr: NonNull<Links>) {
    drop(unsafe { Box::from_raw(ptr.as_ptr()) });
}

// SAFETY (all helpers below): pointers must address live links.

#[inline]
pub(crate) unsafe fn next(link: NonNull<Links>) -> NonNull<Links> {
    unsafe { (*link.as_ptr()).next }
}

#[inline]
pub(crate) unsafe fn prev(link: NonNull<Links>) -> NonNull<Links> {
    unsafe { (*link.as_ptr()).prev }
}

#[inline]
pub(crate) unsafe fn set_next(link: NonNull<Links>, to: NonNull<Links>) {
    unsafe { (*link.as_ptr()).next = to };
}

#[inline]
pub(crate) unsafe fn set_prev(link: NonNull<Links>, to: NonNull<Links>) {
    unsafe { (*link.as_ptr()).prev = to };
}

/// Payload of a non-sentinel link.
#[inline]
pub(crate) unsafe fn value<'a, T>(link: NonNull<Links>) -> &'a T {
    unsafe { &(*link.cast::<Node<T>>().as_ptr()).value }
}

#[inline]
pub(crate) unsafe fn value_mut<'a, T>(link: NonNull<Links>) -> &'a mut T {
    unsafe { &mut (*link.cast::<Node<T>>().as_ptr()).value }
}

/// Moves the payload out of a node, leaving its storage raw.
#[inline]
pub(crate) unsafe fn read_value<T>(link: NonNull<Links>) -> T {
    unsafe { core::ptr::addr_of!((*link.cast::<Node<T>>().as_ptr()).value).read() }
}

/// `n` steps forward from `link`.
pub(crate) unsafe fn advance(mut link: NonNull<Links>, n: usize) -> NonNull<Links> {
    for _ in 0..n {
        link = unsafe { next(link) };
    }
    link
}

/// `n` steps backward from `link`.
pub(crate) unsafe fn retreat(mut link: NonNull<Links>, n: usize) -> NonNull<Links> {
    for _ in 0..n {
        link = unsafe { prev(link) };
    }
    link
}

/// Detaches the chain `first..=last` from its neighbours.
///
/// The chain's own outer links are left stale.
pub(crate) unsafe fn unlink_nodes(first: NonNull<Links>, last: NonNull<Links>) {
    unsafe {
        let before = prev(first);
        let after = next(last);
        set_next(before, after);
        set_prev(after, before);
    }
}

/// Links the detached chain `first..=last` in front of `pos`.
pub(crate) unsafe fn link_nodes(pos: NonNull<Links>, first: NonNull<Links>, last: NonNull<Links>) {
    unsafe {
        let before = prev(pos);
        set_next(before, first);
        set_prev(first, before);
        set_prev(pos, last);
        set_next(last, pos);
    }
}

/// Moves `[first, last)` in front of `pos`. `pos` must not lie inside the
/// range; `pos == last` leaves the chain as it was.
pub(crate) unsafe fn transfer(pos: NonNull<Links>, first: NonNull<Links>, last: NonNull<Links>) {
    if first == last || pos == last {
        return;
    }

    unsafe {
        let tail = prev(last);
        unlink_nodes(first, tail);
        link_nodes(pos, first, tail);
    }
}

/// Swaps `next` and `prev` of a single link.
pub(crate) unsafe fn flip(link: NonNull<Links>) {
    unsafe {
        let links = &mut *link.as_ptr();
        core::mem::swap(&mut links.next, &mut links.prev);
    }
}
