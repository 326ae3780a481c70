// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::walk::Walk;

/// Bidirectional cursor over a sequence with a ghost end position.
///
/// Implementors move in O(1) and never own the elements they point at.
pub trait Cursor {
    /// What the cursor yields: `&T`, or a projection of it.
    type Item;

    /// Element at the cursor, `None` at the ghost position.
    fn current(&self) -> Option<Self::Item>;

    /// Element after the cursor. At the ghost this is the first element.
    fn peek_next(&self) -> Option<Self::Item>;

    /// Element before the cursor. At the first element this is `None`
    /// (the ghost); at the ghost it is the last element.
    fn peek_prev(&self) -> Option<Self::Item>;

    /// Steps forward, wrapping from the ghost to the first element.
    fn move_next(&mut self);

    /// Steps backward, wrapping from the first element to the ghost.
    fn move_prev(&mut self);

    /// Index of the current element, `None` at the ghost.
    fn index(&self) -> Option<usize>;

    /// Number of elements in the traversed sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true at the ghost position.
    fn is_end(&self) -> bool {
        self.index().is_none()
    }

    /// Iterates from the cursor's position up to the ghost.
    fn walk(self) -> Walk<Self>
    where
        Self: Sized,
    {
        Walk::new(self)
    }
}

/// Cursor with O(1) jumps.
///
/// Positions are `0..=len`, where `len` is the ghost.
pub trait RandomAccessCursor: Cursor {
    /// Moves to `index`. Anything at or past `len` lands on the ghost.
    fn seek(&mut self, index: usize);

    /// Position of the cursor in `0..=len`.
    fn position(&self) -> usize {
        self.index().unwrap_or_else(|| self.len())
    }

    /// Moves by `delta` positions around the ring of `len + 1` positions.
    fn offset(&mut self, delta: isize) {
        let ring = self.len() as i128 + 1;
        let target = (self.position() as i128 + delta as i128).rem_euclid(ring);
        self.seek(target as usize);
    }

    /// Element at `index` without moving the cursor.
    fn get(&self, index: usize) -> Option<Self::Item>
    where
        Self: Clone,
    {
        if index >= self.len() {
            return None;
        }

        let mut probe = self.clone();
        probe.seek(index);
        probe.current()
    }

    /// Signed position difference `other - self`.
    fn distance_to(&self, other: &Self) -> isize {
        other.position() as isize - self.position() as isize
    }
}

/// Number of `move_next` steps from `first` to `last`.
///
/// Returns `None` when `last` is not reached before `first` passes the ghost.
/// Runs in O(n); random-access cursors should prefer
/// [`RandomAccessCursor::distance_to`].
pub fn distance<C>(first: &C, last: &C) -> Option<usize>
where
    C: Cursor + Clone + PartialEq,
{
    let mut walker = first.clone();
    let mut steps = 0;

    loop {
        if walker == *last {
            return Some(steps);
        }
        if walker.is_end() {
            return None;
        }

        walker.move_next();
        steps += 1;
    }
}
