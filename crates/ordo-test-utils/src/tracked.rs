// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[derive(Clone, Copy, Default)]
struct State {
    live: usize,
    constructed: usize,
    dropped: usize,
    fuse: Option<usize>,
}

thread_local! {
    static LEDGER: Cell<State> = const { Cell::new(State { live: 0, constructed: 0, dropped: 0, fuse: None }) };
}

fn update<R>(f: impl FnOnce(&mut State) -> R) -> R {
    LEDGER.with(|cell| {
        let mut state = cell.get();
        let out = f(&mut state);
        cell.set(state);
        out
    })
}

/// Thread-local bookkeeping for [`Tracked`] values.
///
/// Each test thread has its own ledger, so tests running in parallel do not
/// interfere. Call [`Ledger::reset`] at the start of a test.
pub struct Ledger;

impl Ledger {
    /// Clears all counters and disarms the fuse.
    pub fn reset() {
        update(|s| *s = State::default());
    }

    /// Number of `Tracked` values currently alive on this thread.
    pub fn live() -> usize {
        update(|s| s.live)
    }

    /// Total constructions (new, clone, default) since the last reset.
    pub fn constructed() -> usize {
        update(|s| s.constructed)
    }

    /// Total drops since the last reset.
    pub fn dropped() -> usize {
        update(|s| s.dropped)
    }

    /// Makes the `n`th clone or default construction from now panic
    /// (1-based). The fuse is one-shot.
    pub fn arm(n: usize) {
        update(|s| s.fuse = Some(n.max(1)));
    }

    /// Disarms the fuse.
    pub fn disarm() {
        update(|s| s.fuse = None);
    }

    /// Returns true while the fuse is armed.
    pub fn is_armed() -> bool {
        update(|s| s.fuse.is_some())
    }

    fn tick_fuse() {
        let blown = update(|s| match s.fuse {
            Some(1) => {
                s.fuse = None;
                true
            }
            Some(n) => {
                s.fuse = Some(n - 1);
                false
            }
            None => false,
        });

        if blown {
            panic!("Tracked: construction fuse blown");
        }
    }

    fn born() {
        update(|s| {
            s.live += 1;
            s.constructed += 1;
        });
    }
}

/// Element type whose constructions and drops are counted by [`Ledger`].
///
/// `clone()` and `default()` honour the armed fuse; `new()` never panics.
///
/// # Example
/// ```
/// use ordo_test_utils::{Ledger, Tracked, panics};
///
/// Ledger::reset();
/// let a = Tracked::new(1);
/// Ledger::arm(2);
///
/// let b = a.clone();
/// assert!(panics(|| drop(a.clone())));
/// assert_eq!(Ledger::live(), 2);
///
/// drop((a, b));
/// assert_eq!(Ledger::live(), 0);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked {
    value: i32,
}

impl Tracked {
    /// Creates a tracked value.
    pub fn new(value: i32) -> Self {
        Ledger::born();
        Self { value }
    }

    /// Returns the payload.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Ledger::tick_fuse();
        Self::new(self.value)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Ledger::tick_fuse();
        Self::new(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        update(|s| {
            s.live -= 1;
            s.dropped += 1;
        });
    }
}

impl From<i32> for Tracked {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

/// Runs `f` and reports whether it panicked.
pub fn panics<F: FnOnce()>(f: F) -> bool {
    catch_unwind(AssertUnwindSafe(f)).is_err()
}
