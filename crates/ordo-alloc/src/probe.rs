// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::allocator::Allocator;
use crate::default::DefaultAllocator;
use crate::error::AllocError;

/// Failure injection for [`ProbeAllocator`].
///
/// Only available with the `test-utils` feature.
///
/// # Example
///
/// ```rust
/// use ordo_alloc::{AllocError, Allocator, ProbeAllocator, ProbeBehaviour};
///
/// let alloc = ProbeAllocator::<u8>::new();
/// alloc.change_behaviour(ProbeBehaviour::FailAtAllocation(2));
///
/// let first = alloc.allocate(4).expect("first allocation succeeds");
/// assert!(matches!(alloc.allocate(4), Err(AllocError::Exhausted { .. })));
///
/// // One-shot: the probe is back to normal.
/// let third = alloc.allocate(4).expect("third allocation succeeds");
///
/// unsafe {
///     alloc.deallocate(first.as_ptr(), 4);
///     alloc.deallocate(third.as_ptr(), 4);
/// }
/// assert_eq!(alloc.stats().live_blocks, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// The Nth allocation from now (1-based) fails with
    /// [`AllocError::Exhausted`], then the behaviour returns to `None`.
    FailAtAllocation(usize),
    /// Every allocation fails with [`AllocError::Exhausted`] until changed.
    FailAlways,
}

/// Counters observed by a [`ProbeAllocator`] and all of its clones and rebinds.
///
/// Zero-sized requests never reach the heap and are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeStats {
    /// Successful heap allocations.
    pub allocations: usize,
    /// Heap blocks released.
    pub deallocations: usize,
    /// Allocations refused by failure injection.
    pub failures: usize,
    /// Blocks currently allocated.
    pub live_blocks: usize,
    /// Bytes currently allocated.
    pub live_bytes: usize,
}

#[derive(Debug, Default)]
struct ProbeState {
    behaviour: Cell<ProbeBehaviour>,
    countdown: Cell<usize>,
    stats: Cell<ProbeStats>,
}

impl ProbeState {
    fn should_fail(&self) -> bool {
        match self.behaviour.get() {
            ProbeBehaviour::None => false,
            ProbeBehaviour::FailAlways => true,
            ProbeBehaviour::FailAtAllocation(_) => {
                let left = self.countdown.get().saturating_sub(1);
                self.countdown.set(left);

                if left == 0 {
                    self.behaviour.set(ProbeBehaviour::None);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn update(&self, f: impl FnOnce(&mut ProbeStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

/// Allocator that records every heap request and can be told to fail.
///
/// Clones and rebinds share one probe, so a container and its node
/// allocator report into the same [`ProbeStats`]. Two probes compare equal
/// only when they share state, which makes this a stateful allocator for
/// exercising allocator-equality checks.
///
/// Only available with the `test-utils` feature.
pub struct ProbeAllocator<T> {
    state: Rc<ProbeState>,
    heap: DefaultAllocator<T>,
}

impl<T> ProbeAllocator<T> {
    /// Creates a probe with fresh counters and no injected failures.
    pub fn new() -> Self {
        Self {
            state: Rc::new(ProbeState::default()),
            heap: DefaultAllocator::new(),
        }
    }

    /// Changes the failure behaviour of this probe and every clone of it.
    pub fn change_behaviour(&self, behaviour: ProbeBehaviour) {
        if let ProbeBehaviour::FailAtAllocation(n) = behaviour {
            self.state.countdown.set(n.max(1));
        }
        self.state.behaviour.set(behaviour);
    }

    /// Returns the current failure behaviour.
    pub fn behaviour(&self) -> ProbeBehaviour {
        self.state.behaviour.get()
    }

    /// Returns a snapshot of the shared counters.
    pub fn stats(&self) -> ProbeStats {
        self.state.stats.get()
    }
}

impl<T> Allocator<T> for ProbeAllocator<T> {
    type Rebind<U> = ProbeAllocator<U>;

    fn rebind<U>(&self) -> ProbeAllocator<U> {
        ProbeAllocator {
            state: Rc::clone(&self.state),
            heap: DefaultAllocator::new(),
        }
    }

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let max = self.max_size();
        if n > max {
            return Err(AllocError::ExceedsMaxSize { requested: n, max });
        }

        let bytes = n * core::mem::size_of::<T>();
        if bytes == 0 {
            return self.heap.allocate(n);
        }

        if self.state.should_fail() {
            self.state.update(|s| s.failures += 1);
            return Err(AllocError::Exhausted { bytes });
        }

        let ptr = self.heap.allocate(n)?;
        self.state.update(|s| {
            s.allocations += 1;
            s.live_blocks += 1;
            s.live_bytes += bytes;
        });

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: *mut T, n: usize) {
        let bytes = n * core::mem::size_of::<T>();
        if ptr.is_null() || bytes == 0 {
            return;
        }

        // SAFETY: forwarded caller contract; blocks come from `self.heap`.
        unsafe { self.heap.deallocate(ptr, n) };

        self.state.update(|s| {
            s.deallocations += 1;
            s.live_blocks -= 1;
            s.live_bytes -= bytes;
        });
    }
}

impl<T> Clone for ProbeAllocator<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            heap: DefaultAllocator::new(),
        }
    }
}

impl<T> Default for ProbeAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for ProbeAllocator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProbeAllocator")
            .field("behaviour", &self.behaviour())
            .field("stats", &self.stats())
            .finish()
    }
}

impl<T, U> PartialEq<ProbeAllocator<U>> for ProbeAllocator<T> {
    fn eq(&self, other: &ProbeAllocator<U>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Eq for ProbeAllocator<T> {}
