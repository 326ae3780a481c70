// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use crate::{AllocError, Allocator, DefaultAllocator, max_size_of};

// =============================================================================
// max_size()
// =============================================================================

#[test]
fn test_max_size_scales_with_element_size() {
    assert_eq!(DefaultAllocator::<u8>::new().max_size(), isize::MAX as usize);
    assert_eq!(
        DefaultAllocator::<u32>::new().max_size(),
        isize::MAX as usize / 4
    );
    assert_eq!(
        DefaultAllocator::<[u64; 4]>::new().max_size(),
        max_size_of::<[u64; 4]>()
    );
}

#[test]
fn test_max_size_zero_sized_type() {
    assert_eq!(DefaultAllocator::<()>::new().max_size(), isize::MAX as usize);
}

// =============================================================================
// allocate() / deallocate()
// =============================================================================

#[test]
fn test_allocate_construct_destroy_deallocate() {
    let alloc = DefaultAllocator::<String>::new();
    let block = alloc.allocate(3).expect("Failed to allocate(3)");

    unsafe {
        for i in 0..3 {
            alloc.construct(block.add(i), format!("s{i}"));
        }

        assert_eq!(&*block.as_ptr().add(2), "s2");

        for i in 0..3 {
            alloc.destroy(block.add(i));
        }
        alloc.deallocate(block.as_ptr(), 3);
    }
}

#[test]
fn test_allocate_zero_returns_dangling() {
    let alloc = DefaultAllocator::<u64>::new();
    let block = alloc.allocate(0).expect("Failed to allocate(0)");

    assert_eq!(block, NonNull::dangling());

    // Releasing a zero-sized block is a no-op.
    unsafe { alloc.deallocate(block.as_ptr(), 0) };
}

#[test]
fn test_allocate_zero_sized_type_never_touches_heap() {
    let alloc = DefaultAllocator::<()>::new();
    let block = alloc.allocate(1_000_000).expect("Failed to allocate ZSTs");

    assert_eq!(block, NonNull::dangling());
    unsafe { alloc.deallocate(block.as_ptr(), 1_000_000) };
}

#[test]
fn test_allocate_above_max_size_fails() {
    let alloc = DefaultAllocator::<u32>::new();
    let max = alloc.max_size();

    let result = alloc.allocate(max + 1);

    assert_eq!(
        result,
        Err(AllocError::ExceedsMaxSize {
            requested: max + 1,
            max
        })
    );
}

#[test]
fn test_allocate_usize_max_fails() {
    let alloc = DefaultAllocator::<u8>::new();

    assert!(matches!(
        alloc.allocate(usize::MAX),
        Err(AllocError::ExceedsMaxSize { .. })
    ));
}

#[test]
fn test_deallocate_null_is_noop() {
    let alloc = DefaultAllocator::<u32>::new();

    unsafe { alloc.deallocate(core::ptr::null_mut(), 16) };
}

// =============================================================================
// construct_with()
// =============================================================================

#[test]
fn test_construct_with_panic_leaves_slot_uninitialized() {
    let alloc = DefaultAllocator::<Vec<u8>>::new();
    let block = alloc.allocate(1).expect("Failed to allocate(1)");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| unsafe {
        alloc.construct_with(block, || panic!("boom"));
    }));
    assert!(result.is_err());

    // The slot is still raw storage: it can be constructed and destroyed normally.
    unsafe {
        alloc.construct_with(block, || vec![1, 2, 3]);
        assert_eq!((*block.as_ptr()).len(), 3);
        alloc.destroy(block);
        alloc.deallocate(block.as_ptr(), 1);
    }
}

// =============================================================================
// rebind() / equality
// =============================================================================

#[test]
fn test_rebind_is_equal() {
    let ints = DefaultAllocator::<i32>::new();
    let strings: DefaultAllocator<String> = ints.rebind();

    assert!(ints == strings);
    assert_eq!(ints, DefaultAllocator::<i32>::default());
}

#[test]
fn test_rebound_allocator_releases_original_blocks() {
    let a = DefaultAllocator::<u16>::new();
    let b: DefaultAllocator<u16> = a.rebind::<u8>().rebind();

    let block = a.allocate(8).expect("Failed to allocate(8)");
    unsafe { b.deallocate(block.as_ptr(), 8) };
}

// =============================================================================
// AllocError
// =============================================================================

#[test]
fn test_error_messages() {
    let err = AllocError::ExceedsMaxSize {
        requested: 10,
        max: 5,
    };
    assert_eq!(
        err.to_string(),
        "allocate(10) exceeds maximum supported size 5"
    );

    let err = AllocError::Exhausted { bytes: 64 };
    assert_eq!(err.to_string(), "allocator could not provide 64 bytes");
}
