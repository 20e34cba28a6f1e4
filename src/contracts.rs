// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the list invariants.
//!
//! This module provides debug-mode assertions that verify the structural
//! invariants of [`DynamicArray`](crate::DynamicArray) and
//! [`SinglyLinkedList`](crate::SinglyLinkedList). These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Run at the end of every mutating operation in debug builds
//! 3. Are public so property tests can call them on arbitrary states
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Invariant                                        |
//! |-----------------------------|--------------------------------------------------|
//! | `check_array_well_formed`   | `len <= capacity`, live prefix, cleared tail     |
//! | `check_growth`              | capacity doubles (or jumps to the minimum)       |
//! | `check_list_len`            | node count reachable from head equals `len`      |
//!
//! # Usage
//!
//! ```ignore
//! use listcraft::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_array_well_formed(len, &slots);
//!
//! // In release builds, this is a no-op
//! ```

use crate::array::{DEFAULT_CAPACITY, MIN_GROWTH_CAPACITY};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Growth from an empty buffer must make room for at least one element,
/// otherwise `add` on a zero-capacity array would loop forever.
const _: () = {
    assert!(MIN_GROWTH_CAPACITY > 0);
    assert!(DEFAULT_CAPACITY > 0);
};

// ============================================================================
// DYNAMIC ARRAY CONTRACTS
// ============================================================================

/// Check that an array's slot buffer agrees with its length.
///
/// # Panics (debug builds only)
/// Panics if `len > slots.len()`, if a slot in `[0, len)` is empty, or if a
/// slot in `[len, capacity)` still holds a value.
#[inline]
pub fn check_array_well_formed<T>(len: usize, slots: &[Option<T>]) {
    debug_assert!(
        len <= slots.len(),
        "Contract violation: DynamicArray.WellFormed - len {} > capacity {}",
        len,
        slots.len()
    );

    for (i, slot) in slots.iter().enumerate() {
        if i < len {
            debug_assert!(
                slot.is_some(),
                "Contract violation: DynamicArray.WellFormed - live slot {} is empty (len {})",
                i,
                len
            );
        } else {
            debug_assert!(
                slot.is_none(),
                "Contract violation: DynamicArray.WellFormed - slot {} past len {} not cleared",
                i,
                len
            );
        }
    }
}

/// Check that a growth step followed the doubling rule.
///
/// # Panics (debug builds only)
/// Panics if `new` is neither `2 * old` nor `MIN_GROWTH_CAPACITY` for an
/// empty buffer.
#[inline]
pub fn check_growth(old: usize, new: usize) {
    let expected = if old == 0 {
        MIN_GROWTH_CAPACITY
    } else {
        old * 2
    };

    debug_assert_eq!(
        new, expected,
        "Contract violation: DynamicArray.Growth - capacity {} grew to {}, expected {}",
        old, new, expected
    );
}

// ============================================================================
// LINKED LIST CONTRACTS
// ============================================================================

/// Check that the cached length matches the number of reachable nodes.
///
/// # Panics (debug builds only)
/// Panics if `len != counted`.
#[inline]
pub fn check_list_len(len: usize, counted: usize) {
    debug_assert_eq!(
        len, counted,
        "Contract violation: SinglyLinkedList.WellFormed - len {} but {} nodes reachable from head",
        len, counted
    );
}
