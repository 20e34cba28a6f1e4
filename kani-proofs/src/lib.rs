// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for listcraft's bookkeeping arithmetic.
//!
//! This standalone crate extracts the capacity growth rule, the index
//! check, and the slot shifts used by `DynamicArray`, and proves them
//! for every input Kani can construct.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Growth**: the next capacity is double the old one (or the minimum
//!    from zero), strictly larger, and never overflows below `usize::MAX / 2`
//! 2. **Index rule**: an index is accepted exactly when it is below `len`
//! 3. **Shifts**: inserting then removing at the same index restores the
//!    slots, and both keep the live prefix / empty tail layout

/// Capacity an empty buffer grows to (copied from src/array/mod.rs)
pub const MIN_GROWTH_CAPACITY: usize = 4;

// ============================================================================
// CAPACITY GROWTH (copied from src/array/mod.rs)
// ============================================================================

/// Capacity after one growth step.
pub fn grown_capacity(old: usize) -> usize {
    if old == 0 {
        MIN_GROWTH_CAPACITY
    } else {
        old * 2
    }
}

/// Capacity after `ensure_capacity` with `len` live elements.
pub fn ensured_capacity(len: usize, capacity: usize) -> usize {
    if len == capacity {
        grown_capacity(capacity)
    } else {
        capacity
    }
}

// ============================================================================
// INDEX RULE (copied from src/error.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Accept `index` only inside the live range.
pub fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfRange> {
    if index < len {
        Ok(())
    } else {
        Err(IndexOutOfRange { index, len })
    }
}

// ============================================================================
// SLOT SHIFTS (copied from src/array/mod.rs)
// ============================================================================

/// Open a gap at `index` and fill it. Requires `len < slots.len()`.
pub fn insert_slot(slots: &mut [Option<u8>], len: usize, index: usize, value: u8) {
    slots[index..=len].rotate_right(1);
    slots[index] = Some(value);
}

/// Take the value at `index` and close the gap.
pub fn remove_slot(slots: &mut [Option<u8>], len: usize, index: usize) -> Option<u8> {
    let removed = slots[index].take();
    slots[index..len].rotate_left(1);
    removed
}

/// Live prefix all `Some`, tail all `None`.
pub fn well_formed(slots: &[Option<u8>], len: usize) -> bool {
    len <= slots.len()
        && slots[..len].iter().all(Option::is_some)
        && slots[len..].iter().all(Option::is_none)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify growth is exact doubling and strictly increases capacity.
    #[kani::proof]
    fn verify_growth_doubles() {
        let old: usize = kani::any_where(|&c| c <= usize::MAX / 2);
        let new = grown_capacity(old);

        kani::assert(new > old, "growth must strictly increase capacity");
        if old == 0 {
            kani::assert(new == MIN_GROWTH_CAPACITY, "empty buffer grows to the minimum");
        } else {
            kani::assert(new == old * 2, "non-empty buffer doubles");
        }
    }

    /// Verify ensure_capacity leaves room for one more element and is
    /// idempotent until that element is added.
    #[kani::proof]
    fn verify_ensure_capacity_room_and_idempotence() {
        let capacity: usize = kani::any_where(|&c| c <= usize::MAX / 2);
        let len: usize = kani::any_where(|&l| l <= capacity);

        let once = ensured_capacity(len, capacity);
        kani::assert(once > len, "ensure_capacity must leave a free slot");
        kani::assert(
            ensured_capacity(len, once) == once,
            "second ensure_capacity must be a no-op",
        );
    }

    /// Verify the index rule accepts exactly 0..len and reports its inputs.
    #[kani::proof]
    fn verify_index_rule() {
        let index: usize = kani::any();
        let len: usize = kani::any();

        match check_index(index, len) {
            Ok(()) => kani::assert(index < len, "accepted index must be below len"),
            Err(e) => {
                kani::assert(index >= len, "rejected index must be at or past len");
                kani::assert(e.index == index && e.len == len, "error must echo inputs");
            }
        }
    }

    /// Verify insert then remove at the same index restores a small buffer.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_remove_roundtrip() {
        const CAP: usize = 4;
        let len: usize = kani::any_where(|&l| l < CAP);
        let index: usize = kani::any_where(|&i| i < len);
        let value: u8 = kani::any();

        let mut slots = [None; CAP];
        for slot in slots.iter_mut().take(len) {
            *slot = Some(kani::any());
        }
        let before = slots;

        insert_slot(&mut slots, len, index, value);
        kani::assert(well_formed(&slots, len + 1), "insert keeps the layout");
        kani::assert(slots[index] == Some(value), "inserted value lands at index");

        let removed = remove_slot(&mut slots, len + 1, index);
        kani::assert(removed == Some(value), "remove returns the inserted value");
        kani::assert(slots == before, "insert then remove is the identity");
    }
}
