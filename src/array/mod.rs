// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable array list backed by an explicitly managed slot buffer.
//!
//! The buffer is a boxed slice of `Option<T>`: slots `[0, len)` hold values,
//! slots `[len, capacity)` are `None`. Appending into a full buffer allocates
//! a new slice of twice the size and moves every value across, so `add` is
//! amortized O(1) while the capacity the caller sees is exactly the length
//! of that slice.
//!
//! # Layout
//!
//! ```text
//!   len = 3, capacity = 6
//! ┌──────┬──────┬──────┬──────┬──────┬──────┐
//! │ Some │ Some │ Some │ None │ None │ None │
//! └──────┴──────┴──────┴──────┴──────┴──────┘
//!   live ─────────────▶ cleared ───────────▶
//! ```
//!
//! # Index ranges
//!
//! Every indexed operation, including [`DynamicArray::add_at`], accepts only
//! `index < len`. Inserting at `len` through `add_at` is rejected; use
//! [`DynamicArray::add`] to append.

mod traits;

pub use traits::{IntoIter, Iter};

use std::fmt::Display;
use std::io::{self, Write};

use crate::contracts;
use crate::error::{ListError, Result};

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity a zero-capacity array grows to on its first append.
pub const MIN_GROWTH_CAPACITY: usize = 4;

/// A contiguous, resizable list.
///
/// `Clone` copies the slot buffer as-is, so a clone keeps the source's
/// capacity. Equality and hashing look at live elements only.
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicArray<T> {
    /// Create an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// Returns [`ListError::InvalidCapacity`] for a negative request. A
    /// capacity of zero is allowed; the first `add` then grows the buffer
    /// to [`MIN_GROWTH_CAPACITY`].
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| ListError::InvalidCapacity {
            requested: capacity,
        })?;

        Ok(Self {
            slots: empty_slots(capacity),
            len: 0,
        })
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the array can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append `value` at the end, growing the buffer if it is full.
    pub fn add(&mut self, value: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(value);
        self.len += 1;
        self.check_invariants();
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Valid only for `index < len`. On error nothing changes, not even the
    /// capacity.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        ListError::check_index(index, self.len)?;

        self.ensure_capacity();
        // slots[len] is None, so rotating it to the front opens the gap
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;

        self.check_invariants();
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        ListError::check_index(index, self.len)?;

        let Some(removed) = self.slots[index].take() else {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        };
        // The emptied slot travels to len - 1, which becomes the cleared tail
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        self.check_invariants();
        Ok(removed)
    }

    /// Drop every element. Capacity is unchanged.
    pub fn remove_all(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
        self.check_invariants();
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        match self.slots[..self.len].get(index) {
            Some(Some(value)) => Ok(value),
            _ => Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        match self.slots[..len].get_mut(index) {
            Some(Some(current)) => Ok(std::mem::replace(current, value)),
            _ => Err(ListError::IndexOutOfRange { index, len }),
        }
    }

    /// Grow the buffer if it is full. Calling it again without an
    /// intervening append is a no-op.
    pub fn ensure_capacity(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    /// Shrink capacity to exactly `len`.
    ///
    /// An empty array keeps its buffer so the next `add` does not have to
    /// grow from zero.
    pub fn trim_to_size(&mut self) {
        if self.len != 0 && self.len < self.capacity() {
            self.reallocate(self.len);
            self.check_invariants();
        }
    }

    /// Reverse the live elements in place by swapping from both ends.
    pub fn reverse_in_place(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut start = 0;
        let mut end = self.len - 1;
        while start < end {
            self.slots.swap(start, end);
            start += 1;
            end -= 1;
        }
    }

    /// Iterate over live elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    fn grow(&mut self) {
        let old = self.capacity();
        let new = if old == 0 {
            MIN_GROWTH_CAPACITY
        } else {
            old * 2
        };

        self.reallocate(new);
        contracts::check_growth(old, self.capacity());
    }

    /// Move the live elements into a freshly allocated buffer of `capacity`
    /// slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);

        let mut resized: Vec<Option<T>> = Vec::with_capacity(capacity);
        resized.extend(self.slots[..self.len].iter_mut().map(Option::take));
        resized.resize_with(capacity, || None);
        self.slots = resized.into_boxed_slice();
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        contracts::check_array_well_formed(self.len, &self.slots);
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`. Returns whether one was
    /// found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Build an array from `items`, starting at [`DEFAULT_CAPACITY`] and
    /// growing as needed.
    pub fn from_slice(items: &[T]) -> Self {
        let mut array = Self::new();
        for item in items {
            array.add(item.clone());
        }
        array
    }

    /// Copy the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Display> DynamicArray<T> {
    /// Write size, capacity, and contents to `out`.
    ///
    /// ```text
    /// Size: 3
    /// Capacity: 10
    /// [1, 2, 3]
    /// ```
    pub fn pretty_print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Size: {}", self.len)?;
        writeln!(out, "Capacity: {}", self.capacity())?;

        if self.is_empty() {
            writeln!(out, "List is empty.")
        } else {
            writeln!(out, "{}", self)
        }
    }
}
