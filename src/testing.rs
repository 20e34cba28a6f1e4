//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::{DynamicArray, SinglyLinkedList};

/// Seven values, fits the default capacity.
pub const SMALL_VALUES: [i32; 7] = [4, -45, -90, 180, 7998, 8, 988];

/// Thirteen values, forces one growth from the default capacity.
pub const LARGE_VALUES: [i32; 13] = [
    4, 5, 10, 15, -99, 0, -190, -1949, 41414, 444, 5155, 1515, 15,
];

/// Build an array by appending `values` one at a time.
///
/// This is the canonical implementation used across all tests.
pub fn array_of(values: &[i32]) -> DynamicArray<i32> {
    let mut array = DynamicArray::new();
    for &value in values {
        array.add(value);
    }
    array
}

/// Build a linked list by appending `values` one at a time.
pub fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
    let mut list = SinglyLinkedList::new();
    for &value in values {
        list.append(value);
    }
    list
}

/// A value guaranteed to be absent from both fixture sets.
pub fn missing_value() -> i32 {
    9999
}
