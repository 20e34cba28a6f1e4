// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two textbook dynamic lists with checked indexing.
//!
//! This crate provides a growable array list and a singly linked list that
//! share one operation vocabulary (add, remove, get, set, contains, index_of)
//! and one error type. Neither depends on the other.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────────┐
//! │     array/       │          │       linked/        │
//! │  (DynamicArray,  │          │  (SinglyLinkedList,  │
//! │   slot buffer)   │          │   owned node chain)  │
//! └──────────────────┘          └──────────────────────┘
//!          │                               │
//!          ▼                               ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          error.rs  (ListError, Result)              │
//! │          contracts.rs  (debug invariant checks)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Index rules
//!
//! | Operation                          | Valid indices |
//! |------------------------------------|---------------|
//! | `get`, `set`, `remove_at`          | `0..len`      |
//! | `DynamicArray::add_at`             | `0..len`      |
//! | `add_before`, `add_after`          | `0..len`      |
//!
//! Insertion at `len` through `add_at` or `add_before` is rejected. Use
//! `add` or `append` to extend the tail.
//!
//! # Usage
//!
//! ```
//! use listcraft::{DynamicArray, ListError, SinglyLinkedList};
//!
//! let mut array = DynamicArray::with_capacity(2)?;
//! array.add(1);
//! array.add(2);
//! array.add(3);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.index_of(&3), Some(2));
//!
//! let mut list = SinglyLinkedList::new();
//! list.append(1);
//! list.push(0);
//! assert_eq!(list.first(), Some(&0));
//! assert_eq!(list.get(5), Err(ListError::IndexOutOfRange { index: 5, len: 2 }));
//! # Ok::<(), ListError>(())
//! ```

// Module declarations
pub mod array;
pub mod contracts;
mod error;
pub mod linked;
pub mod testing;

// Re-exports for public API
pub use array::{DynamicArray, DEFAULT_CAPACITY, MIN_GROWTH_CAPACITY};
pub use error::{ListError, Result};
pub use linked::SinglyLinkedList;
