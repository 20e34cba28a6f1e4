// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the list types.
//!
//! Both variants are precondition violations the caller can correct. Nothing
//! in this crate retries or swallows them, and an operation that fails has
//! not mutated its container.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ListError>;

/// Error type for rejected list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A negative initial capacity was requested.
    InvalidCapacity { requested: isize },
    /// An index fell outside `0..len` for the operation.
    IndexOutOfRange { index: usize, len: usize },
}

impl ListError {
    /// Bounds check shared by every indexed operation: valid iff `index < len`.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange { index, len })
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidCapacity { requested } => {
                write!(f, "capacity must be non-negative, got {}", requested)
            }
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for ListError {}
