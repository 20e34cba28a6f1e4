// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Singly linked list with owned nodes and no tail pointer.
//!
//! Each node is owned by the link in front of it: the list owns the head,
//! every node owns its successor. Unlinking a node rewires the predecessor's
//! link to the removed node's `next` and drops the node on the spot, so
//! nothing ever points back into the chain.
//!
//! ```text
//!  head
//!   │
//!   ▼
//! ┌───┬──┐   ┌───┬──┐   ┌───┬────┐
//! │ 1 │ ─┼──▶│ 2 │ ─┼──▶│ 3 │None│
//! └───┴──┘   └───┴──┘   └───┴────┘
//! ```
//!
//! # Costs
//!
//! | Operation                       | Cost |
//! |---------------------------------|------|
//! | `push`, `first`                 | O(1) |
//! | `append`, `last`                | O(n) |
//! | indexed access and splicing     | O(n) |
//!
//! `append` walks to the tail every time. There is no cached tail.

mod traits;

pub use traits::{IntoIter, Iter};

use std::fmt::Display;
use std::io::{self, Write};

use crate::error::{ListError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// A chain of heap nodes reachable from `head`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Create a one-element list.
    pub fn with_head(value: T) -> Self {
        Self {
            head: Some(Node::boxed(value, None)),
            len: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link a new node after the current tail.
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value, None));

        self.len += 1;
        self.check_invariants();
    }

    /// Insert a new head node.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));

        self.len += 1;
        self.check_invariants();
    }

    /// Splice `value` in front of the node at `index`.
    ///
    /// Valid only for `index < len`; index 0 behaves like [`push`](Self::push).
    pub fn add_before(&mut self, index: usize, value: T) -> Result<()> {
        ListError::check_index(index, self.len)?;
        if index == 0 {
            self.push(value);
            return Ok(());
        }

        let len = self.len;
        // The link at `index` is the predecessor's `next`
        let link = self
            .link_at(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        let next = link.take();
        *link = Some(Node::boxed(value, next));

        self.len += 1;
        self.check_invariants();
        Ok(())
    }

    /// Splice `value` right after the node at `index`.
    pub fn add_after(&mut self, index: usize, value: T) -> Result<()> {
        ListError::check_index(index, self.len)?;

        let len = self.len;
        let node = self
            .node_at_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        let next = node.next.take();
        node.next = Some(Node::boxed(value, next));

        self.len += 1;
        self.check_invariants();
        Ok(())
    }

    /// Unlink and return the value at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        ListError::check_index(index, self.len)?;

        let len = self.len;
        let link = self
            .link_at(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        let Some(node) = link.take() else {
            return Err(ListError::IndexOutOfRange { index, len });
        };
        let Node { value, next } = *node;
        *link = next;

        self.len -= 1;
        self.check_invariants();
        Ok(value)
    }

    /// Drop the whole chain.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|node| &node.value)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replace the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        let node = self
            .node_at_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Value of the tail node. Walks the whole chain.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.head.as_deref()?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Some(&node.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Detach the head node and return its value.
    fn pop_head(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// The link that owns the node at `index`: `head` for 0, otherwise the
    /// `next` of node `index - 1`. `index == len` yields the empty tail link.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let mut counted = 0;
            let mut node = self.head.as_deref();
            while let Some(current) = node {
                counted += 1;
                node = current.next.as_deref();
            }
            crate::contracts::check_list_len(self.len, counted);
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Position of the first node holding `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Unlink the first node holding `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Copy the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Display> SinglyLinkedList<T> {
    /// Write the list to `out`.
    ///
    /// ```text
    /// Size -> 3
    /// Head -> 1, 2, 3
    /// ```
    pub fn pretty_print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "LinkedList is empty.");
        }

        writeln!(out, "Size -> {}", self.len)?;
        write!(out, "Head -> ")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", value)?;
        }
        writeln!(out)
    }
}

// Unlink one node at a time so long chains don't recurse through Box drops.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
