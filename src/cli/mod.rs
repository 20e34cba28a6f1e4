// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the listcraft command-line interface.
//!
//! Two subcommands, `array` and `list`, each replaying a script of operation
//! tokens against a fresh structure and printing what is left. The first
//! failing operation aborts the replay; nothing after it runs.

pub mod display;

use std::fmt;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use listcraft::{DynamicArray, SinglyLinkedList};

#[derive(Parser)]
#[command(
    name = "listcraft",
    about = "Replay list operations and print the resulting structure",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay operations against a growable array list
    ///
    /// Accepted tokens: add:V, add-at:I:V, remove:V, remove-at:I, set:I:V,
    /// clear, reverse, trim
    Array {
        /// Initial capacity (default 10; negative values are rejected)
        #[arg(short, long, allow_negative_numbers = true)]
        capacity: Option<isize>,

        /// Print the final contents as JSON instead of the pretty-print
        #[arg(long)]
        json: bool,

        /// Operation tokens, applied left to right
        #[arg(value_parser = parse_op)]
        ops: Vec<Op>,
    },

    /// Replay operations against a singly linked list
    ///
    /// Accepted tokens: push:V, append:V, before:I:V, after:I:V, remove:V,
    /// remove-at:I, set:I:V, clear
    List {
        /// Print the final contents as JSON instead of the pretty-print
        #[arg(long)]
        json: bool,

        /// Operation tokens, applied left to right
        #[arg(value_parser = parse_op)]
        ops: Vec<Op>,
    },
}

/// One scripted operation. Values are `i64`, indices `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    AddAt(usize, i64),
    Remove(i64),
    RemoveAt(usize),
    Set(usize, i64),
    Clear,
    Reverse,
    Trim,
    Push(i64),
    Append(i64),
    Before(usize, i64),
    After(usize, i64),
}

/// Which structure a script runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Array,
    List,
}

impl Op {
    /// Whether the operation exists on `target`.
    pub fn supported_by(self, target: Target) -> bool {
        match self {
            Op::Remove(_) | Op::RemoveAt(_) | Op::Set(..) | Op::Clear => true,
            Op::Add(_) | Op::AddAt(..) | Op::Reverse | Op::Trim => target == Target::Array,
            Op::Push(_) | Op::Append(_) | Op::Before(..) | Op::After(..) => {
                target == Target::List
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add(v) => write!(f, "add:{}", v),
            Op::AddAt(i, v) => write!(f, "add-at:{}:{}", i, v),
            Op::Remove(v) => write!(f, "remove:{}", v),
            Op::RemoveAt(i) => write!(f, "remove-at:{}", i),
            Op::Set(i, v) => write!(f, "set:{}:{}", i, v),
            Op::Clear => write!(f, "clear"),
            Op::Reverse => write!(f, "reverse"),
            Op::Trim => write!(f, "trim"),
            Op::Push(v) => write!(f, "push:{}", v),
            Op::Append(v) => write!(f, "append:{}", v),
            Op::Before(i, v) => write!(f, "before:{}:{}", i, v),
            Op::After(i, v) => write!(f, "after:{}:{}", i, v),
        }
    }
}

/// Parse a token such as `add-at:2:15` into an [`Op`].
pub fn parse_op(token: &str) -> std::result::Result<Op, String> {
    let mut parts = token.split(':');
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let index = |raw: &str| {
        raw.parse::<usize>()
            .map_err(|_| format!("invalid index '{}' in '{}'", raw, token))
    };
    let value = |raw: &str| {
        raw.parse::<i64>()
            .map_err(|_| format!("invalid value '{}' in '{}'", raw, token))
    };

    let op = match (name, args.as_slice()) {
        ("add", &[v]) => Op::Add(value(v)?),
        ("add-at", &[i, v]) => Op::AddAt(index(i)?, value(v)?),
        ("remove", &[v]) => Op::Remove(value(v)?),
        ("remove-at", &[i]) => Op::RemoveAt(index(i)?),
        ("set", &[i, v]) => Op::Set(index(i)?, value(v)?),
        ("clear", &[]) => Op::Clear,
        ("reverse", &[]) => Op::Reverse,
        ("trim", &[]) => Op::Trim,
        ("push", &[v]) => Op::Push(value(v)?),
        ("append", &[v]) => Op::Append(value(v)?),
        ("before", &[i, v]) => Op::Before(index(i)?, value(v)?),
        ("after", &[i, v]) => Op::After(index(i)?, value(v)?),
        _ => return Err(format!("unknown operation '{}'", token)),
    };
    Ok(op)
}

fn check_supported(ops: &[Op], target: Target) -> Result<()> {
    if let Some(op) = ops.iter().find(|op| !op.supported_by(target)) {
        let name = match target {
            Target::Array => "array",
            Target::List => "list",
        };
        bail!("operation '{}' is not available on {}", op, name);
    }
    Ok(())
}

/// Run `ops` against a new array. `on_step` sees every operation that ran.
pub fn replay_array(
    capacity: Option<isize>,
    ops: &[Op],
    mut on_step: impl FnMut(&Op),
) -> Result<DynamicArray<i64>> {
    check_supported(ops, Target::Array)?;

    let mut array = match capacity {
        Some(capacity) => DynamicArray::with_capacity(capacity)?,
        None => DynamicArray::new(),
    };

    for (step, op) in ops.iter().enumerate() {
        match *op {
            Op::Add(v) => array.add(v),
            Op::AddAt(i, v) => array.add_at(i, v).with_context(|| failed(step, op))?,
            Op::Remove(v) => {
                array.remove(&v);
            }
            Op::RemoveAt(i) => array.remove_at(i).map(drop).with_context(|| failed(step, op))?,
            Op::Set(i, v) => array.set(i, v).map(drop).with_context(|| failed(step, op))?,
            Op::Clear => array.remove_all(),
            Op::Reverse => array.reverse_in_place(),
            Op::Trim => array.trim_to_size(),
            Op::Push(_) | Op::Append(_) | Op::Before(..) | Op::After(..) => {
                bail!("operation '{}' is not available on array", op)
            }
        }
        on_step(op);
    }

    Ok(array)
}

/// Run `ops` against a new linked list.
pub fn replay_list(ops: &[Op], mut on_step: impl FnMut(&Op)) -> Result<SinglyLinkedList<i64>> {
    check_supported(ops, Target::List)?;

    let mut list = SinglyLinkedList::new();
    for (step, op) in ops.iter().enumerate() {
        match *op {
            Op::Push(v) => list.push(v),
            Op::Append(v) => list.append(v),
            Op::Before(i, v) => list.add_before(i, v).with_context(|| failed(step, op))?,
            Op::After(i, v) => list.add_after(i, v).with_context(|| failed(step, op))?,
            Op::Remove(v) => {
                list.remove(&v);
            }
            Op::RemoveAt(i) => list.remove_at(i).map(drop).with_context(|| failed(step, op))?,
            Op::Set(i, v) => list.set(i, v).map(drop).with_context(|| failed(step, op))?,
            Op::Clear => list.clear(),
            Op::Add(_) | Op::AddAt(..) | Op::Reverse | Op::Trim => {
                bail!("operation '{}' is not available on list", op)
            }
        }
        on_step(op);
    }

    Ok(list)
}

fn failed(step: usize, op: &Op) -> String {
    format!("operation {} ('{}') failed", step + 1, op)
}
