// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for DynamicArray operation scripts.
//!
//! Every index-taking call is either accepted and mirrored by a `Vec`, or
//! rejected with no change at all. Capacity must follow the doubling rule.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listcraft::{DynamicArray, MIN_GROWTH_CAPACITY};

#[derive(Arbitrary, Debug)]
enum Op {
    Add(i16),
    AddAt(u8, i16),
    RemoveAt(u8),
    Remove(i16),
    Set(u8, i16),
    RemoveAll,
    EnsureCapacity,
    Trim,
    Reverse,
}

#[derive(Arbitrary, Debug)]
struct Script {
    initial: u8,
    ops: Vec<Op>,
}

fn grown(capacity: usize) -> usize {
    if capacity == 0 {
        MIN_GROWTH_CAPACITY
    } else {
        capacity * 2
    }
}

fuzz_target!(|script: Script| {
    let initial = usize::from(script.initial % 16);
    let mut array = DynamicArray::with_capacity(initial as isize)
        .expect("non-negative capacity is always accepted");
    let mut oracle: Vec<i16> = Vec::new();
    let mut capacity = initial;

    for op in script.ops.iter().take(512) {
        match *op {
            Op::Add(v) => {
                if oracle.len() == capacity {
                    capacity = grown(capacity);
                }
                array.add(v);
                oracle.push(v);
            }
            Op::AddAt(i, v) => {
                let i = usize::from(i);
                let accepted = array.add_at(i, v).is_ok();
                assert_eq!(accepted, i < oracle.len(), "add_at({}) on len {}", i, oracle.len());
                if accepted {
                    if oracle.len() == capacity {
                        capacity = grown(capacity);
                    }
                    oracle.insert(i, v);
                }
            }
            Op::RemoveAt(i) => {
                let i = usize::from(i);
                let expected = (i < oracle.len()).then(|| oracle.remove(i));
                assert_eq!(array.remove_at(i).ok(), expected);
            }
            Op::Remove(v) => {
                let expected = match oracle.iter().position(|&x| x == v) {
                    Some(index) => {
                        oracle.remove(index);
                        true
                    }
                    None => false,
                };
                assert_eq!(array.remove(&v), expected);
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                let expected = oracle.get_mut(i).map(|slot| std::mem::replace(slot, v));
                assert_eq!(array.set(i, v).ok(), expected);
            }
            Op::RemoveAll => {
                array.remove_all();
                oracle.clear();
            }
            Op::EnsureCapacity => {
                if oracle.len() == capacity {
                    capacity = grown(capacity);
                }
                array.ensure_capacity();
            }
            Op::Trim => {
                if !oracle.is_empty() {
                    capacity = oracle.len();
                }
                array.trim_to_size();
            }
            Op::Reverse => {
                array.reverse_in_place();
                oracle.reverse();
            }
        }

        assert_eq!(array.len(), oracle.len());
        assert_eq!(array.capacity(), capacity, "after {:?}", op);
        assert!(array.iter().eq(oracle.iter()), "contents diverged after {:?}", op);
    }
});
