// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for SinglyLinkedList operation scripts.
//!
//! Splices and unlinks are the easy place to lose a node or a count. The
//! list must match a `Vec` after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listcraft::SinglyLinkedList;

#[derive(Arbitrary, Debug)]
enum Op {
    Append(i16),
    Push(i16),
    AddBefore(u8, i16),
    AddAfter(u8, i16),
    RemoveAt(u8),
    Remove(i16),
    Set(u8, i16),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut list = SinglyLinkedList::new();
    let mut oracle: Vec<i16> = Vec::new();

    for op in ops.iter().take(512) {
        match *op {
            Op::Append(v) => {
                list.append(v);
                oracle.push(v);
            }
            Op::Push(v) => {
                list.push(v);
                oracle.insert(0, v);
            }
            Op::AddBefore(i, v) => {
                let i = usize::from(i);
                let accepted = list.add_before(i, v).is_ok();
                assert_eq!(accepted, i < oracle.len());
                if accepted {
                    oracle.insert(i, v);
                }
            }
            Op::AddAfter(i, v) => {
                let i = usize::from(i);
                let accepted = list.add_after(i, v).is_ok();
                assert_eq!(accepted, i < oracle.len());
                if accepted {
                    oracle.insert(i + 1, v);
                }
            }
            Op::RemoveAt(i) => {
                let i = usize::from(i);
                let expected = (i < oracle.len()).then(|| oracle.remove(i));
                assert_eq!(list.remove_at(i).ok(), expected);
            }
            Op::Remove(v) => {
                let expected = match oracle.iter().position(|&x| x == v) {
                    Some(index) => {
                        oracle.remove(index);
                        true
                    }
                    None => false,
                };
                assert_eq!(list.remove(&v), expected);
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                let expected = oracle.get_mut(i).map(|slot| std::mem::replace(slot, v));
                assert_eq!(list.set(i, v).ok(), expected);
            }
            Op::Clear => {
                list.clear();
                oracle.clear();
            }
        }

        assert_eq!(list.len(), oracle.len(), "after {:?}", op);
        assert_eq!(list.first(), oracle.first());
        assert!(list.iter().eq(oracle.iter()), "contents diverged after {:?}", op);
    }
});
