//! Differential testing: replay random scripts against the real structures
//! and against the `Vec` oracles. If they disagree, the oracle is right.

use super::oracles::{
    oracle_add_after, oracle_add_before, oracle_index_of, ArrayOracle,
};
use super::{array_op_strategy, list_op_strategy, ArrayOp, ListOp};
use listcraft::{DynamicArray, SinglyLinkedList};
use proptest::prelude::*;

// =============================================================================
// DYNAMIC ARRAY vs ORACLE
// =============================================================================

fn apply_array(array: &mut DynamicArray<i32>, oracle: &mut ArrayOracle, op: &ArrayOp) {
    match *op {
        ArrayOp::Add(v) => {
            array.add(v);
            oracle.add(v);
        }
        ArrayOp::AddAt(i, v) => {
            let accepted = oracle.add_at(i, v);
            assert_eq!(array.add_at(i, v).is_ok(), accepted, "{:?}", op);
        }
        ArrayOp::RemoveAt(i) => {
            assert_eq!(array.remove_at(i).ok(), oracle.remove_at(i), "{:?}", op);
        }
        ArrayOp::Remove(v) => {
            assert_eq!(array.remove(&v), oracle.remove(v), "{:?}", op);
        }
        ArrayOp::Set(i, v) => {
            assert_eq!(array.set(i, v).ok(), oracle.set(i, v), "{:?}", op);
        }
        ArrayOp::RemoveAll => {
            array.remove_all();
            oracle.items.clear();
        }
        ArrayOp::EnsureCapacity => {
            array.ensure_capacity();
            oracle.ensure_capacity();
        }
        ArrayOp::Trim => {
            array.trim_to_size();
            oracle.trim();
        }
        ArrayOp::Reverse => {
            array.reverse_in_place();
            oracle.items.reverse();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: every step leaves the array equal to the oracle,
    /// capacity included.
    #[test]
    fn diff_array_scripts(
        initial in 0usize..6,
        script in prop::collection::vec(array_op_strategy(), 0..80),
    ) {
        let mut array = DynamicArray::with_capacity(initial as isize).unwrap();
        let mut oracle = ArrayOracle::with_capacity(initial);

        for op in &script {
            apply_array(&mut array, &mut oracle, op);

            prop_assert_eq!(array.to_vec(), oracle.items.clone(), "after {:?}", op);
            prop_assert_eq!(array.capacity(), oracle.capacity, "after {:?}", op);
            prop_assert!(array.capacity() >= array.len());
        }
    }

    /// Differential test: searches agree with a linear scan over the oracle.
    #[test]
    fn diff_array_search(
        script in prop::collection::vec(array_op_strategy(), 0..40),
        probe in super::value_strategy(),
    ) {
        let mut array = DynamicArray::new();
        let mut oracle = ArrayOracle::new();
        for op in &script {
            apply_array(&mut array, &mut oracle, op);
        }

        prop_assert_eq!(array.index_of(&probe), oracle_index_of(&oracle.items, probe));
        prop_assert_eq!(array.contains(&probe), oracle.items.contains(&probe));
    }
}

// =============================================================================
// LINKED LIST vs ORACLE
// =============================================================================

fn apply_list(list: &mut SinglyLinkedList<i32>, oracle: &mut Vec<i32>, op: &ListOp) {
    match *op {
        ListOp::Append(v) => {
            list.append(v);
            oracle.push(v);
        }
        ListOp::Push(v) => {
            list.push(v);
            oracle.insert(0, v);
        }
        ListOp::AddBefore(i, v) => {
            let accepted = oracle_add_before(oracle, i, v);
            assert_eq!(list.add_before(i, v).is_ok(), accepted, "{:?}", op);
        }
        ListOp::AddAfter(i, v) => {
            let accepted = oracle_add_after(oracle, i, v);
            assert_eq!(list.add_after(i, v).is_ok(), accepted, "{:?}", op);
        }
        ListOp::RemoveAt(i) => {
            let expected = (i < oracle.len()).then(|| oracle.remove(i));
            assert_eq!(list.remove_at(i).ok(), expected, "{:?}", op);
        }
        ListOp::Remove(v) => {
            let expected = match oracle_index_of(oracle, v) {
                Some(index) => {
                    oracle.remove(index);
                    true
                }
                None => false,
            };
            assert_eq!(list.remove(&v), expected, "{:?}", op);
        }
        ListOp::Set(i, v) => {
            let expected = oracle.get_mut(i).map(|slot| std::mem::replace(slot, v));
            assert_eq!(list.set(i, v).ok(), expected, "{:?}", op);
        }
        ListOp::Clear => {
            list.clear();
            oracle.clear();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: every step leaves the list equal to the oracle.
    #[test]
    fn diff_list_scripts(script in prop::collection::vec(list_op_strategy(), 0..80)) {
        let mut list = SinglyLinkedList::new();
        let mut oracle = Vec::new();

        for op in &script {
            apply_list(&mut list, &mut oracle, op);

            prop_assert_eq!(list.to_vec(), oracle.clone(), "after {:?}", op);
            prop_assert_eq!(list.len(), oracle.len());
            prop_assert_eq!(list.first(), oracle.first());
            prop_assert_eq!(list.last(), oracle.last());
        }
    }

    /// Differential test: list searches agree with a linear scan.
    #[test]
    fn diff_list_search(
        script in prop::collection::vec(list_op_strategy(), 0..40),
        probe in super::value_strategy(),
    ) {
        let mut list = SinglyLinkedList::new();
        let mut oracle = Vec::new();
        for op in &script {
            apply_list(&mut list, &mut oracle, op);
        }

        prop_assert_eq!(list.index_of(&probe), oracle_index_of(&oracle, probe));
        prop_assert_eq!(list.contains(&probe), oracle.contains(&probe));
    }
}
