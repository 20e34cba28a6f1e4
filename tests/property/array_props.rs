//! DynamicArray invariants under random input.

use super::common::assert_array_matches;
use super::oracles::oracle_grown_capacity;
use super::{index_strategy, value_strategy, values_strategy};
use listcraft::DynamicArray;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: N appends give length N and never leave capacity below length.
    #[test]
    fn prop_add_tracks_length(values in values_strategy(64)) {
        let mut array = DynamicArray::new();
        for (n, &value) in values.iter().enumerate() {
            array.add(value);
            prop_assert_eq!(array.len(), n + 1);
            prop_assert!(array.capacity() >= array.len());
        }
        assert_array_matches(&array, &values);
    }

    /// Property: appending into a full buffer doubles it exactly, and only then.
    #[test]
    fn prop_growth_is_exact_doubling(initial in 0usize..8, appends in 1usize..40) {
        let mut array = DynamicArray::with_capacity(initial as isize).unwrap();
        for value in 0..appends {
            let before = array.capacity();
            let full = array.len() == before;
            array.add(value as i32);

            if full {
                prop_assert_eq!(array.capacity(), oracle_grown_capacity(before));
            } else {
                prop_assert_eq!(array.capacity(), before);
            }
        }
    }

    /// Property: a value never inserted is never found.
    #[test]
    fn prop_absent_values_not_found(values in values_strategy(32)) {
        let array = DynamicArray::from_slice(&values);
        let absent = 1000;
        prop_assert_eq!(array.index_of(&absent), None);
        prop_assert!(!array.contains(&absent));
    }

    /// Property: contains(v) exactly when index_of(v) is present, and the
    /// reported index really holds v.
    #[test]
    fn prop_contains_consistent_with_index_of(
        values in values_strategy(32),
        probe in value_strategy(),
    ) {
        let array = DynamicArray::from_slice(&values);
        let index = array.index_of(&probe);
        prop_assert_eq!(array.contains(&probe), index.is_some());
        if let Some(i) = index {
            prop_assert_eq!(array.get(i), Ok(&probe));
            prop_assert!(!values[..i].contains(&probe));
        }
    }

    /// Property: after remove_at(i), get(i) yields what was at i + 1.
    #[test]
    fn prop_remove_at_shifts_left(values in values_strategy(32), index in index_strategy()) {
        let mut array = DynamicArray::from_slice(&values);
        let before = array.len();

        match array.remove_at(index) {
            Ok(removed) => {
                prop_assert_eq!(removed, values[index]);
                prop_assert_eq!(array.len(), before - 1);
                if index + 1 < values.len() {
                    prop_assert_eq!(array.get(index), Ok(&values[index + 1]));
                }
            }
            Err(_) => {
                prop_assert!(index >= values.len());
                prop_assert_eq!(array.to_vec(), values);
            }
        }
    }

    /// Property: add_at(i) then remove_at(i) restores the original contents.
    #[test]
    fn prop_add_at_then_remove_at(
        values in values_strategy(32),
        index in index_strategy(),
        value in value_strategy(),
    ) {
        let mut array = DynamicArray::from_slice(&values);
        if array.add_at(index, value).is_ok() {
            prop_assert_eq!(array.get(index), Ok(&value));
            prop_assert_eq!(array.remove_at(index), Ok(value));
        }
        prop_assert_eq!(array.to_vec(), values);
    }

    /// Property: reversing twice is the identity.
    #[test]
    fn prop_reverse_is_involution(values in values_strategy(48)) {
        let mut array = DynamicArray::from_slice(&values);
        array.reverse_in_place();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(array.to_vec(), expected);

        array.reverse_in_place();
        prop_assert_eq!(array.to_vec(), values);
    }

    /// Property: remove_all empties without touching capacity.
    #[test]
    fn prop_remove_all_resets(values in values_strategy(48)) {
        let mut array = DynamicArray::from_slice(&values);
        let capacity = array.capacity();
        array.remove_all();
        prop_assert!(array.is_empty());
        prop_assert_eq!(array.capacity(), capacity);
    }

    /// Property: trimming never changes contents and pins capacity to length.
    #[test]
    fn prop_trim_preserves_contents(values in values_strategy(48)) {
        let mut array = DynamicArray::from_slice(&values);
        let capacity = array.capacity();
        array.trim_to_size();
        prop_assert_eq!(array.to_vec(), values.clone());
        if values.is_empty() {
            prop_assert_eq!(array.capacity(), capacity);
        } else {
            prop_assert_eq!(array.capacity(), values.len());
        }
    }

    /// Property: equality ignores how much spare room each side has.
    #[test]
    fn prop_equality_ignores_capacity(values in values_strategy(24), extra in 0usize..16) {
        let mut roomy = DynamicArray::with_capacity((values.len() + extra) as isize).unwrap();
        roomy.extend(values.iter().copied());
        let mut tight = DynamicArray::from_slice(&values);
        tight.trim_to_size();
        prop_assert_eq!(roomy, tight);
    }
}
