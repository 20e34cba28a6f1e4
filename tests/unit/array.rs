//! DynamicArray behavior through the public API.

use super::common::{
    array_of, assert_array_matches, missing_value, render_array, LARGE_VALUES, SMALL_VALUES,
};
use listcraft::{DynamicArray, ListError, DEFAULT_CAPACITY};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn empty_array_has_no_elements() {
    let array = DynamicArray::<i32>::new();
    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
}

#[test]
fn empty_array_has_default_capacity() {
    let array = DynamicArray::<i32>::new();
    assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    assert_eq!(array.capacity(), 10);
}

#[test]
fn requested_capacity_is_honored() {
    let array = DynamicArray::<i32>::with_capacity(200).unwrap();
    assert_eq!(array.capacity(), 200);
    assert!(array.is_empty());
}

#[test]
fn negative_capacity_is_rejected() {
    let err = DynamicArray::<i32>::with_capacity(-5).unwrap_err();
    assert_eq!(err, ListError::InvalidCapacity { requested: -5 });
    assert_eq!(err.to_string(), "capacity must be non-negative, got -5");
}

#[test]
fn clone_copies_length_and_contents() {
    let original = array_of(&LARGE_VALUES);
    let copy = original.clone();

    assert_eq!(copy.len(), LARGE_VALUES.len());
    assert_eq!(copy.get(0), original.get(0));
    assert_eq!(copy.capacity(), original.capacity());
    assert_eq!(copy, original);
}

#[test]
fn clone_is_independent_of_source() {
    let original = array_of(&SMALL_VALUES);
    let mut copy = original.clone();
    copy.set(0, 1234).unwrap();
    copy.add(5);

    assert_array_matches(&original, &SMALL_VALUES);
    assert_eq!(copy.get(0), Ok(&1234));
}

#[test]
fn from_slice_builds_in_order() {
    let array = DynamicArray::from_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(array.len(), 5);
    assert_array_matches(&array, &[1, 2, 3, 4, 5]);
}

// ============================================================================
// INSERTION
// ============================================================================

#[test]
fn add_tracks_length() {
    let array = array_of(&SMALL_VALUES);
    assert_array_matches(&array, &SMALL_VALUES);
}

#[test]
fn add_at_front_shifts_everything() {
    let mut array = array_of(&SMALL_VALUES);
    array.add_at(0, 4444).unwrap();

    assert_eq!(array.get(0), Ok(&4444));
    let mut expected = vec![4444];
    expected.extend_from_slice(&SMALL_VALUES);
    assert_array_matches(&array, &expected);
}

#[test]
fn add_at_middle_of_full_array_grows() {
    let mut array = DynamicArray::with_capacity(3).unwrap();
    array.add(1);
    array.add(2);
    array.add(3);
    array.add_at(1, 9).unwrap();

    assert_eq!(array.capacity(), 6);
    assert_eq!(array.to_vec(), vec![1, 9, 2, 3]);
}

#[test]
fn add_at_length_is_rejected_without_mutation() {
    let mut array = DynamicArray::new();
    for value in 0..3 {
        array.add(value);
    }
    let capacity = array.capacity();

    let err = array.add_at(3, 42).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), capacity);
    assert_eq!(array.to_vec(), vec![0, 1, 2]);
}

#[test]
fn add_at_on_empty_array_is_rejected() {
    let mut array = DynamicArray::new();
    assert!(array.add_at(0, 1).is_err());
    assert!(array.is_empty());
}

// ============================================================================
// GROWTH
// ============================================================================

#[test]
fn growth_doubles_default_capacity() {
    let mut array = DynamicArray::new();
    for value in 0..10 {
        array.add(value);
    }
    assert_eq!(array.capacity(), 10);

    array.add(99);
    assert_eq!(array.capacity(), 20);
    assert_eq!(array.get(10), Ok(&99));
    assert_eq!(array.len(), 11);
}

#[test]
fn large_fixture_fits_after_growth() {
    let array = array_of(&LARGE_VALUES);
    assert!(array.capacity() >= LARGE_VALUES.len());
    assert_array_matches(&array, &LARGE_VALUES);
}

#[test]
fn zero_capacity_grows_to_minimum() {
    let mut array = DynamicArray::with_capacity(0).unwrap();
    assert_eq!(array.capacity(), 0);

    array.add(7);
    assert_eq!(array.capacity(), listcraft::MIN_GROWTH_CAPACITY);
    assert_array_matches(&array, &[7]);
}

#[test]
fn ensure_capacity_is_idempotent() {
    let mut array = DynamicArray::with_capacity(2).unwrap();
    array.add(1);
    array.add(2);

    array.ensure_capacity();
    assert_eq!(array.capacity(), 4);
    array.ensure_capacity();
    assert_eq!(array.capacity(), 4);
    assert_array_matches(&array, &[1, 2]);
}

#[test]
fn trim_shrinks_to_length() {
    let mut array = array_of(&LARGE_VALUES);
    array.trim_to_size();
    assert_eq!(array.capacity(), LARGE_VALUES.len());
    assert_array_matches(&array, &LARGE_VALUES);

    // Full again, so the next add doubles from the trimmed size
    array.add(1);
    assert_eq!(array.capacity(), LARGE_VALUES.len() * 2);
}

#[test]
fn trim_on_empty_keeps_buffer() {
    let mut array = DynamicArray::<i32>::new();
    array.trim_to_size();
    assert_eq!(array.capacity(), DEFAULT_CAPACITY);
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn remove_value_shrinks_length() {
    let mut array = array_of(&SMALL_VALUES);
    assert!(array.remove(&4));
    assert_eq!(array.len(), SMALL_VALUES.len() - 1);
    assert_array_matches(&array, &SMALL_VALUES[1..]);
}

#[test]
fn remove_reports_hit_and_miss() {
    let mut array = array_of(&SMALL_VALUES);
    assert!(array.remove(&SMALL_VALUES[0]));
    assert!(!array.remove(&missing_value()));
}

#[test]
fn remove_takes_first_match_only() {
    let mut array = DynamicArray::from_slice(&[1, 2, 1, 2]);
    assert!(array.remove(&2));
    assert_eq!(array.to_vec(), vec![1, 1, 2]);
}

#[test]
fn remove_at_shifts_tail_left() {
    let mut array = array_of(&SMALL_VALUES);
    assert_eq!(array.remove_at(0), Ok(SMALL_VALUES[0]));
    assert_eq!(array.get(0), Ok(&SMALL_VALUES[1]));
    assert_array_matches(&array, &SMALL_VALUES[1..]);
}

#[test]
fn remove_at_last_element() {
    let mut array = DynamicArray::from_slice(&[1, 2, 3]);
    assert_eq!(array.remove_at(2), Ok(3));
    assert_array_matches(&array, &[1, 2]);
}

#[test]
fn remove_at_out_of_range_leaves_array_alone() {
    let mut array = DynamicArray::from_slice(&[1, 2, 3]);
    assert_eq!(
        array.remove_at(3),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_array_matches(&array, &[1, 2, 3]);
}

#[test]
fn remove_all_keeps_capacity() {
    let mut array = array_of(&LARGE_VALUES);
    let capacity = array.capacity();
    array.remove_all();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), capacity);
    assert!(!array.contains(&LARGE_VALUES[0]));

    array.add(1);
    assert_array_matches(&array, &[1]);
}

// ============================================================================
// ACCESS AND SEARCH
// ============================================================================

#[test]
fn set_replaces_and_returns_previous() {
    let mut array = DynamicArray::from_slice(&[1, 2, 3]);
    assert_eq!(array.set(1, 20), Ok(2));
    assert_array_matches(&array, &[1, 20, 3]);
    assert!(array.set(3, 0).is_err());
}

#[test]
fn get_beyond_length_fails_even_within_capacity() {
    let array = DynamicArray::from_slice(&[1]);
    assert!(array.capacity() > 1);
    assert_eq!(
        array.get(1),
        Err(ListError::IndexOutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn index_of_and_contains_agree() {
    let array = array_of(&SMALL_VALUES);
    for (i, value) in SMALL_VALUES.iter().enumerate() {
        assert_eq!(array.index_of(value), Some(i));
        assert!(array.contains(value));
    }
    assert_eq!(array.index_of(&missing_value()), None);
    assert!(!array.contains(&missing_value()));
}

// ============================================================================
// REVERSAL AND OUTPUT
// ============================================================================

#[test]
fn reverse_in_place_odd_and_even() {
    let mut odd = DynamicArray::from_slice(&[1, 2, 3]);
    odd.reverse_in_place();
    assert_array_matches(&odd, &[3, 2, 1]);

    let mut even = DynamicArray::from_slice(&[1, 2, 3, 4]);
    even.reverse_in_place();
    assert_array_matches(&even, &[4, 3, 2, 1]);
}

#[test]
fn reverse_leaves_capacity_alone() {
    let mut array = array_of(&LARGE_VALUES);
    let capacity = array.capacity();
    array.reverse_in_place();
    assert_eq!(array.capacity(), capacity);
}

#[test]
fn pretty_print_layout() {
    let array = DynamicArray::from_slice(&[1, 2, 3]);
    assert_eq!(render_array(&array), "Size: 3\nCapacity: 10\n[1, 2, 3]\n");

    let empty = DynamicArray::<i32>::new();
    assert_eq!(render_array(&empty), "Size: 0\nCapacity: 10\nList is empty.\n");
}
