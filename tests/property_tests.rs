//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use binary_min_heap::{BinaryMinHeap, HeapError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    ExtractMin,
    ExtractMax,
    Update(i32, i32),
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-50i32..50).prop_map(Op::Add),
        1 => Just(Op::ExtractMin),
        1 => Just(Op::ExtractMax),
        1 => (-50i32..50, -50i32..50).prop_map(|(old, new)| Op::Update(old, new)),
        1 => (-50i32..50).prop_map(Op::Remove),
    ]
}

/// Applies `ops` to a heap and to a plain model, checking them against each other
fn check_against_model(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = BinaryMinHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Add(value) => {
                heap.add(value);
                model.push(value);
            }
            Op::ExtractMin => {
                let expected = model.iter().min().copied();
                match expected {
                    Some(min) => {
                        prop_assert_eq!(heap.extract_min(), Ok(min));
                        let pos = model.iter().position(|&v| v == min).unwrap();
                        model.swap_remove(pos);
                    }
                    None => prop_assert_eq!(heap.extract_min(), Err(HeapError::EmptyContainer)),
                }
            }
            Op::ExtractMax => {
                let expected = model.iter().max().copied();
                match expected {
                    Some(max) => {
                        prop_assert_eq!(heap.extract_max(), Ok(max));
                        let pos = model.iter().position(|&v| v == max).unwrap();
                        model.swap_remove(pos);
                    }
                    None => prop_assert_eq!(heap.extract_max(), Err(HeapError::EmptyContainer)),
                }
            }
            Op::Update(old, new) => match model.iter().position(|&v| v == old) {
                Some(pos) => {
                    prop_assert_eq!(heap.update(&old, new), Ok(()));
                    model[pos] = new;
                }
                None => prop_assert_eq!(heap.update(&old, new), Err(HeapError::NotFound)),
            },
            Op::Remove(value) => match model.iter().position(|&v| v == value) {
                Some(pos) => {
                    prop_assert_eq!(heap.remove(&value), Ok(value));
                    model.swap_remove(pos);
                }
                None => prop_assert_eq!(heap.remove(&value), Err(HeapError::NotFound)),
            },
        }

        prop_assert!(heap.is_valid_heap(), "heap property violated: {:?}", heap);
        prop_assert_eq!(heap.len(), model.len());
        prop_assert!(heap.len() <= heap.capacity());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
        prop_assert_eq!(heap.peek().ok().copied(), model.iter().min().copied());
    }

    let mut expected = model;
    expected.sort_unstable();
    prop_assert_eq!(heap.into_sorted_vec(), expected);

    Ok(())
}

/// Capacity is the smallest power-of-two multiple of 8 strictly above the peak size
fn expected_capacity(peak_len: usize) -> usize {
    let mut capacity = 8;
    while capacity <= peak_len {
        capacity *= 2;
    }
    capacity
}

proptest! {
    #[test]
    fn test_random_ops_match_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model(ops)?;
    }

    #[test]
    fn test_heapsort_round_trip(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let heap: BinaryMinHeap<i32> = values.iter().copied().collect();
        prop_assert!(heap.is_valid_heap());

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_extract_max_is_no_smaller_than_rest(values in prop::collection::vec(-100i32..100, 1..100)) {
        let mut heap = BinaryMinHeap::from_slice(&values);

        let max = heap.extract_max().unwrap();
        prop_assert!(heap.is_valid_heap());
        while let Ok(value) = heap.extract_min() {
            prop_assert!(value <= max, "{} remained after extracting max {}", value, max);
        }
    }

    #[test]
    fn test_update_preserves_len(
        values in prop::collection::vec(-100i32..100, 1..100),
        pick in any::<prop::sample::Index>(),
        new_value in -200i32..200,
    ) {
        let mut heap = BinaryMinHeap::from_slice(&values);
        let old_value = values[pick.index(values.len())];

        heap.update(&old_value, new_value).unwrap();

        prop_assert_eq!(heap.len(), values.len());
        prop_assert!(heap.is_valid_heap());
        prop_assert!(heap.contains(&new_value));
    }

    #[test]
    fn test_remove_any_element(
        values in prop::collection::vec(-100i32..100, 1..100),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut heap = BinaryMinHeap::from_slice(&values);
        let target = values[pick.index(values.len())];

        prop_assert_eq!(heap.remove(&target), Ok(target));
        prop_assert_eq!(heap.len(), values.len() - 1);
        prop_assert!(heap.is_valid_heap());

        let mut expected = values;
        let pos = expected.iter().position(|&v| v == target).unwrap();
        expected.remove(pos);
        expected.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_capacity_tracks_peak_len(values in prop::collection::vec(any::<i32>(), 0..200), pops in 0usize..200) {
        let mut heap = BinaryMinHeap::from_slice(&values);
        prop_assert_eq!(heap.capacity(), expected_capacity(values.len()));

        for _ in 0..pops {
            let _ = heap.extract_min();
        }
        prop_assert_eq!(heap.capacity(), expected_capacity(values.len()));
    }
}
