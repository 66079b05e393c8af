//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap invariants are always maintained against a naive model.

use proptest::prelude::*;

use indexed_heap::{HeapError, HeapKind, IndexedBinaryHeap};

use std::collections::HashMap;

const CAPACITY: usize = 24;

/// One randomly generated operation: (selector, id, priority).
type Op = (u8, usize, i32);

/// Check the heap property through the public level-order iterator.
fn check_heap_property(pq: &IndexedBinaryHeap) -> Result<(), TestCaseError> {
    let slots: Vec<(usize, f64)> = pq.iter().collect();
    for i in 1..slots.len() {
        let parent = slots[(i + 1) / 2 - 1].1;
        let child = slots[i].1;
        match pq.kind() {
            HeapKind::Min => prop_assert!(parent <= child),
            HeapKind::Max => prop_assert!(parent >= child),
        }
    }
    Ok(())
}

/// Check that the heap and the model agree on membership, priorities and size.
fn check_against_model(
    pq: &IndexedBinaryHeap,
    model: &HashMap<usize, f64>,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(pq.len(), model.len());
    prop_assert_eq!(pq.is_empty(), model.is_empty());
    for id in 0..pq.capacity() {
        prop_assert_eq!(pq.contains(id), model.contains_key(&id));
        prop_assert_eq!(pq.priority(id), model.get(&id).copied());
    }
    Ok(())
}

/// Apply a random op sequence, mirroring every step in a HashMap model and
/// verifying all invariants after each operation.
fn run_model_comparison(kind: HeapKind, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut pq = IndexedBinaryHeap::new(CAPACITY, kind);
    let mut model: HashMap<usize, f64> = HashMap::new();

    for (selector, id, priority) in ops {
        let priority = priority as f64;
        match selector % 4 {
            0 => {
                let result = pq.insert(id, priority);
                if model.contains_key(&id) {
                    prop_assert_eq!(result, Err(HeapError::AlreadyPresent(id)));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(id, priority);
                }
            }
            1 => {
                let result = pq.change_priority(id, priority);
                if model.contains_key(&id) {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(id, priority);
                } else {
                    prop_assert_eq!(result, Err(HeapError::NotPresent(id)));
                }
            }
            2 => {
                let result = pq.remove(id);
                match model.remove(&id) {
                    Some(expected) => prop_assert_eq!(result, Ok(expected)),
                    None => prop_assert_eq!(result, Err(HeapError::NotPresent(id))),
                }
            }
            _ => match pq.pop() {
                Ok((popped_id, popped_priority)) => {
                    let expected = match kind {
                        HeapKind::Min => model.values().cloned().fold(f64::INFINITY, f64::min),
                        HeapKind::Max => model.values().cloned().fold(f64::NEG_INFINITY, f64::max),
                    };
                    prop_assert_eq!(popped_priority, expected);
                    prop_assert_eq!(model.remove(&popped_id), Some(popped_priority));
                }
                Err(err) => {
                    prop_assert_eq!(err, HeapError::Empty);
                    prop_assert!(model.is_empty());
                }
            },
        }

        check_heap_property(&pq)?;
        check_against_model(&pq, &model)?;
    }

    Ok(())
}

/// Insert a batch of values, then verify full extraction order.
fn run_extraction_order(kind: HeapKind, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut pq = IndexedBinaryHeap::new(values.len(), kind);
    for (id, value) in values.iter().enumerate() {
        pq.insert(id, *value as f64).unwrap();
    }

    let mut last = match kind {
        HeapKind::Min => f64::NEG_INFINITY,
        HeapKind::Max => f64::INFINITY,
    };
    while let Ok((_, priority)) = pq.pop() {
        match kind {
            HeapKind::Min => prop_assert!(priority >= last),
            HeapKind::Max => prop_assert!(priority <= last),
        }
        last = priority;
    }
    prop_assert!(pq.is_empty());

    Ok(())
}

fn op_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec((0u8..4, 0usize..CAPACITY, -100i32..100), 0..200)
}

proptest! {
    #[test]
    fn test_min_heap_model_comparison(ops in op_strategy()) {
        run_model_comparison(HeapKind::Min, ops)?;
    }

    #[test]
    fn test_max_heap_model_comparison(ops in op_strategy()) {
        run_model_comparison(HeapKind::Max, ops)?;
    }

    #[test]
    fn test_min_heap_extraction_order(values in prop::collection::vec(-1000i32..1000, 1..100)) {
        run_extraction_order(HeapKind::Min, values)?;
    }

    #[test]
    fn test_max_heap_extraction_order(values in prop::collection::vec(-1000i32..1000, 1..100)) {
        run_extraction_order(HeapKind::Max, values)?;
    }

    #[test]
    fn test_insert_remove_round_trip(ids in prop::collection::hash_set(0usize..CAPACITY, 1..CAPACITY)) {
        let mut pq = IndexedBinaryHeap::new(CAPACITY, HeapKind::Min);
        for &id in &ids {
            pq.insert(id, id as f64 * 0.25).unwrap();
        }
        for &id in &ids {
            prop_assert_eq!(pq.priority(id), Some(id as f64 * 0.25));
            prop_assert_eq!(pq.remove(id), Ok(id as f64 * 0.25));
            prop_assert!(!pq.contains(id));
        }
        prop_assert!(pq.is_empty());
    }
}
