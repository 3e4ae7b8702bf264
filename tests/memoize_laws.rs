#![cfg(feature = "memoize")]
//! Property-based tests for memoization laws.
//!
//! - **Transparency**: a memoized function returns what the function returns
//! - **Single computation**: the function runs once per distinct key
//! - **Projection**: inputs with equal keys receive the first input's output

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use functional_primitives::memoize::{Atomic, PolicyKind, Racy, Unsynchronized, memoize, memoize_by};
use proptest::prelude::*;

fn checksum(text: &str) -> u32 {
    text.bytes().fold(17_u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
}

fn any_policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Unsynchronized),
        Just(PolicyKind::Racy),
        Just(PolicyKind::Atomic),
    ]
}

/// Runs every input through a memoized `checksum` and returns the outputs with
/// the number of computations.
fn run_memoized(kind: PolicyKind, inputs: &[String]) -> (Vec<u32>, usize) {
    let invocations = Cell::new(0);
    let counted = |text: String| {
        invocations.set(invocations.get() + 1);
        checksum(&text)
    };

    let outputs: Vec<u32> = match kind {
        PolicyKind::Unsynchronized => {
            let cached = memoize(counted, Unsynchronized);
            inputs.iter().map(|input| cached.call(input.clone())).collect()
        }
        PolicyKind::Racy => {
            let cached = memoize(counted, Racy);
            inputs.iter().map(|input| cached.call(input.clone())).collect()
        }
        PolicyKind::Atomic => {
            let cached = memoize(counted, Atomic);
            inputs.iter().map(|input| cached.call(input.clone())).collect()
        }
    };

    (outputs, invocations.get())
}

proptest! {
    #[test]
    fn prop_memoized_is_transparent(
        kind in any_policy(),
        inputs in prop::collection::vec("[a-d]{0,3}", 0..40),
    ) {
        let (outputs, _) = run_memoized(kind, &inputs);
        let expected: Vec<u32> = inputs.iter().map(|input| checksum(input)).collect();

        prop_assert_eq!(outputs, expected);
    }

    #[test]
    fn prop_one_computation_per_distinct_input(
        kind in any_policy(),
        inputs in prop::collection::vec("[a-d]{0,3}", 0..40),
    ) {
        let (_, invocations) = run_memoized(kind, &inputs);
        let distinct: HashSet<&String> = inputs.iter().collect();

        prop_assert_eq!(invocations, distinct.len());
    }

    #[test]
    fn prop_projection_serves_first_output(inputs in prop::collection::vec(any::<i32>(), 1..60)) {
        let by_parity = memoize_by(|x: i32| x, |x: &i32| x.rem_euclid(2), Atomic);

        let mut first_seen: HashMap<i32, i32> = HashMap::new();
        for input in inputs {
            let expected = *first_seen.entry(input.rem_euclid(2)).or_insert(input);
            prop_assert_eq!(by_parity.call(input), expected);
        }
        prop_assert!(by_parity.len() <= 2);
    }
}
