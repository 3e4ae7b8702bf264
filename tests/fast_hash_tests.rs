#![cfg(feature = "memoize")]
//! Tests for the hasher selected by the `fxhash` and `ahash` features.
//!
//! Whatever [`DefaultHashBuilder`] resolves to, equal keys must hit the same
//! entry and distinct keys must never collide into each other's outputs.

use std::cell::Cell;
use std::collections::hash_map::RandomState;

use functional_primitives::memoize::{
    CacheStore, DefaultHashBuilder, HashMapStore, Unsynchronized, memoize,
};
use rstest::rstest;

#[rstest]
fn test_default_store_uses_default_hash_builder() {
    let mut store: HashMapStore<String, usize, DefaultHashBuilder> = HashMapStore::new();
    store.put("alpha".to_string(), 1);
    store.put("beta".to_string(), 2);

    assert_eq!(store.get(&"alpha".to_string()), Some(1));
    assert_eq!(store.get(&"beta".to_string()), Some(2));
    assert_eq!(store.get(&"gamma".to_string()), None);
}

#[rstest]
fn test_many_keys_remain_distinct() {
    let invocations = Cell::new(0);
    let describe = memoize(
        |n: u64| {
            invocations.set(invocations.get() + 1);
            n.to_string()
        },
        Unsynchronized,
    );

    for n in 0..1_000 {
        assert_eq!(describe.call(n), n.to_string());
    }
    for n in (0..1_000).rev() {
        assert_eq!(describe.call(n), n.to_string());
    }

    assert_eq!(invocations.get(), 1_000);
    assert_eq!(describe.len(), 1_000);
}

#[rstest]
fn test_explicit_hasher_overrides_default() {
    let counted = memoize(|text: &'static str| text.len(), Unsynchronized)
        .with_store(HashMapStore::with_hasher(RandomState::new()));

    assert_eq!(counted.call("hash"), 4);
    assert!(counted.is_cached(&"hash"));
}
