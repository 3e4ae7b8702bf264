//! Storage for memoized outputs.
//!
//! [`CacheStore`] is the map a memoized function records its outputs in.
//! Stores are not synchronized themselves; the memoization policy decides how
//! access to the store is locked.
//!
//! The default store, [`HashMapStore`], never evicts anything. Callers that
//! need a bound implement [`CacheStore`] themselves and install it with
//! [`Memoized::with_store`](super::Memoized::with_store).

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Hash builder used by [`HashMapStore`] unless another one is given.
///
/// Selected at compile time by the `fxhash` and `ahash` features.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`HashMapStore`] unless another one is given.
///
/// Selected at compile time by the `fxhash` and `ahash` features.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`HashMapStore`] unless another one is given.
///
/// Selected at compile time by the `fxhash` and `ahash` features.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// A key-value map holding memoized outputs.
///
/// # Contract
///
/// - `get` returns a copy of the stored output, never a reference into the
///   store, so no borrow outlives the lock that guards the store.
/// - `put` records an output. Implementations may refuse to record it (a
///   bounded store that is full, for instance); the memoized function then
///   simply recomputes on the next call for that key.
pub trait CacheStore {
    /// The cache key type.
    type Key;
    /// The cached output type.
    type Value;

    /// Returns the output stored for `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    /// Records `value` as the output for `key`.
    fn put(&mut self, key: Self::Key, value: Self::Value);

    /// Returns `true` if an output is stored for `key`.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Returns the number of stored outputs.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded [`CacheStore`] backed by [`std::collections::HashMap`].
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{CacheStore, HashMapStore};
///
/// let mut store: HashMapStore<u32, String> = HashMapStore::new();
/// store.put(1, "one".to_string());
///
/// assert_eq!(store.get(&1), Some("one".to_string()));
/// assert_eq!(store.get(&2), None);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HashMapStore<K, V, S = DefaultHashBuilder> {
    entries: HashMap<K, V, S>,
}

impl<K, V> HashMapStore<K, V> {
    /// Creates an empty store with the default hash builder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, V, S> HashMapStore<K, V, S> {
    /// Creates an empty store that hashes keys with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
        }
    }
}

impl<K, V, S: Default> Default for HashMapStore<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> CacheStore for HashMapStore<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_store_is_empty() {
        let store: HashMapStore<i32, i32> = HashMapStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.contains(&1));
    }

    #[rstest]
    fn test_put_then_get() {
        let mut store = HashMapStore::new();
        store.put("key", 10);

        assert_eq!(store.get(&"key"), Some(10));
        assert!(store.contains(&"key"));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_put_overwrites_existing_entry() {
        let mut store = HashMapStore::new();
        store.put(1, "first");
        store.put(1, "second");

        assert_eq!(store.get(&1), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_with_explicit_hasher() {
        let mut store: HashMapStore<u8, u8, std::collections::hash_map::RandomState> =
            HashMapStore::with_hasher(std::collections::hash_map::RandomState::new());
        store.put(1, 2);
        assert_eq!(store.get(&1), Some(2));
    }
}
