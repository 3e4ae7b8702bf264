//! Concurrency policies for memoized functions.
//!
//! A policy decides how a memoized call coordinates with other calls that
//! touch the same cache.
//!
//! | Policy             | Lock held during        | Concurrent misses for one key      |
//! |--------------------|-------------------------|------------------------------------|
//! | [`Unsynchronized`] | nothing (single thread) | impossible: the wrapper is `!Sync` |
//! | [`Racy`]           | each get and each put   | may each run the computation       |
//! | [`Atomic`]         | the whole call          | computation runs exactly once      |
//!
//! Under every policy a failed computation is returned to its caller
//! unchanged and nothing is stored for its key, so the next call retries.
//!
//! # Choosing a policy
//!
//! [`Racy`] never holds the lock while the computation runs, so slow
//! computations for different keys proceed in parallel. The price is that
//! callers racing on the same missing key may compute it several times; the
//! last successful write wins.
//!
//! [`Atomic`] serializes all calls on one cache (across all keys) and runs the
//! computation inside the critical section. Use it when the computation has
//! effects that must not be repeated. A computation that calls back into the
//! same `Atomic` wrapper deadlocks.

use std::fmt;
use std::str::FromStr;

use super::lock::ScopedLock;
use super::store::CacheStore;

/// Runtime name of a memoization policy.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::PolicyKind;
///
/// let kind: PolicyKind = "racy-synchronized".parse().unwrap();
/// assert_eq!(kind, PolicyKind::Racy);
/// assert_eq!(kind.to_string(), "racy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PolicyKind {
    /// No synchronization; single-threaded use only.
    Unsynchronized,
    /// Lock around each cache access; the computation may run more than once.
    Racy,
    /// Lock around the whole call; the computation runs once per key.
    Atomic,
}

impl PolicyKind {
    /// Returns `true` if wrappers under this policy can be shared between threads.
    #[must_use]
    pub const fn is_synchronized(self) -> bool {
        !matches!(self, Self::Unsynchronized)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsynchronized => write!(formatter, "unsynchronized"),
            Self::Racy => write!(formatter, "racy"),
            Self::Atomic => write!(formatter, "atomic"),
        }
    }
}

/// Error returned when a string does not name a memoization policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyKindError {
    input: String,
}

impl ParsePolicyKindError {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParsePolicyKindError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown memoization policy: {}", self.input)
    }
}

impl std::error::Error for ParsePolicyKindError {}

impl FromStr for PolicyKind {
    type Err = ParsePolicyKindError;

    /// Parses a policy name.
    ///
    /// Case-insensitive; `_` and `-` are interchangeable:
    /// - `"unsynchronized"` -> `Unsynchronized`
    /// - `"racy"` or `"racy-synchronized"` -> `Racy`
    /// - `"atomic"` or `"atomic-synchronized"` -> `Atomic`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "unsynchronized" => Ok(Self::Unsynchronized),
            "racy" | "racy-synchronized" => Ok(Self::Racy),
            "atomic" | "atomic-synchronized" => Ok(Self::Atomic),
            _ => Err(ParsePolicyKindError {
                input: value.to_string(),
            }),
        }
    }
}

/// A memoization policy.
///
/// Implemented by the marker types [`Unsynchronized`], [`Racy`] and
/// [`Atomic`].
pub trait Policy {
    /// Lock guarding the cache store under this policy.
    type Lock<T>: ScopedLock<T>;

    /// Runtime name of the policy.
    const KIND: PolicyKind;

    /// Looks `key` up in the cache, running `compute` on a miss.
    ///
    /// A successful result is stored before it is returned. An error is
    /// returned as is and nothing is stored.
    fn resolve<S, E>(
        cache: &Self::Lock<S>,
        key: S::Key,
        compute: impl FnOnce() -> Result<S::Value, E>,
    ) -> Result<S::Value, E>
    where
        S: CacheStore,
        S::Value: Clone;
}

/// No synchronization.
///
/// The cache lives in a `RefCell`, which makes the wrapper `!Sync`: the
/// compiler rejects sharing it across threads. The computation runs with no
/// borrow held, so it may itself call other memoized functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unsynchronized;

/// Lock around each individual cache access.
///
/// The computation runs outside the lock. Concurrent misses on the same key
/// may each run it; every caller receives the output of a completed run, and
/// the last successful write is the one kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Racy;

/// Lock around the whole check, compute and store sequence.
///
/// All calls on one cache are serialized, across all keys. The computation
/// runs exactly once per key for the lifetime of the cache, unless it fails,
/// in which case a later call retries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atomic;

impl Policy for Unsynchronized {
    type Lock<T> = std::cell::RefCell<T>;

    const KIND: PolicyKind = PolicyKind::Unsynchronized;

    fn resolve<S, E>(
        cache: &Self::Lock<S>,
        key: S::Key,
        compute: impl FnOnce() -> Result<S::Value, E>,
    ) -> Result<S::Value, E>
    where
        S: CacheStore,
        S::Value: Clone,
    {
        resolve_per_access(Self::KIND, cache, key, compute)
    }
}

impl Policy for Racy {
    type Lock<T> = parking_lot::Mutex<T>;

    const KIND: PolicyKind = PolicyKind::Racy;

    fn resolve<S, E>(
        cache: &Self::Lock<S>,
        key: S::Key,
        compute: impl FnOnce() -> Result<S::Value, E>,
    ) -> Result<S::Value, E>
    where
        S: CacheStore,
        S::Value: Clone,
    {
        resolve_per_access(Self::KIND, cache, key, compute)
    }
}

impl Policy for Atomic {
    type Lock<T> = parking_lot::Mutex<T>;

    const KIND: PolicyKind = PolicyKind::Atomic;

    fn resolve<S, E>(
        cache: &Self::Lock<S>,
        key: S::Key,
        compute: impl FnOnce() -> Result<S::Value, E>,
    ) -> Result<S::Value, E>
    where
        S: CacheStore,
        S::Value: Clone,
    {
        cache.with_lock(|store| -> Result<S::Value, E> {
            if let Some(cached) = store.get(&key) {
                tracing::trace!(policy = %Self::KIND, "memoized call hit");
                return Ok(cached);
            }

            tracing::trace!(policy = %Self::KIND, "memoized call miss, computing under lock");
            let value = compute().inspect_err(|_| {
                tracing::debug!(policy = %Self::KIND, "computation failed, nothing cached");
            })?;
            store.put(key, value.clone());
            tracing::trace!(policy = %Self::KIND, entries = store.len(), "memoized output stored");
            Ok(value)
        })
    }
}

/// Get, compute, put, with the lock taken separately for the get and the put.
fn resolve_per_access<L, S, E>(
    kind: PolicyKind,
    cache: &L,
    key: S::Key,
    compute: impl FnOnce() -> Result<S::Value, E>,
) -> Result<S::Value, E>
where
    L: ScopedLock<S>,
    S: CacheStore,
    S::Value: Clone,
{
    if let Some(cached) = cache.with_lock(|store| store.get(&key)) {
        tracing::trace!(policy = %kind, "memoized call hit");
        return Ok(cached);
    }

    tracing::trace!(policy = %kind, "memoized call miss, computing outside lock");
    let value = compute().inspect_err(|_| {
        tracing::debug!(policy = %kind, "computation failed, nothing cached");
    })?;
    let entries = cache.with_lock(|store| {
        store.put(key, value.clone());
        store.len()
    });
    tracing::trace!(policy = %kind, entries, "memoized output stored");
    Ok(value)
}
