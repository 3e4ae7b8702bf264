//! The memoizing wrapper and the functions that create it.

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::key::{Identity, KeyDerivation, Projection};
use super::lock::ScopedLock;
use super::policy::{Atomic, Policy, PolicyKind, Racy, Unsynchronized};
use super::store::{CacheStore, HashMapStore};

/// A function wrapped in a cache.
///
/// `Memoized` owns the wrapped function, the key derivation and the cache.
/// The cache starts empty when the wrapper is created and is dropped with it;
/// two wrappers never share entries, even when they wrap the same function.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `D` - The [`KeyDerivation`] mapping inputs to cache keys
/// * `S` - The [`CacheStore`] holding outputs
/// * `P` - The [`Policy`] coordinating concurrent calls
///
/// # Calling
///
/// - [`call`](Self::call) for total functions, `Fn(I) -> O`
/// - [`try_call`](Self::try_call) for failable functions, `Fn(I) -> Result<O, E>`;
///   only `Ok` outputs are cached
/// - [`into_fn`](Self::into_fn) / [`into_try_fn`](Self::into_try_fn) turn the
///   wrapper into a closure with the same signature as the wrapped function
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Atomic, memoize};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let invocations = AtomicUsize::new(0);
/// let square = memoize(
///     |x: u64| {
///         invocations.fetch_add(1, Ordering::SeqCst);
///         x * x
///     },
///     Atomic,
/// );
///
/// assert_eq!(square.call(7), 49);
/// assert_eq!(square.call(7), 49);
/// assert_eq!(invocations.load(Ordering::SeqCst), 1);
///
/// assert_eq!(square.call(3), 9);
/// assert_eq!(invocations.load(Ordering::SeqCst), 2);
/// ```
pub struct Memoized<F, D, S, P: Policy> {
    function: F,
    derivation: D,
    cache: P::Lock<S>,
    policy: PhantomData<P>,
}

impl<F, D, S, P: Policy> Memoized<F, D, S, P> {
    /// Assembles a wrapper from its parts.
    ///
    /// `store` becomes the cache. It is normally empty; entries already in it
    /// are served as hits.
    pub fn from_parts(function: F, derivation: D, store: S) -> Self {
        Self {
            function,
            derivation,
            cache: <P::Lock<S> as ScopedLock<S>>::from_inner(store),
            policy: PhantomData,
        }
    }

    /// Replaces the cache with `store`.
    ///
    /// This is the extension point for bounded caches: implement
    /// [`CacheStore`] with whatever admission or eviction rule is needed and
    /// install it here. Entries in the previous store are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_primitives::memoize::{HashMapStore, Racy, memoize};
    ///
    /// let length = memoize(|text: String| text.len(), Racy)
    ///     .with_store(HashMapStore::with_hasher(
    ///         std::collections::hash_map::RandomState::new(),
    ///     ));
    ///
    /// assert_eq!(length.call("four".to_string()), 4);
    /// ```
    pub fn with_store<T>(self, store: T) -> Memoized<F, D, T, P> {
        Memoized::from_parts(self.function, self.derivation, store)
    }

    /// Returns the policy this wrapper runs under.
    #[must_use]
    pub const fn policy(&self) -> PolicyKind {
        P::KIND
    }

    /// Returns the number of cached outputs.
    pub fn len(&self) -> usize
    where
        S: CacheStore,
    {
        self.cache.with_lock(|store| store.len())
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool
    where
        S: CacheStore,
    {
        self.cache.with_lock(|store| store.is_empty())
    }

    /// Returns `true` if an output is cached under the key derived from `input`.
    pub fn is_cached<I>(&self, input: &I) -> bool
    where
        D: KeyDerivation<I>,
        S: CacheStore<Key = D::Key>,
    {
        let key = self.derivation.derive(input);
        self.cache.with_lock(|store| store.contains(&key))
    }

    /// Calls a total function through the cache.
    ///
    /// On a hit the cached output is cloned and returned without calling the
    /// function.
    pub fn call<I, O>(&self, input: I) -> O
    where
        F: Fn(I) -> O,
        D: KeyDerivation<I>,
        S: CacheStore<Key = D::Key, Value = O>,
        O: Clone,
    {
        let key = self.derivation.derive(&input);
        let Ok(output) = P::resolve(&self.cache, key, || {
            Ok::<O, Infallible>((self.function)(input))
        });
        output
    }

    /// Calls a failable function through the cache.
    ///
    /// `Ok` outputs are cached. An `Err` is returned to this caller unchanged
    /// and nothing is cached for its key, so the next call with that key runs
    /// the function again.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returned for this input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_primitives::memoize::{Racy, try_memoize};
    ///
    /// let parse = try_memoize(|text: String| text.parse::<i32>(), Racy);
    ///
    /// assert_eq!(parse.try_call("42".to_string()), Ok(42));
    /// assert!(parse.try_call("forty-two".to_string()).is_err());
    /// assert!(!parse.is_cached(&"forty-two".to_string()));
    /// ```
    pub fn try_call<I, O, E>(&self, input: I) -> Result<O, E>
    where
        F: Fn(I) -> Result<O, E>,
        D: KeyDerivation<I>,
        S: CacheStore<Key = D::Key, Value = O>,
        O: Clone,
    {
        let key = self.derivation.derive(&input);
        P::resolve(&self.cache, key, || (self.function)(input))
    }

    /// Converts the wrapper into a closure with the wrapped function's signature.
    pub fn into_fn<I, O>(self) -> impl Fn(I) -> O
    where
        F: Fn(I) -> O,
        D: KeyDerivation<I>,
        S: CacheStore<Key = D::Key, Value = O>,
        O: Clone,
    {
        move |input| self.call(input)
    }

    /// Converts the wrapper into a closure with the wrapped failable function's
    /// signature.
    pub fn into_try_fn<I, O, E>(self) -> impl Fn(I) -> Result<O, E>
    where
        F: Fn(I) -> Result<O, E>,
        D: KeyDerivation<I>,
        S: CacheStore<Key = D::Key, Value = O>,
        O: Clone,
    {
        move |input| self.try_call(input)
    }
}

impl<F, D, S, P: Policy> fmt::Debug for Memoized<F, D, S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("policy", &P::KIND)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(
    Memoized<fn(u64) -> u64, Identity, HashMapStore<u64, u64>, Unsynchronized>: Sync
);
static_assertions::assert_impl_all!(
    Memoized<fn(u64) -> u64, Identity, HashMapStore<u64, u64>, Atomic>: Send, Sync
);
static_assertions::assert_impl_all!(
    Memoized<fn(u64) -> u64, Identity, HashMapStore<u64, u64>, Racy>: Send, Sync
);

// =============================================================================
// Wrap operations
// =============================================================================

/// Memoizes a total function, keyed by its input.
///
/// The policy is chosen by passing one of the marker values
/// [`Unsynchronized`], [`Racy`] or [`Atomic`].
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Unsynchronized, memoize};
///
/// let shout = memoize(|word: String| word.to_uppercase(), Unsynchronized);
/// assert_eq!(shout.call("hey".to_string()), "HEY");
/// assert_eq!(shout.len(), 1);
/// ```
pub fn memoize<F, I, O, P>(function: F, _policy: P) -> Memoized<F, Identity, HashMapStore<I, O>, P>
where
    F: Fn(I) -> O,
    I: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    Memoized::from_parts(function, Identity, HashMapStore::new())
}

/// Memoizes a failable function, keyed by its input.
///
/// Only `Ok` outputs are cached.
pub fn try_memoize<F, I, O, E, P>(
    function: F,
    _policy: P,
) -> Memoized<F, Identity, HashMapStore<I, O>, P>
where
    F: Fn(I) -> Result<O, E>,
    I: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    Memoized::from_parts(function, Identity, HashMapStore::new())
}

/// Memoizes a total function, keyed by a projection of its input.
///
/// Inputs that project onto the same key share one cache entry: the first of
/// them to be computed decides the output all of them receive.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Atomic, memoize_by};
///
/// #[derive(Clone)]
/// struct Request {
///     path: String,
///     trace_id: u64,
/// }
///
/// let route = memoize_by(
///     |request: Request| format!("handler for {}", request.path),
///     |request: &Request| request.path.clone(),
///     Atomic,
/// );
///
/// let first = Request { path: "/users".to_string(), trace_id: 1 };
/// let second = Request { path: "/users".to_string(), trace_id: 2 };
/// assert_eq!(route.call(first), route.call(second));
/// assert_eq!(route.len(), 1);
/// ```
pub fn memoize_by<F, Q, I, K, O, P>(
    function: F,
    key: Q,
    _policy: P,
) -> Memoized<F, Projection<Q, K>, HashMapStore<K, O>, P>
where
    F: Fn(I) -> O,
    Q: Fn(&I) -> K,
    K: Eq + Hash,
    O: Clone,
    P: Policy,
{
    Memoized::from_parts(function, Projection::new(key), HashMapStore::new())
}

/// Memoizes a failable function, keyed by a projection of its input.
pub fn try_memoize_by<F, Q, I, K, O, E, P>(
    function: F,
    key: Q,
    _policy: P,
) -> Memoized<F, Projection<Q, K>, HashMapStore<K, O>, P>
where
    F: Fn(I) -> Result<O, E>,
    Q: Fn(&I) -> K,
    K: Eq + Hash,
    O: Clone,
    P: Policy,
{
    Memoized::from_parts(function, Projection::new(key), HashMapStore::new())
}

/// Memoizes a two-argument function, keyed by the argument pair.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Racy, memoize2};
///
/// let power = memoize2(|base: u64, exponent: u32| base.pow(exponent), Racy);
/// assert_eq!(power(2, 10), 1024);
/// assert_eq!(power(2, 10), 1024);
/// ```
pub fn memoize2<F, A, B, O, P>(function: F, policy: P) -> impl Fn(A, B) -> O
where
    F: Fn(A, B) -> O,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    let memoized = memoize(move |(first, second): (A, B)| function(first, second), policy);
    move |first, second| memoized.call((first, second))
}

/// Memoizes a three-argument function, keyed by the argument triple.
pub fn memoize3<F, A, B, C, O, P>(function: F, policy: P) -> impl Fn(A, B, C) -> O
where
    F: Fn(A, B, C) -> O,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    let memoized = memoize(
        move |(first, second, third): (A, B, C)| function(first, second, third),
        policy,
    );
    move |first, second, third| memoized.call((first, second, third))
}

/// Memoizes a failable two-argument function, keyed by the argument pair.
///
/// Only `Ok` outputs are cached.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Atomic, try_memoize2};
///
/// let checked_div = try_memoize2(
///     |numerator: i32, denominator: i32| {
///         numerator.checked_div(denominator).ok_or("division by zero")
///     },
///     Atomic,
/// );
///
/// assert_eq!(checked_div(12, 4), Ok(3));
/// assert_eq!(checked_div(12, 0), Err("division by zero"));
/// ```
pub fn try_memoize2<F, A, B, O, E, P>(function: F, policy: P) -> impl Fn(A, B) -> Result<O, E>
where
    F: Fn(A, B) -> Result<O, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    let memoized = try_memoize(move |(first, second): (A, B)| function(first, second), policy);
    move |first, second| memoized.try_call((first, second))
}

/// Memoizes a failable three-argument function, keyed by the argument triple.
pub fn try_memoize3<F, A, B, C, O, E, P>(
    function: F,
    policy: P,
) -> impl Fn(A, B, C) -> Result<O, E>
where
    F: Fn(A, B, C) -> Result<O, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    O: Clone,
    P: Policy,
{
    let memoized = try_memoize(
        move |(first, second, third): (A, B, C)| function(first, second, third),
        policy,
    );
    move |first, second, third| memoized.try_call((first, second, third))
}
