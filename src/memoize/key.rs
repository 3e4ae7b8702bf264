//! Key derivation for memoized calls.
//!
//! A [`KeyDerivation`] maps the input of one call to the key under which its
//! output is cached. Two strategies are provided:
//!
//! - [`Identity`]: the input itself is the key
//! - [`Projection`]: a caller-supplied function projects the input onto a key
//!
//! A projection may map several distinct inputs onto the same key. Those
//! inputs then share one cache entry, and whichever of them is computed first
//! decides the cached output. This is how callers deliberately alias inputs
//! (for example, caching by a record's identifier and ignoring its other
//! fields).
//!
//! Derivations must be deterministic: if the same input can yield different
//! keys, none of the cache guarantees hold.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Maps a call's input to the key its output is cached under.
///
/// # Type Parameters
///
/// * `I` - The input type of the memoized computation
pub trait KeyDerivation<I> {
    /// The cache key produced for an input.
    type Key: Eq + Hash;

    /// Derives the cache key for `input`.
    fn derive(&self, input: &I) -> Self::Key;
}

/// Uses the input itself as the cache key.
///
/// The input is cloned once per call, because the original is moved into the
/// wrapped computation on a miss.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{Identity, KeyDerivation};
///
/// assert_eq!(Identity.derive(&"answer"), "answer");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<I> KeyDerivation<I> for Identity
where
    I: Eq + Hash + Clone,
{
    type Key = I;

    #[inline]
    fn derive(&self, input: &I) -> I {
        input.clone()
    }
}

/// Projects the input onto a key with a caller-supplied function.
///
/// # Examples
///
/// ```rust
/// use functional_primitives::memoize::{KeyDerivation, Projection};
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let by_id = Projection::new(|user: &User| user.id);
/// let alice = User { id: 7, name: "alice".to_string() };
/// let renamed = User { id: 7, name: "alicia".to_string() };
///
/// // Same identifier, same key.
/// assert_eq!(by_id.derive(&alice), by_id.derive(&renamed));
/// ```
pub struct Projection<P, K> {
    projection: P,
    key: PhantomData<fn() -> K>,
}

impl<P, K> Projection<P, K> {
    /// Wraps `projection` as a key derivation.
    #[inline]
    pub const fn new(projection: P) -> Self {
        Self {
            projection,
            key: PhantomData,
        }
    }
}

impl<I, K, P> KeyDerivation<I> for Projection<P, K>
where
    P: Fn(&I) -> K,
    K: Eq + Hash,
{
    type Key = K;

    #[inline]
    fn derive(&self, input: &I) -> K {
        (self.projection)(input)
    }
}

impl<P: Clone, K> Clone for Projection<P, K> {
    fn clone(&self) -> Self {
        Self::new(self.projection.clone())
    }
}

impl<P, K> fmt::Debug for Projection<P, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Projection").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i64::MAX)]
    fn test_identity_returns_input(#[case] input: i64) {
        assert_eq!(Identity.derive(&input), input);
    }

    #[rstest]
    fn test_identity_on_tuples() {
        let input = (String::from("left"), 3_u8);
        assert_eq!(Identity.derive(&input), input);
    }

    #[rstest]
    fn test_projection_aliases_inputs() {
        let modulo = Projection::new(|value: &u32| value % 10);

        assert_eq!(modulo.derive(&3), modulo.derive(&13));
        assert_ne!(modulo.derive(&3), modulo.derive(&4));
    }

    #[rstest]
    fn test_projection_clone_keeps_behavior() {
        let length = Projection::new(|text: &String| text.len());
        let cloned = length.clone();

        let input = String::from("abcd");
        assert_eq!(length.derive(&input), cloned.derive(&input));
    }
}
