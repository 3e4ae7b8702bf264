//! Memoizing caches with selectable concurrency policies.
//!
//! This module wraps a single-input computation in a cache that records the
//! output for every input (or every derived key) it has seen. Later calls with
//! the same key return the recorded output without running the computation.
//!
//! # Overview
//!
//! - [`memoize`] / [`try_memoize`]: cache by the input itself
//! - [`memoize_by`] / [`try_memoize_by`]: cache by a projection of the input
//! - [`memoize2`] / [`memoize3`]: multi-argument functions, cached by the
//!   argument tuple
//! - [`try_memoize2`] / [`try_memoize3`]: the same for failable functions
//!
//! Every wrap operation takes a policy marker:
//!
//! - [`Unsynchronized`]: no locking, single-threaded only (`!Sync`)
//! - [`Racy`]: lock per cache access; duplicate computation possible under contention
//! - [`Atomic`]: lock per call; exactly one computation per key
//!
//! # Components
//!
//! - [`KeyDerivation`]: maps an input to a key ([`Identity`], [`Projection`])
//! - [`CacheStore`]: the key-output map ([`HashMapStore`])
//! - [`ScopedLock`]: exclusive access with release on every exit path
//! - [`Memoized`]: the wrapper combining the above under a [`Policy`]
//!
//! # Failures
//!
//! Failable computations (`Fn(I) -> Result<O, E>`) are wrapped with the
//! `try_` variants. An `Err` reaches the caller unchanged and is never cached;
//! the next call for the same key runs the computation again.
//!
//! # Growth
//!
//! [`HashMapStore`] is unbounded: a long-lived wrapper over many distinct keys
//! keeps every output. Install a bounded [`CacheStore`] with
//! [`Memoized::with_store`] where that matters.
//!
//! # Examples
//!
//! ```rust
//! use functional_primitives::memoize::{Atomic, memoize};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//!
//! let invocations = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&invocations);
//! let slow_square = Arc::new(memoize(
//!     move |x: u64| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         x * x
//!     },
//!     Atomic,
//! ));
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let slow_square = Arc::clone(&slow_square);
//!         thread::spawn(move || slow_square.call(12))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 144);
//! }
//! assert_eq!(invocations.load(Ordering::SeqCst), 1);
//! ```

mod key;
mod lock;
mod memoized;
mod policy;
mod store;

pub use key::{Identity, KeyDerivation, Projection};
pub use lock::ScopedLock;
pub use memoized::{
    Memoized, memoize, memoize_by, memoize2, memoize3, try_memoize, try_memoize_by, try_memoize2,
    try_memoize3,
};
pub use policy::{Atomic, ParsePolicyKindError, Policy, PolicyKind, Racy, Unsynchronized};
pub use store::{CacheStore, DefaultHashBuilder, HashMapStore};
