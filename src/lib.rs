//! # functional-primitives
//!
//! Memoizing caches and function combinators.
//!
//! ## Overview
//!
//! - **Memoization**: wrap a single-input function in a cache under one of
//!   three concurrency policies, keyed by the input or by a projection of it
//! - **Combinators**: compose!, chain!, pipe!, partial!, curry! macros and
//!   the usual identity, constant and flip helpers
//! - **Callbacks**: run-once thunks and weakly bound actions
//!
//! ## Feature Flags
//!
//! - `compose`: combinators, `once` and weak binding
//! - `memoize`: the memoization subsystem
//! - `fxhash`: use `rustc-hash` as the default cache hasher
//! - `ahash`: use `ahash` as the default cache hasher
//! - `serde`: `Serialize`/`Deserialize` for `PolicyKind`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional_primitives::prelude::*;
//!
//! let square = memoize(|x: u64| x * x, Racy);
//! let square_plus_one = chain!(|x: u64| square.call(x), |y: u64| y + 1);
//!
//! assert_eq!(square_plus_one(7), 50);
//! assert_eq!(square_plus_one(7), 50);
//! assert_eq!(square.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use functional_primitives::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "memoize")]
    pub use crate::memoize::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "memoize")]
pub mod memoize;
