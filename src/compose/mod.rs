//! Function combinators.
//!
//! Small building blocks for point-free code: composition, currying, partial
//! application, run-once thunks and weakly bound callbacks.
//!
//! # Overview
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`chain!`]: left-to-right composition, `chain!(f, g)(x) == g(f(x))`
//! - [`try_chain!`]: left-to-right composition of `Result`-returning steps
//! - [`pipe!`]: applies functions to a value, `pipe!(x, f, g) == g(f(x))`
//! - [`partial!`]: partial application with the `__` placeholder
//! - [`curry2!`] through [`curry4!`]: nested single-argument closures
//!
//! # Functions
//!
//! - [`identity`], [`constant`], [`constant2`], [`constant3`], [`flip`]
//! - [`uncurry2`], [`uncurry3`], [`papply`]
//! - [`augment_first`], [`augment_second`], [`augment`]
//! - [`once`]: run a computation on the first call only
//! - [`weakify`], [`try_weakify`], [`weakify_local`]: callbacks that do not
//!   keep their target alive
//!
//! # Examples
//!
//! ```
//! use functional_primitives::{chain, compose, partial, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let add_ten = partial!(add, 10, __);
//!
//! assert_eq!(compose!(add_ten, double)(5), 20);
//! assert_eq!(chain!(add_ten, double)(5), 30);
//! assert_eq!(pipe!(5, double, add_ten), 20);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Order**: `chain!(f, g) == compose!(g, f)`
//! - **Double flip**: `flip(flip(f)) == f`
//! - **Currying round trip**: `uncurry2(curry2!(f)) == f`

mod compose_macro;
mod curry_macro;
mod once;
mod partial_macro;
mod pipe_macro;
mod utils;
mod weak;

pub use once::once;
pub use utils::{
    ParamSelector, augment, augment_first, augment_second, constant, constant2, constant3, flip,
    identity, papply, uncurry2, uncurry3,
};
pub use weak::{try_weakify, weakify, weakify_local};

pub use crate::chain;
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
pub use crate::try_chain;
