//! Composition macros.
//!
//! - [`compose!`]: right-to-left, `compose!(f, g)(x) == f(g(x))`
//! - [`chain!`]: left-to-right, `chain!(f, g)(x) == g(f(x))`
//! - [`try_chain!`]: left-to-right over `Result`-returning steps

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first, as in mathematical notation `f ∘ g ∘ h`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use functional_primitives::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11); // add_one(double(5))
/// ```
///
/// Types change along the way:
///
/// ```
/// use functional_primitives::compose;
///
/// let digits = compose!(|text: String| text.len(), |n: u64| n.to_string());
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Composes functions from left to right.
///
/// `chain!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: functions run in the
/// order they are written. `chain!(f, g, h)` is `compose!(h, g, f)`.
///
/// # Examples
///
/// ```
/// use functional_primitives::chain;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_five(x: i32) -> i32 { x + 5 }
/// fn render(x: i32) -> String { x.to_string() }
///
/// let pipeline = chain!(double, add_five, render);
/// assert_eq!(pipeline(10), "25");
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::chain!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// Composes failable functions from left to right.
///
/// Each function returns a `Result` with the same error type. The composed
/// function stops at the first `Err` and returns it; later functions are not
/// called. Total steps can join the chain by wrapping their output in `Ok`.
///
/// # Examples
///
/// ```
/// use functional_primitives::try_chain;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
///
/// fn positive(x: i32) -> Result<i32, String> {
///     if x > 0 { Ok(x) } else { Err(format!("not positive: {x}")) }
/// }
///
/// let parse_positive = try_chain!(parse, positive, |x: i32| Ok(x * 10));
///
/// assert_eq!(parse_positive("4"), Ok(40));
/// assert_eq!(parse_positive("-4"), Err("not positive: -4".to_string()));
/// assert_eq!(parse_positive("four"), Err("not a number: four".to_string()));
/// ```
#[macro_export]
macro_rules! try_chain {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::try_chain!($($rest),+);
        move |input| first(input).and_then(&rest)
    }};
}
