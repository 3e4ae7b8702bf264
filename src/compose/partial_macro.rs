//! The `partial!` macro for partial function application.

/// Fixes some arguments of a function, leaving the rest as parameters.
///
/// `__` (two underscores) marks an argument that stays open. It is matched as
/// a literal token, so there is nothing to import for it.
///
/// For a two-argument function `f(a, b)`:
///
/// - `partial!(f, x, __)` is `|b| f(x, b)`
/// - `partial!(f, __, y)` is `|a| f(a, y)`
/// - `partial!(f, x, y)` is `|| f(x, y)`
/// - `partial!(f, __, __)` is `|a, b| f(a, b)`
///
/// Three-argument functions accept every combination of fixed and open
/// positions in the same way.
///
/// Fixed values are evaluated once, when the macro runs, and cloned into
/// every call, so they must be [`Clone`].
///
/// # Examples
///
/// ```
/// use functional_primitives::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
///
/// let half = partial!(divide, __, 2.0);
/// let reciprocal = partial!(divide, 1.0, __);
///
/// assert_eq!(half(10.0), 5.0);
/// assert_eq!(reciprocal(4.0), 0.25);
/// ```
///
/// ```
/// use functional_primitives::partial;
///
/// fn clamp(low: i32, value: i32, high: i32) -> i32 { value.max(low).min(high) }
///
/// let percent = partial!(clamp, 0, __, 100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// assert_eq!(percent(42), 42);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // Three arguments
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                third,
            )
        }
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::std::clone::Clone::clone(&first),
                second,
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    // =========================================================================
    // Two arguments
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
            )
        }
    }};
}
