//! The `pipe!` macro for left-to-right application.

/// Passes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))` and to
/// `chain!(f, g, h)(x)`. Unlike [`chain!`](crate::chain!), nothing is built:
/// each function is called once, immediately, so `FnOnce` closures work.
///
/// # Examples
///
/// ```
/// use functional_primitives::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(3, square, double), 18);
/// assert_eq!(pipe!(3), 3);
/// ```
///
/// Consuming closures:
///
/// ```
/// use functional_primitives::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |text: String| text.to_uppercase() + &suffix;
///
/// assert_eq!(pipe!(String::from("hey"), shout), "HEY!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_order() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(pipe!(5, add_one, double), 12);
        assert_eq!(pipe!(5, double, add_one), 11);
    }
}
