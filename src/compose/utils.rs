//! Function combinators.
//!
//! - [`identity`], [`constant`], [`flip`]: the I, K and C combinators
//! - [`uncurry2`], [`uncurry3`]: inverses of [`curry2!`](crate::curry2) and
//!   [`curry3!`](crate::curry3)
//! - [`papply`]: fixes the first argument of a binary function
//! - [`augment_first`], [`augment_second`], [`augment`]: widen a unary
//!   function to a binary one that ignores an argument

/// Returns the value unchanged.
///
/// `identity` is the unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Like [`constant`], for two ignored inputs.
#[inline]
pub fn constant2<T: Clone, U, V>(value: T) -> impl Fn(U, V) -> T {
    move |_, _| value.clone()
}

/// Like [`constant`], for three ignored inputs.
#[inline]
pub fn constant3<T: Clone, U, V, W>(value: T) -> impl Fn(U, V, W) -> T {
    move |_, _, _| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// assert_eq!(flip(flip(subtract))(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Turns a curried two-level function back into a binary one.
///
/// `uncurry2(curry2!(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::uncurry2;
///
/// let add = |a: i32| move |b: i32| a + b;
/// assert_eq!(uncurry2(add)(2, 3), 5);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Turns a curried three-level function back into a ternary one.
#[inline]
pub fn uncurry3<A, B, C, D, F, G, H>(function: F) -> impl Fn(A, B, C) -> D
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> D,
{
    move |first, second, third| function(first)(second)(third)
}

/// Fixes the first argument of a binary function.
///
/// The function form of `partial!(f, value, __)`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::papply;
///
/// let add_three = papply(|a: i32, b: i32| a + b, 3);
/// assert_eq!(add_three(4), 7);
/// ```
#[inline]
pub fn papply<A: Clone, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
{
    move |second| function(first.clone(), second)
}

/// Widens a unary function to a binary one that uses only its first argument.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::augment_first;
///
/// let length = augment_first(|text: &str| text.len());
/// assert_eq!(length("four", 99), 4);
/// ```
#[inline]
pub fn augment_first<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> C,
{
    move |first, _| function(first)
}

/// Widens a unary function to a binary one that uses only its second argument.
///
/// Useful where a callback receives an old and a new value but only the new
/// one matters.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::augment_second;
///
/// let on_change = augment_second(|new: u32| new * 10);
/// assert_eq!(on_change(1, 2), 20);
/// ```
#[inline]
pub fn augment_second<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(B) -> C,
{
    move |_, second| function(second)
}

/// Selects which argument [`augment`] passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSelector {
    /// Pass the first argument.
    First,
    /// Pass the second argument.
    Second,
}

/// Widens a unary function to a binary one over the same argument type,
/// passing through the argument chosen by `selector`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::{ParamSelector, augment};
///
/// let pick_first = augment(|value: i32| value, ParamSelector::First);
/// let pick_second = augment(|value: i32| value, ParamSelector::Second);
///
/// assert_eq!(pick_first(1, 2), 1);
/// assert_eq!(pick_second(1, 2), 2);
/// ```
#[inline]
pub fn augment<T, C, F>(function: F, selector: ParamSelector) -> impl Fn(T, T) -> C
where
    F: Fn(T) -> C,
{
    move |first, second| match selector {
        ParamSelector::First => function(first),
        ParamSelector::Second => function(second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_constant2_ignores_both_inputs() {
        let always = constant2("fixed");
        assert_eq!(always(1, 'x'), "fixed");
    }

    #[rstest]
    fn test_uncurry3_applies_in_order() {
        let curried = |a: i32| move |b: i32| move |c: i32| a * 100 + b * 10 + c;
        assert_eq!(uncurry3(curried)(1, 2, 3), 123);
    }

    #[rstest]
    #[case(ParamSelector::First, "left")]
    #[case(ParamSelector::Second, "right")]
    fn test_augment_selects_argument(#[case] selector: ParamSelector, #[case] expected: &str) {
        let echo = augment(|value: &str| value.to_string(), selector);
        assert_eq!(echo("left", "right"), expected);
    }
}
