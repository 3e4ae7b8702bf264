//! Currying macros.
//!
//! `curryN!(f)` turns an `N`-argument function into `N` nested one-argument
//! closures: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
//!
//! The function is shared between the nested closures through an
//! [`Rc`](std::rc::Rc), and every argument except the last is cloned each time
//! the innermost closure runs. Partial applications can therefore be called
//! any number of times, but the returned closures are neither `Send` nor
//! `Sync`.
//!
//! The inverse operations are [`uncurry2`](super::uncurry2) and
//! [`uncurry3`](super::uncurry3).

/// Curries a two-argument function.
///
/// The first argument must be [`Clone`].
///
/// # Examples
///
/// ```
/// use functional_primitives::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let triple = curried(3);
///
/// assert_eq!(triple(5), 15);
/// assert_eq!(triple(7), 21);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// The first two arguments must be [`Clone`].
///
/// # Examples
///
/// ```
/// use functional_primitives::curry3;
///
/// fn greet(greeting: &str, name: &str, punctuation: char) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = curry3!(greet)("Hello");
/// assert_eq!(hello("Ada")('!'), "Hello, Ada!");
/// assert_eq!(hello("Grace")('?'), "Hello, Grace?");
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// The first three arguments must be [`Clone`].
///
/// # Examples
///
/// ```
/// use functional_primitives::curry4;
///
/// fn sum(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_curry2_reuses_partial_application() {
        let concat = |left: String, right: &str| left + right;
        let curried = curry2!(concat);
        let hello = curried(String::from("hello "));

        assert_eq!(hello("world"), "hello world");
        assert_eq!(hello("there"), "hello there");
    }

    #[test]
    fn test_curry3_each_level_is_reusable() {
        let add = |a: i32, b: i32, c: i32| a + b + c;
        let curried = curry3!(add);
        let with_one = curried(1);
        let with_one_two = with_one(2);

        assert_eq!(with_one_two(3), 6);
        assert_eq!(with_one(10)(10), 21);
    }
}
