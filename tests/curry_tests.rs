#![cfg(feature = "compose")]
//! Integration tests for currying, uncurrying and partial application.

use functional_primitives::compose::{uncurry2, uncurry3};
use functional_primitives::{compose, curry2, curry3, curry4, partial};
use rstest::rstest;

fn subtract(minuend: i32, subtrahend: i32) -> i32 {
    minuend - subtrahend
}

fn describe(name: &str, age: u32, city: &str) -> String {
    format!("{name} ({age}) from {city}")
}

// =============================================================================
// curry
// =============================================================================

#[rstest]
#[case(10, 3, 7)]
#[case(0, 5, -5)]
fn test_curry2_equivalent_to_function(
    #[case] minuend: i32,
    #[case] subtrahend: i32,
    #[case] expected: i32,
) {
    assert_eq!(curry2!(subtract)(minuend)(subtrahend), expected);
}

#[rstest]
fn test_curry3_with_borrowed_arguments() {
    let from_paris = curry3!(describe)("Marie")(66);
    assert_eq!(from_paris("Paris"), "Marie (66) from Paris");
}

#[rstest]
fn test_curry4_partial_applications_are_independent() {
    let weighted = |a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d;
    let curried = curry4!(weighted);
    let one = curried(1);
    let one_two = one(2);

    assert_eq!(one_two(3)(4), 1234);
    assert_eq!(one_two(5)(6), 1256);
    assert_eq!(one(9)(9)(9), 1999);
}

#[rstest]
fn test_curry2_with_owned_clone_argument() {
    let join = |words: Vec<String>, separator: &str| words.join(separator);
    let words = curry2!(join)(vec!["a".to_string(), "b".to_string()]);

    assert_eq!(words("-"), "a-b");
    assert_eq!(words(", "), "a, b");
}

// =============================================================================
// uncurry
// =============================================================================

#[rstest]
fn test_uncurry2_inverts_curry2() {
    let round_trip = uncurry2(curry2!(subtract));
    assert_eq!(round_trip(10, 4), subtract(10, 4));
}

#[rstest]
fn test_uncurry3_inverts_curry3() {
    let round_trip = uncurry3(curry3!(describe));
    assert_eq!(round_trip("Alan", 41, "London"), describe("Alan", 41, "London"));
}

// =============================================================================
// partial
// =============================================================================

#[rstest]
fn test_partial_two_arguments() {
    assert_eq!(partial!(subtract, 10, __)(3), 7);
    assert_eq!(partial!(subtract, __, 10)(3), -7);
    assert_eq!(partial!(subtract, 10, 3)(), 7);
    assert_eq!(partial!(subtract, __, __)(10, 3), 7);
}

#[rstest]
#[case("Ada", 36, "London")]
#[case("Grace", 85, "New York")]
fn test_partial_three_arguments(#[case] name: &str, #[case] age: u32, #[case] city: &str) {
    let expected = describe(name, age, city);

    assert_eq!(partial!(describe, name, __, __)(age, city), expected);
    assert_eq!(partial!(describe, __, age, __)(name, city), expected);
    assert_eq!(partial!(describe, __, __, city)(name, age), expected);
    assert_eq!(partial!(describe, name, age, __)(city), expected);
    assert_eq!(partial!(describe, name, __, city)(age), expected);
    assert_eq!(partial!(describe, __, age, city)(name), expected);
    assert_eq!(partial!(describe, name, age, city)(), expected);
    assert_eq!(partial!(describe, __, __, __)(name, age, city), expected);
}

#[rstest]
fn test_partial_inside_compose() {
    let minus_one = partial!(subtract, __, 1);
    let from_ten = partial!(subtract, 10, __);

    assert_eq!(compose!(from_ten, minus_one)(4), 7);
}
