//! Unit tests for the Result combinators.
//!
//! Covers the documented behavior of every combinator in `fundamentals::result`:
//! pass-through of the untouched variant, first-error-wins sequencing,
//! seed handling in `choose` and fault capture in `try_`.

#![cfg(feature = "result")]

use fundamentals::error::Fault;
use fundamentals::result;
use fundamentals::shape::Plain;
use rstest::rstest;

// =============================================================================
// map / map_error / either
// =============================================================================

#[rstest]
#[case(Ok(2), Ok(4))]
#[case(Err("e"), Err("e"))]
fn map_doubles_ok_payload(#[case] input: Result<i32, &str>, #[case] expected: Result<i32, &str>) {
    assert_eq!(result::map(input, |x| x * 2), expected);
}

#[rstest]
#[case(Ok(2), Ok(2))]
#[case(Err("four"), Err(4))]
fn map_error_measures_err_payload(
    #[case] input: Result<i32, &str>,
    #[case] expected: Result<i32, usize>,
) {
    assert_eq!(result::map_error(input, str::len), expected);
}

#[rstest]
fn either_keeps_the_variant() {
    let success: Result<i32, &str> = Ok(1);
    let failure: Result<i32, &str> = Err("bad");

    assert_eq!(result::either(success, |x| x.to_string(), str::len), Ok("1".to_string()));
    assert_eq!(result::either(failure, |x| x.to_string(), str::len), Err(3));
}

// =============================================================================
// bind / flat_map / join / or_else
// =============================================================================

fn positive(value: i32) -> Result<i32, String> {
    if value > 0 {
        Ok(value)
    } else {
        Err(format!("{value} is not positive"))
    }
}

#[rstest]
fn bind_returns_function_result_unwrapped() {
    assert_eq!(result::bind(Ok(5), positive), Ok(5));
    assert_eq!(result::bind(Ok(-5), positive), Err("-5 is not positive".to_string()));
}

#[rstest]
fn bind_passes_err_through() {
    let failure: Result<i32, String> = Err("upstream".to_string());
    assert_eq!(result::bind(failure, positive), Err("upstream".to_string()));
}

#[rstest]
fn flat_map_is_bind() {
    assert_eq!(result::flat_map(Ok(3), positive), result::bind(Ok(3), positive));
}

#[rstest]
#[case(Ok(Ok(1)), Ok(1))]
#[case(Ok(Err("inner")), Err("inner"))]
#[case(Err("outer"), Err("outer"))]
fn join_flattens_one_level(
    #[case] input: Result<Result<i32, &str>, &str>,
    #[case] expected: Result<i32, &str>,
) {
    assert_eq!(result::join(input), expected);
}

#[rstest]
fn join_flattens_exactly_one_level() {
    let doubly_nested: Result<Result<Result<i32, ()>, ()>, ()> = Ok(Ok(Ok(1)));
    assert_eq!(result::join(doubly_nested), Ok(Ok(1)));
}

#[rstest]
fn or_else_recovers_only_from_err() {
    let recover = |error: &str| -> Result<i32, String> {
        if error == "retry" {
            Ok(0)
        } else {
            Err(error.to_uppercase())
        }
    };

    assert_eq!(result::or_else(Ok(7), recover), Ok(7));
    assert_eq!(result::or_else(Err("retry"), recover), Ok(0));
    assert_eq!(result::or_else(Err("fatal"), recover), Err("FATAL".to_string()));
}

// =============================================================================
// wrap / wrap_err / unwrap / predicates
// =============================================================================

#[rstest]
fn wrap_plain_value_as_ok() {
    let wrapped: Result<&str, ()> = result::wrap("value");
    assert_eq!(wrapped, Ok("value"));
}

#[rstest]
fn wrap_leaves_result_unchanged() {
    let failure: Result<i32, String> = Err("kept".to_string());
    assert_eq!(result::wrap(failure.clone()), failure);
}

#[rstest]
fn wrap_err_plain_value_as_err() {
    let wrapped: Result<i32, u16> = result::wrap_err(404_u16);
    assert_eq!(wrapped, Err(404));
}

#[rstest]
fn wrap_err_leaves_result_unchanged() {
    let success: Result<i32, u16> = Ok(200);
    assert_eq!(result::wrap_err(success), Ok(200));
}

#[rstest]
fn wrap_caller_type_through_plain() {
    #[derive(Debug, PartialEq)]
    struct Order(u32);

    let wrapped: Result<Order, ()> = result::wrap(Plain(Order(9)));
    assert_eq!(wrapped, Ok(Order(9)));
}

#[rstest]
fn unwrap_returns_absent_for_err() {
    assert_eq!(result::unwrap(Ok::<&str, ()>("x")), Some("x"));
    assert_eq!(result::unwrap(Err::<&str, ()>(())), None);
}

#[rstest]
#[case(Ok(1), 1)]
#[case(Err(()), 99)]
fn unwrap_or_falls_back_to_default(#[case] input: Result<i32, ()>, #[case] expected: i32) {
    assert_eq!(result::unwrap_or(input, 99), expected);
}

#[rstest]
fn predicates_inspect_the_tag() {
    let success: Result<i32, i32> = Ok(1);
    let failure: Result<i32, i32> = Err(1);

    assert!(result::is_ok(&success));
    assert!(!result::is_error(&success));
    assert!(result::is_error(&failure));
    assert!(!result::is_ok(&failure));
}

#[rstest]
fn predicates_are_false_for_non_results() {
    assert!(!result::is_ok(&1_i32));
    assert!(!result::is_error(&1_i32));
    assert!(!result::is_ok(&Some(1)));
    assert!(!result::is_error(&None::<i32>));
    assert!(!result::is_ok(&vec![Ok::<i32, ()>(1)]));
    assert!(!result::is_error(&"Err"));
}

// =============================================================================
// sequence / cat_either
// =============================================================================

#[rstest]
fn sequence_collects_all_ok() {
    assert_eq!(result::sequence([Ok::<i32, i32>(1), Ok(2)]), Ok(vec![1, 2]));
}

#[rstest]
fn sequence_returns_first_error() {
    assert_eq!(result::sequence([Ok(1), Err(2), Ok(3)]), Err(2));
}

#[rstest]
fn sequence_first_error_wins_among_many() {
    assert_eq!(result::sequence([Err::<i32, i32>(1), Err(2)]), Err(1));
}

#[rstest]
fn sequence_preserves_order() {
    let results: Vec<Result<char, ()>> = "zyx".chars().map(Ok).collect();
    assert_eq!(result::sequence(results), Ok(vec!['z', 'y', 'x']));
}

#[rstest]
fn cat_either_maps_ok_and_drops_err() {
    assert_eq!(result::cat_either([Ok(1), Err(2), Ok(3)], |x| x + 1), vec![2, 4]);
}

#[rstest]
fn cat_either_of_only_errors_is_empty() {
    let failures: Vec<Result<i32, &str>> = vec![Err("a"), Err("b")];
    assert!(result::cat_either(failures, |x| x).is_empty());
}

// =============================================================================
// choose
// =============================================================================

#[rstest]
fn choose_returns_first_on_success() {
    let chosen: Result<i32, String> =
        result::choose(10, |seed| Ok::<i32, ()>(seed + 1), |seed| Ok(seed - 1));
    assert_eq!(chosen, Ok(11));
}

#[rstest]
fn choose_gives_second_branch_the_original_seed() {
    let chosen = result::choose(
        10,
        |_| Err::<i32, &str>("first failed"),
        |seed| Ok::<i32, String>(seed * 3),
    );
    assert_eq!(chosen, Ok(30));
}

#[rstest]
fn choose_returns_second_error_when_both_fail() {
    let chosen = result::choose(
        "seed",
        |_| Err::<(), i32>(1),
        |seed: &str| Err::<(), String>(format!("{seed}: both failed")),
    );
    assert_eq!(chosen, Err("seed: both failed".to_string()));
}

// =============================================================================
// try_ / try_fallible
// =============================================================================

fn parse_int(input: &str) -> i32 {
    input.parse().expect("not an integer")
}

#[rstest]
fn try_wraps_normal_completion() {
    assert_eq!(result::try_("42", parse_int), Ok(42));
}

#[rstest]
fn try_captures_the_panic_as_err() {
    let outcome = result::try_("nan", parse_int);

    let fault = outcome.expect_err("parsing \"nan\" must fail");
    assert!(fault.is_panic());
    assert!(
        fault
            .panic_message()
            .is_some_and(|message| message.starts_with("not an integer"))
    );
}

#[rstest]
fn try_fallible_separates_errors_from_panics() {
    let raised = result::try_fallible("nan", |input: &str| input.parse::<i32>());
    assert!(matches!(raised, Err(Fault::Raised(_))));

    let panicked: Result<i32, Fault<std::num::ParseIntError>> =
        result::try_fallible("nan", |input: &str| Ok(parse_int(input)));
    assert!(matches!(panicked, Err(Fault::Panicked { .. })));
}
