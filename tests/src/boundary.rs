#![cfg(test)]
//! Raw argument text through `kata_common::input` into the exercises,
//! the way the CLI handlers drive them. Every "wrong kind of value"
//! case surfaces here as a `TypeMismatch` before any exercise runs.

use kata_common::error::KataError;
use kata_common::input;
use kata_core::{factorial, geometry, health, stats};

#[test]
fn bmi_from_text_arguments() {
    let weight = input::parse_number("70").unwrap();
    let height = input::parse_number("1.75").unwrap();
    assert_eq!(health::bmi(weight, height).unwrap(), 22.9);
}

#[test]
fn non_numeric_bmi_arguments_fail_at_the_boundary() {
    assert!(matches!(
        input::parse_number("seventy"),
        Err(KataError::TypeMismatch { .. })
    ));
}

#[test]
fn rectangle_from_text_arguments() {
    let length = input::parse_number("5").unwrap();
    let width = input::parse_number("3").unwrap();
    assert_eq!(geometry::rectangle_area(length, Some(width)).unwrap(), 15.0);
}

#[test]
fn fractional_factorial_argument_is_a_kind_error() {
    let err = input::parse_integer("1.5").unwrap_err();
    assert_eq!(err, KataError::type_mismatch("an integer", "1.5"));
}

#[test]
fn negative_factorial_argument_parses_then_fails_validation() {
    let n = input::parse_integer("-1").unwrap();
    assert!(matches!(
        factorial::factorial(n),
        Err(KataError::Validation(_))
    ));
}

#[test]
fn stats_from_comma_separated_text() {
    let tokens = vec!["1,2,3".to_string(), "4".to_string(), "5".to_string()];
    let numbers = input::parse_number_list(&tokens).unwrap();
    let summary = stats::analyze(&numbers).unwrap();
    assert_eq!(summary.sum, 15.0);
    assert_eq!(summary.average, 3.0);
}

#[test]
fn one_bad_token_fails_the_whole_list() {
    let tokens = vec!["1".to_string(), "2".to_string(), "three".to_string()];
    assert!(matches!(
        input::parse_number_list(&tokens),
        Err(KataError::TypeMismatch { .. })
    ));
}
