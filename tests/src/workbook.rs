#![cfg(test)]
//! The fixed example table every exercise is specified against.

use std::f64::consts::PI;

use kata_common::error::KataError;
use kata_core::geometry::{circle_properties, rectangle_area};
use kata_core::greeting;
use kata_core::health::bmi;
use kata_core::password::check;
use kata_core::profile::Profile;
use kata_core::scoreboard::Scoreboard;
use kata_core::stats::analyze;
use kata_core::factorial::factorial;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn greetings() {
    assert_eq!(greeting::hello(), "Hello, World!");
    assert_eq!(greeting::personalized("Alice").unwrap(), "Hello, Alice!");
}

#[test]
fn rectangle_table() {
    assert_eq!(rectangle_area(5.0, Some(3.0)).unwrap(), 15.0);
    assert_eq!(rectangle_area(7.0, None).unwrap(), 49.0);
    assert!(rectangle_area(-4.0, Some(5.0)).is_err());
}

#[test]
fn circle_table() {
    let unit = circle_properties(1.0).unwrap();
    assert_close(unit.area, PI);
    assert_close(unit.circumference, 2.0 * PI);

    let two = circle_properties(2.0).unwrap();
    assert_close(two.area, 4.0 * PI);
    assert_close(two.circumference, 4.0 * PI);

    assert!(circle_properties(-1.0).is_err());
}

#[test]
fn bmi_table() {
    assert_eq!(bmi(70.0, 1.75).unwrap(), 22.9);
    assert_eq!(bmi(85.0, 1.80).unwrap(), 26.2);
    assert!(bmi(0.0, 1.75).is_err());
    assert!(bmi(70.0, 0.0).is_err());
}

#[test]
fn scoreboard_running_total() {
    let mut board = Scoreboard::new();
    assert_eq!(board.add(5), 5);
    assert_eq!(board.add(3), 8);
    assert_eq!(board.add(-2), 6);
}

#[test]
fn factorial_table() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
    assert_eq!(factorial(5).unwrap(), 120);
    assert_eq!(factorial(10).unwrap(), 3_628_800);
    assert!(matches!(factorial(-1), Err(KataError::Validation(_))));
}

#[test]
fn stats_table() {
    let summary = analyze(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(summary.sum, 15.0);
    assert_eq!(summary.average, 3.0);
    assert_eq!(summary.maximum, 5.0);
    assert_eq!(summary.minimum, 1.0);

    let summary = analyze(&[-1.0, 0.0, 1.0]).unwrap();
    assert_eq!(summary.sum, 0.0);
    assert_eq!(summary.average, 0.0);
    assert_eq!(summary.maximum, 1.0);
    assert_eq!(summary.minimum, -1.0);

    assert!(matches!(analyze(&[]), Err(KataError::Validation(_))));
}

#[test]
fn profile_table() {
    let alice = Profile::new("Alice", 25, None).unwrap();
    assert_eq!(alice.occupation, "Student");

    let bob = Profile::new("Bob", 30, Some("Engineer")).unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.age, 30);
    assert_eq!(bob.occupation, "Engineer");

    assert!(matches!(
        Profile::new("Alice", -25, None),
        Err(KataError::Validation(_))
    ));
}

#[test]
fn password_truth_table() {
    // One row per single criterion, then the aggregate rows.
    assert!(check("Abc12345").is_valid());
    assert!(!check("abc123").is_valid()); // too short
    assert!(!check("abcdefg1").is_valid()); // no uppercase
    assert!(!check("ABCDEFG1").is_valid()); // no lowercase
    assert!(!check("Abcdefgh").is_valid()); // no digit
    assert!(!check("12345678").is_valid()); // no letters at all
    assert!(!check("").is_valid());
}
