//! # Plane geometry exercises
//!
//! Rectangle area with an optional width (a missing width means a square)
//! and the two standard circle properties computed together.

use std::f64::consts::PI;

use kata_common::error::{KataError, Result};

/// Area and circumference of a circle, computed in one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub area: f64,
    pub circumference: f64,
}

/// Computes the area of a rectangle.
///
/// When `width` is `None` the rectangle is a square of side `length`.
/// Negative dimensions are rejected; zero is a legal degenerate rectangle.
pub fn rectangle_area(length: f64, width: Option<f64>) -> Result<f64> {
    let width = width.unwrap_or(length);

    if length < 0.0 {
        return Err(KataError::validation(format!(
            "length must not be negative, got {length}"
        )));
    }
    if width < 0.0 {
        return Err(KataError::validation(format!(
            "width must not be negative, got {width}"
        )));
    }

    Ok(length * width)
}

/// Computes area and circumference for a circle of the given radius.
pub fn circle_properties(radius: f64) -> Result<Circle> {
    if radius < 0.0 {
        return Err(KataError::validation(format!(
            "radius must not be negative, got {radius}"
        )));
    }

    Ok(Circle {
        area: PI * radius * radius,
        circumference: 2.0 * PI * radius,
    })
}
