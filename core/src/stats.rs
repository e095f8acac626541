//! # Summary statistics
//!
//! A single pass over a number sequence producing the four fixed summary
//! values: sum, average, maximum, minimum.

use kata_common::error::{KataError, Result};

/// The fixed-key summary of a number sequence.
///
/// For every accepted input, `minimum <= average <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub sum: f64,
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
}

/// Summarizes a non-empty sequence of numbers.
///
/// The average is taken over the true element count. NaN elements are
/// rejected: a single NaN would poison the sum and break the ordering
/// between minimum, average and maximum.
pub fn analyze(numbers: &[f64]) -> Result<Summary> {
    if numbers.is_empty() {
        return Err(KataError::validation("cannot analyze an empty sequence"));
    }
    if let Some(pos) = numbers.iter().position(|n| n.is_nan()) {
        return Err(KataError::validation(format!(
            "element at index {pos} is not a number"
        )));
    }

    let mut sum = 0.0;
    let mut maximum = f64::NEG_INFINITY;
    let mut minimum = f64::INFINITY;

    for &n in numbers {
        sum += n;
        maximum = maximum.max(n);
        minimum = minimum.min(n);
    }

    Ok(Summary {
        sum,
        average: sum / numbers.len() as f64,
        maximum,
        minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_through_five() {
        let summary = analyze(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.sum, 15.0);
        assert_eq!(summary.average, 3.0);
        assert_eq!(summary.maximum, 5.0);
        assert_eq!(summary.minimum, 1.0);
    }

    #[test]
    fn negatives_and_zero() {
        let summary = analyze(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.maximum, 1.0);
        assert_eq!(summary.minimum, -1.0);
    }

    #[test]
    fn single_element_collapses_all_four() {
        let summary = analyze(&[7.5]).unwrap();
        assert_eq!(summary.sum, 7.5);
        assert_eq!(summary.average, 7.5);
        assert_eq!(summary.maximum, 7.5);
        assert_eq!(summary.minimum, 7.5);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(analyze(&[]), Err(KataError::Validation(_))));
    }

    #[test]
    fn nan_elements_are_rejected_with_their_position() {
        let err = analyze(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(
            err,
            KataError::validation("element at index 1 is not a number")
        );
    }

    #[test]
    fn ordering_invariant_holds() {
        let summary = analyze(&[4.0, -2.5, 9.0, 0.0]).unwrap();
        assert!(summary.minimum <= summary.average);
        assert!(summary.average <= summary.maximum);
    }
}
