//! # Boundary input parsing
//!
//! Every value entering the workbook arrives as raw text. This module is
//! the single place where text becomes a typed number; nothing downstream
//! coerces. A token of the wrong kind fails here with
//! [`KataError::TypeMismatch`], so the exercises themselves only ever see
//! properly typed values.

use crate::error::{KataError, Result};

/// Parses a token into a floating-point number.
///
/// Accepts anything `f64` can represent, including negatives and
/// fractional values. Whitespace around the token is ignored.
pub fn parse_number(token: &str) -> Result<f64> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| KataError::type_mismatch("a number", trimmed))
}

/// Parses a token into an integer.
///
/// Fractional text like `1.5` is a kind error, not a rounding candidate.
pub fn parse_integer(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| KataError::type_mismatch("an integer", trimmed))
}

/// Parses a list of tokens into numbers.
///
/// Each token may itself be a comma-separated list (e.g. `1,2,3`), so both
/// `kata stats 1 2 3` and `kata stats 1,2,3` work. Empty fragments between
/// commas are skipped; any non-numeric fragment fails the whole list.
pub fn parse_number_list(tokens: &[String]) -> Result<Vec<f64>> {
    let mut numbers = Vec::new();

    for token in tokens {
        for fragment in token.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            numbers.push(parse_number(fragment)?);
        }
    }

    Ok(numbers)
}
