//! # Password validation
//!
//! Four independent criteria, each evaluated unconditionally so every
//! unmet one can be reported, not just the first.

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Per-criterion outcome of checking one candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
}

impl Verdict {
    /// True only when all four criteria hold.
    pub fn is_valid(&self) -> bool {
        self.long_enough && self.has_uppercase && self.has_lowercase && self.has_digit
    }

    /// Labels for every unmet criterion, in a fixed order.
    pub fn failures(&self) -> Vec<&'static str> {
        let checks = [
            (self.long_enough, "at least 8 characters"),
            (self.has_uppercase, "an uppercase letter"),
            (self.has_lowercase, "a lowercase letter"),
            (self.has_digit, "a digit"),
        ];

        checks
            .into_iter()
            .filter(|(passed, _)| !passed)
            .map(|(_, label)| label)
            .collect()
    }
}

/// Evaluates all four criteria over a candidate password.
pub fn check(candidate: &str) -> Verdict {
    Verdict {
        long_enough: candidate.chars().count() >= MIN_LENGTH,
        has_uppercase: candidate.chars().any(|c| c.is_uppercase()),
        has_lowercase: candidate.chars().any(|c| c.is_lowercase()),
        has_digit: candidate.chars().any(|c| c.is_ascii_digit()),
    }
}
