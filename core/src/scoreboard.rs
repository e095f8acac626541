//! # Scoreboard
//!
//! The original exercise mutated a process-global counter. Here the
//! counter is an explicit value owned by the caller: state goes in, the
//! new total comes out, and nothing is hidden. Single ownership also
//! removes any question of concurrent access.

/// A running score starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    total: i64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds points (possibly negative) and returns the new total.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn add(&mut self, points: i64) -> i64 {
        self.total = self.total.saturating_add(points);
        self.total
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_across_calls() {
        let mut board = Scoreboard::new();
        assert_eq!(board.add(5), 5);
        assert_eq!(board.add(3), 8);
        assert_eq!(board.add(-2), 6);
        assert_eq!(board.total(), 6);
    }

    #[test]
    fn fresh_boards_start_at_zero() {
        assert_eq!(Scoreboard::new().total(), 0);
    }

    #[test]
    fn addition_saturates_at_the_bounds() {
        let mut board = Scoreboard::new();
        board.add(i64::MAX);
        assert_eq!(board.add(1), i64::MAX);
    }
}
