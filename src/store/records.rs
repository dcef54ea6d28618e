//! Player statistics and settings records

use crate::puzzle::VariantKind;
use crate::session::{GameOutcome, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};

/// Aggregate results over all finished puzzles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Wins by attempt count; index 0 is a win on the first attempt
    pub distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    /// Fold one finished puzzle in
    ///
    /// `attempts` is the number of attempts used on a win and ignored on a loss.
    pub fn record(&mut self, won: bool, attempts: usize) {
        self.played += 1;

        if won {
            self.won += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            if (1..=MAX_ATTEMPTS).contains(&attempts) {
                self.distribution[attempts - 1] += 1;
            }
        } else {
            self.streak = 0;
        }
    }

    pub fn record_outcome(&mut self, outcome: &GameOutcome) {
        self.record(outcome.won, outcome.attempts);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of played puzzles that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }

    /// Largest histogram bucket, at least 1 so it can be used as a divisor
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0).max(1)
    }
}

/// Persisted player preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hard_mode: bool,
    pub variant: VariantKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_record_win_and_loss() {
        let mut stats = Statistics::default();
        stats.record(true, 3);
        stats.record(true, 1);
        stats.record(false, 0);
        stats.record(true, 6);

        assert_eq!(stats.played, 4);
        assert_eq!(stats.won, 3);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.distribution, [1, 0, 1, 0, 0, 1]);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn statistics_ignore_out_of_range_attempts() {
        let mut stats = Statistics::default();
        stats.record(true, 0);
        stats.record(true, 7);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.distribution, [0; 6]);
    }

    #[test]
    fn statistics_empty_defaults() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.max_bucket(), 1);
    }

    #[test]
    fn statistics_reset() {
        let mut stats = Statistics::default();
        stats.record(true, 2);
        stats.reset();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn records_fill_missing_fields_with_defaults() {
        let stats: Statistics = serde_json::from_str(r#"{"played":5,"won":2}"#).unwrap();
        assert_eq!(stats.played, 5);
        assert_eq!(stats.streak, 0);

        let settings: Settings = serde_json::from_str(r#"{"hard_mode":true}"#).unwrap();
        assert!(settings.hard_mode);
        assert_eq!(settings.variant, VariantKind::Words);
    }
}
