//! Facts about a day's puzzle

use crate::core::Word;
use crate::puzzle::{PuzzleGenerator, VariantKind, daily_seed};

/// Seed and answer of the puzzle for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInfo {
    pub date: String,
    pub seed: u32,
    pub variant: VariantKind,
    pub answer: Word,
}

/// Compute the daily puzzle for `date_key` under the generator's variant
#[must_use]
pub fn daily_info(generator: &PuzzleGenerator, date_key: &str) -> DailyInfo {
    DailyInfo {
        date: date_key.to_string(),
        seed: daily_seed(date_key),
        variant: generator.kind(),
        answer: generator.daily_answer(date_key),
    }
}
