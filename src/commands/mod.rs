//! Command implementations

pub mod daily;
pub mod score;
pub mod simple;

pub use daily::{DailyInfo, daily_info};
pub use score::{ScoreResult, score_guess};
pub use simple::{LineCommand, run_simple};
