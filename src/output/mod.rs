//! Terminal output formatting
//!
//! Display utilities for CLI results and share text.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_daily_info, print_keyboard, print_outcome, print_score_result,
    print_settings, print_statistics,
};
pub use formatters::share_text;
