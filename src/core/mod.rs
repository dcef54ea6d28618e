//! Core domain types for the word game
//!
//! Pure types with no I/O: words, verdicts, guess scoring and per-letter feedback.

mod keyboard;
mod pattern;
mod word;

pub use keyboard::LetterFeedback;
pub use pattern::{Pattern, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
