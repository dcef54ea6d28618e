//! Reasons a submission is rejected

use super::Status;
use crate::core::Word;
use crate::rules::HardModeViolation;
use thiserror::Error;

/// A rejected submission
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters: {letters} of 5")]
    IncompleteGuess { letters: usize },
    #[error("Too many letters: {letters} of 5")]
    TooManyLetters { letters: usize },
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
    #[error(transparent)]
    HardMode(#[from] HardModeViolation),
    #[error("The puzzle is already over ({0})")]
    SessionOver(Status),
}
