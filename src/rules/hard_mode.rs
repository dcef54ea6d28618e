//! Hard mode: every revealed hint must be reused

use super::HintSet;
use crate::core::Word;
use thiserror::Error;

/// The first unmet hard-mode constraint of a candidate guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// `column` is 1-based
    #[error("Hard mode: position {column} must be \"{letter}\"")]
    PositionMismatch { column: usize, letter: char },
    #[error("Hard mode: guess must contain \"{letter}\"")]
    MissingLetter { letter: char },
}

/// Check `candidate` against accumulated hints
///
/// Pinned columns are checked first, lowest column first; then the
/// required letters in the order they were revealed.
///
/// # Errors
/// Returns the first violated constraint.
///
/// # Examples
/// ```
/// use neonword::core::{Pattern, Word};
/// use neonword::rules::{HardModeViolation, HintSet, validate_hard_mode};
///
/// let guess = Word::new("rooms").unwrap();
/// let pattern = Pattern::calculate(&guess, &Word::new("robot").unwrap());
/// let hints = HintSet::derive(&guess, &pattern);
///
/// let bad = Word::new("pixel").unwrap();
/// assert_eq!(
///     validate_hard_mode(&bad, &hints),
///     Err(HardModeViolation::PositionMismatch { column: 1, letter: 'R' })
/// );
/// ```
pub fn validate_hard_mode(candidate: &Word, hints: &HintSet) -> Result<(), HardModeViolation> {
    if let Some((column, letter)) = hints
        .pinned_columns()
        .find(|&(column, letter)| candidate.letter_at(column) != letter)
    {
        return Err(HardModeViolation::PositionMismatch {
            column: column + 1,
            letter: char::from(letter),
        });
    }

    if let Some(&letter) = hints
        .required_letters()
        .iter()
        .find(|&&letter| !candidate.contains(letter))
    {
        return Err(HardModeViolation::MissingLetter {
            letter: char::from(letter),
        });
    }

    Ok(())
}
