//! Score a single guess against a chosen answer

use crate::core::{Pattern, Word, WordError};

/// A guess, the answer it was scored against, and the verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Evaluate `guess` against `answer` without any session
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter A-Z word.
///
/// # Examples
/// ```
/// use neonword::commands::score_guess;
///
/// let result = score_guess("alarm", "arena").unwrap();
/// assert_eq!(result.pattern.to_emoji(), "🟩⬛🟨🟨⬛");
/// ```
pub fn score_guess(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;

    Ok(ScoreResult {
        guess,
        answer,
        pattern: Pattern::calculate(&guess, &answer),
    })
}
