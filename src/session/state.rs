//! Puzzle session state machine
//!
//! `in_progress` → `in_progress` on every rejected or non-winning attempt,
//! `in_progress` → `won` on an all-correct attempt, `in_progress` → `lost`
//! after the sixth non-winning attempt. Terminal states are never left.

use super::GuessError;
use crate::core::{LetterFeedback, Pattern, WORD_LENGTH, Word};
use crate::puzzle::{GuessDictionary, PuzzleMode, VariantKind};
use crate::rules::{HintSet, validate_hard_mode};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Number of attempts before a puzzle is lost
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Won => f.write_str("won"),
            Self::Lost => f.write_str("lost"),
        }
    }
}

/// One submitted guess and its verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: Word,
    pub pattern: Pattern,
}

/// How a finished puzzle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Attempts used on a win, 0 on a loss
    pub attempts: usize,
    pub answer: Word,
}

/// Everything an accepted submission changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub attempt: Attempt,
    pub keyboard: LetterFeedback,
    /// Present only on the transition into `won` or `lost`
    pub finished: Option<GameOutcome>,
}

/// A single puzzle being played
///
/// Owns the answer for its whole lifetime. The current attempt index is
/// the number of attempts stored so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSession {
    mode: PuzzleMode,
    variant: VariantKind,
    answer: Word,
    attempts: Vec<Attempt>,
    buffer: String,
    keyboard: LetterFeedback,
    hints: HintSet,
    status: Status,
}

impl PuzzleSession {
    #[must_use]
    pub fn new(mode: PuzzleMode, variant: VariantKind, answer: Word) -> Self {
        Self {
            mode,
            variant,
            answer,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: String::with_capacity(WORD_LENGTH),
            keyboard: LetterFeedback::new(),
            hints: HintSet::new(),
            status: Status::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> &PuzzleMode {
        &self.mode
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> VariantKind {
        self.variant
    }

    /// The hidden answer; renderers should only reveal it once finished
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Zero-based index of the attempt being typed
    #[inline]
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.attempts.len()
    }

    /// Letters typed for the current attempt
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &LetterFeedback {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &HintSet {
        &self.hints
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Final result, once the session is over
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            Status::InProgress => None,
            Status::Won => Some(GameOutcome {
                won: true,
                attempts: self.attempts.len(),
                answer: self.answer,
            }),
            Status::Lost => Some(GameOutcome {
                won: false,
                attempts: 0,
                answer: self.answer,
            }),
        }
    }

    /// Type a letter into the current attempt
    ///
    /// Returns false (and changes nothing) if the session is over, the
    /// attempt already holds five letters, or `ch` is not a letter A-Z.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_finished() || self.buffer.len() >= WORD_LENGTH {
            return false;
        }
        if !ch.is_ascii_alphabetic() {
            return false;
        }

        self.buffer.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter
    ///
    /// Returns false if the session is over or nothing was typed.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_finished() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Score the typed attempt
    ///
    /// Checks run in order: session still running, five letters typed,
    /// dictionary membership, hard-mode hints (when `hard_mode` is set).
    /// Any rejection leaves the session untouched.
    ///
    /// # Errors
    /// Returns the first failing check as a `GuessError`.
    pub fn submit_attempt<D>(
        &mut self,
        hard_mode: bool,
        dictionary: &D,
    ) -> Result<SubmitOutcome, GuessError>
    where
        D: GuessDictionary + ?Sized,
    {
        if self.status.is_finished() {
            return Err(GuessError::SessionOver(self.status));
        }

        let guess = self.typed_word().ok_or(GuessError::IncompleteGuess {
            letters: self.buffer.len(),
        })?;

        if !dictionary.accepts(&guess) {
            return Err(GuessError::NotInWordList(guess));
        }

        if hard_mode {
            validate_hard_mode(&guess, &self.hints)?;
        }

        let pattern = Pattern::calculate(&guess, &self.answer);
        let attempt = Attempt { guess, pattern };

        self.keyboard.record(&guess, &pattern);
        self.hints = HintSet::derive_hints(&guess, &pattern, &self.hints);
        self.attempts.push(attempt);
        self.buffer.clear();

        debug!(
            mode = %self.mode,
            attempt = self.attempts.len(),
            guess = %guess,
            feedback = %pattern.to_emoji(),
            "attempt scored"
        );

        if pattern.is_perfect() {
            self.status = Status::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = Status::Lost;
        }

        let finished = self.outcome();
        if let Some(outcome) = &finished {
            info!(
                mode = %self.mode,
                won = outcome.won,
                attempts = self.attempts.len(),
                "puzzle finished"
            );
        }

        Ok(SubmitOutcome {
            attempt,
            keyboard: self.keyboard.clone(),
            finished,
        })
    }

    /// Check that a restored session is internally coherent
    ///
    /// Replays every attempt against the answer and compares verdicts,
    /// hints, keyboard feedback and status with what was stored.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.attempts.len() > MAX_ATTEMPTS
            || self.buffer.len() > WORD_LENGTH
            || !self.buffer.bytes().all(|b| b.is_ascii_uppercase())
        {
            return false;
        }

        let mut keyboard = LetterFeedback::new();
        let mut hints = HintSet::new();
        let mut won_at = None;

        for (index, attempt) in self.attempts.iter().enumerate() {
            if won_at.is_some() {
                return false;
            }

            let pattern = Pattern::calculate(&attempt.guess, &self.answer);
            if pattern != attempt.pattern {
                return false;
            }

            keyboard.record(&attempt.guess, &pattern);
            hints = HintSet::derive_hints(&attempt.guess, &pattern, &hints);
            if pattern.is_perfect() {
                won_at = Some(index);
            }
        }

        let expected_status = if won_at.is_some() {
            Status::Won
        } else if self.attempts.len() == MAX_ATTEMPTS {
            Status::Lost
        } else {
            Status::InProgress
        };

        expected_status == self.status
            && (self.status == Status::InProgress || self.buffer.is_empty())
            && keyboard == self.keyboard
            && hints == self.hints
    }

    fn typed_word(&self) -> Option<Word> {
        let letters: [u8; WORD_LENGTH] = self.buffer.as_bytes().try_into().ok()?;
        Some(Word::from_valid_letters(letters))
    }
}
