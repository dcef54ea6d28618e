//! Accumulated hints revealed by earlier attempts

use crate::core::{Pattern, Verdict, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Constraints every later guess must honour in hard mode
///
/// - `required_by_column`: letters pinned to a column by a `correct` verdict
/// - `required_letters`: letters that must appear somewhere, from any
///   `present` or `correct` verdict, in the order they were first revealed
///
/// Hint sets only ever grow within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    required_by_column: [Option<u8>; WORD_LENGTH],
    required_letters: Vec<u8>,
}

impl HintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hints revealed by a single scored guess
    #[must_use]
    pub fn derive(guess: &Word, pattern: &Pattern) -> Self {
        let mut hints = Self::new();

        for (column, (&letter, &verdict)) in
            guess.letters().iter().zip(pattern.verdicts()).enumerate()
        {
            if verdict == Verdict::Correct {
                hints.required_by_column[column] = Some(letter);
            }
            if verdict.is_hit() {
                hints.require_letter(letter);
            }
        }

        hints
    }

    /// Union of two hint sets; column pins in `newer` win
    #[must_use]
    pub fn merge(&self, newer: &Self) -> Self {
        let mut merged = self.clone();

        for (slot, pinned) in merged
            .required_by_column
            .iter_mut()
            .zip(newer.required_by_column)
        {
            if pinned.is_some() {
                *slot = pinned;
            }
        }

        for &letter in &newer.required_letters {
            merged.require_letter(letter);
        }

        merged
    }

    /// Fold one attempt into `prior`
    ///
    /// # Examples
    /// ```
    /// use neonword::core::{Pattern, Word};
    /// use neonword::rules::HintSet;
    ///
    /// let guess = Word::new("rooms").unwrap();
    /// let pattern = Pattern::calculate(&guess, &Word::new("robot").unwrap());
    /// let hints = HintSet::derive_hints(&guess, &pattern, &HintSet::new());
    ///
    /// assert_eq!(hints.required_at(0), Some(b'R'));
    /// assert_eq!(hints.required_letters(), b"RO");
    /// ```
    #[must_use]
    pub fn derive_hints(guess: &Word, pattern: &Pattern, prior: &Self) -> Self {
        prior.merge(&Self::derive(guess, pattern))
    }

    /// Letter pinned to `column`, if any
    #[inline]
    #[must_use]
    pub fn required_at(&self, column: usize) -> Option<u8> {
        self.required_by_column.get(column).copied().flatten()
    }

    /// Pinned columns in ascending order
    pub fn pinned_columns(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.required_by_column
            .iter()
            .enumerate()
            .filter_map(|(column, pinned)| pinned.map(|letter| (column, letter)))
    }

    #[inline]
    #[must_use]
    pub fn required_letters(&self) -> &[u8] {
        &self.required_letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required_letters.is_empty() && self.required_by_column.iter().all(Option::is_none)
    }

    /// True if every constraint in `other` is also in `self`
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        let columns = other
            .pinned_columns()
            .all(|(column, letter)| self.required_at(column) == Some(letter));
        let letters = other
            .required_letters
            .iter()
            .all(|letter| self.required_letters.contains(letter));
        columns && letters
    }

    fn require_letter(&mut self, letter: u8) {
        if !self.required_letters.contains(&letter) {
            self.required_letters.push(letter);
        }
    }
}
