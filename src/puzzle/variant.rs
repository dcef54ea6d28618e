//! Game variants and the "is this a legal guess" seam

use crate::core::Word;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Decides whether a complete 5-letter guess may be scored
pub trait GuessDictionary {
    fn accepts(&self, guess: &Word) -> bool;
}

/// Which flavour of the game is being played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Answers and guesses come from a fixed word list
    #[default]
    Words,
    /// Any five letters form an answer or a guess
    Letters,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => f.write_str("words"),
            Self::Letters => f.write_str("letters"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
}

/// Deduplicated, ordered word list with constant-time membership
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| lookup.insert(*w)).collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, lookup })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }
}

impl GuessDictionary for WordList {
    fn accepts(&self, guess: &Word) -> bool {
        self.contains(guess)
    }
}

/// Source of answers and judge of guesses
#[derive(Debug, Clone)]
pub enum Variant {
    Dictionary(WordList),
    FreeLetters,
}

impl Variant {
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Dictionary(_) => VariantKind::Words,
            Self::FreeLetters => VariantKind::Letters,
        }
    }
}

impl GuessDictionary for Variant {
    fn accepts(&self, guess: &Word) -> bool {
        match self {
            Self::Dictionary(list) => list.accepts(guess),
            Self::FreeLetters => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn word_list_rejects_empty() {
        assert_eq!(WordList::new(Vec::new()).unwrap_err(), WordListError::Empty);
    }

    #[test]
    fn word_list_dedupes_in_order() {
        let list = WordList::new(words(&["zebra", "arena", "zebra", "pixel"])).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.words()[0].as_str(), "ZEBRA");
        assert_eq!(list.words()[2].as_str(), "PIXEL");
    }

    #[test]
    fn dictionary_variant_checks_membership() {
        let variant = Variant::Dictionary(WordList::new(words(&["arena", "robot"])).unwrap());
        assert_eq!(variant.kind(), VariantKind::Words);
        assert!(variant.accepts(&Word::new("ROBOT").unwrap()));
        assert!(!variant.accepts(&Word::new("rooms").unwrap()));
    }

    #[test]
    fn free_letters_accepts_anything() {
        let variant = Variant::FreeLetters;
        assert_eq!(variant.kind(), VariantKind::Letters);
        assert!(variant.accepts(&Word::new("qqxzj").unwrap()));
    }
}
