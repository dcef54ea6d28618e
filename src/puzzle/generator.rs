//! Answer generation for daily and random puzzles

use super::random::SeededRandom;
use super::seed::daily_seed;
use super::variant::{Variant, VariantKind};
use crate::core::{WORD_LENGTH, Word};
use tracing::debug;

const ALPHABET_SIZE: usize = 26;

/// Produces answers from a variant's letter source
///
/// Daily answers are a pure function of the date key; random answers are
/// drawn from a fresh entropy seed on every call.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    variant: Variant,
}

impl PuzzleGenerator {
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self { variant }
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        self.variant.kind()
    }

    /// The answer shared by everyone playing on `date_key`
    ///
    /// # Examples
    /// ```
    /// use neonword::puzzle::{PuzzleGenerator, Variant};
    ///
    /// let generator = PuzzleGenerator::new(Variant::FreeLetters);
    /// assert_eq!(generator.daily_answer("2024-01-01"), generator.daily_answer("2024-01-01"));
    /// ```
    #[must_use]
    pub fn daily_answer(&self, date_key: &str) -> Word {
        let seed = daily_seed(date_key);
        let answer = self.draw(&mut SeededRandom::new(seed));
        debug!(date_key, seed, variant = %self.kind(), "generated daily answer");
        answer
    }

    /// A fresh answer from a non-reproducible seed
    #[must_use]
    pub fn random_answer(&self) -> Word {
        self.draw(&mut SeededRandom::new(rand::random::<u32>()))
    }

    fn draw(&self, rng: &mut SeededRandom) -> Word {
        match &self.variant {
            Variant::Dictionary(list) => list.words()[rng.next_index(list.len())],
            Variant::FreeLetters => {
                let mut letters = [0u8; WORD_LENGTH];
                for slot in &mut letters {
                    *slot = b'A' + rng.next_index(ALPHABET_SIZE) as u8;
                }
                Word::from_valid_letters(letters)
            }
        }
    }
}
