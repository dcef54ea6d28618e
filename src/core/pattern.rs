//! Guess scoring and feedback patterns
//!
//! A pattern holds the five per-column verdicts produced by scoring a guess
//! against the answer:
//! - `Correct` = right letter, right column
//! - `Present` = letter occurs elsewhere in the answer
//! - `Absent` = no unconsumed occurrence left in the answer

use super::Word;
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one letter of a guess
///
/// Variants are ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// True for `Present` and `Correct`
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern([Verdict; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// The per-column verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Repeated letters are never over-counted: if a letter occurs k times
    /// in the guess but only m < k times in the answer, exactly m guess
    /// occurrences are marked (exact matches first, then the leftmost
    /// remaining ones) and the rest are `Absent`.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact column matches `Correct` and consume those answer columns
    /// 2. Second pass: for every other column, scan unconsumed answer columns
    ///    left to right for the same letter; mark `Present` and consume it if found
    ///
    /// # Examples
    /// ```
    /// use neonword::core::{Pattern, Verdict, Word};
    ///
    /// let guess = Word::new("rooms").unwrap();
    /// let answer = Word::new("robot").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.verdicts(),
    ///     &[Verdict::Correct, Verdict::Correct, Verdict::Present, Verdict::Absent, Verdict::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact column matches
        // Allow: Index needed to access guess[i], answer[i], result[i] and consumed[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = Verdict::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: leftmost unconsumed occurrence elsewhere
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Correct {
                continue;
            }

            let found = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]);
            if let Some(j) = found {
                result[i] = Verdict::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬛/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use neonword::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬛' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        Some(Self(verdicts))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use neonword::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬛🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn score(guess: &str, answer: &str) -> [Verdict; 5] {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        *Pattern::calculate(&guess, &answer).verdicts()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
    }

    #[test]
    fn pattern_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn pattern_guess_equals_answer() {
        for word in ["robot", "arena", "zzzzz", "aaaaa", "sonne"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_repeated_guess_letter_single_remaining() {
        // R and O exact; the second O takes the answer's remaining O
        assert_eq!(
            score("rooms", "robot"),
            [Correct, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn pattern_repeated_letters_both_sides() {
        // A exact at 0, second A takes answer column 4, R takes column 1
        assert_eq!(
            score("alarm", "arena"),
            [Correct, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn pattern_exact_match_takes_priority_over_earlier_present() {
        // The O at column 3 is exact, so the O at column 1 has nothing left
        assert_eq!(
            score("xoxox", "abcoe"),
            [Absent, Absent, Absent, Correct, Absent]
        );
    }

    #[test]
    fn pattern_leftmost_occurrences_win() {
        // Only one E in the answer, not at any guessed E column
        assert_eq!(
            score("eeeab", "xyzwe"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn pattern_hits_never_exceed_letter_counts() {
        // Exhaustive over a 3-letter alphabet against answers with repeats
        let alphabet = [b'A', b'B', b'O'];
        let answers = ["ROBOT", "BOOBA", "AAAAA", "OBOAB"];

        for answer in answers {
            let answer = Word::new(answer).unwrap();
            for n in 0..3usize.pow(5) {
                let mut letters = [0u8; 5];
                let mut rest = n;
                for slot in &mut letters {
                    *slot = alphabet[rest % 3];
                    rest /= 3;
                }
                let guess = Word::from_valid_letters(letters);
                let pattern = Pattern::calculate(&guess, &answer);

                for &letter in &alphabet {
                    let hits = (0..5)
                        .filter(|&i| letters[i] == letter && pattern.verdicts()[i].is_hit())
                        .count();
                    assert!(hits <= answer.count_of(letter), "{guess} vs {answer}");
                    assert!(hits <= guess.count_of(letter), "{guess} vs {answer}");
                }
            }
        }
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬛⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.verdicts(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none()); // Too long (6 chars)
        assert!(Pattern::from_str("GYG").is_none()); // Too short
        assert!(Pattern::from_str("GXGGY").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_count_feedback() {
        let pattern = Pattern::new([Present, Correct, Correct, Present, Present]);
        assert_eq!(pattern.count_greens(), 2);
        assert_eq!(pattern.count_yellows(), 3);
    }

    #[test]
    fn verdict_ordering_by_strength() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Correct.is_hit() && Present.is_hit() && !Absent.is_hit());
    }

    #[test]
    fn pattern_serializes_as_verdict_list() {
        let json = serde_json::to_string(&Pattern::new([Correct, Present, Absent, Absent, Correct]))
            .unwrap();
        assert_eq!(
            json,
            r#"["correct","present","absent","absent","correct"]"#
        );
    }
}
