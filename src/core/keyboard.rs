//! Best-known verdict per letter, used for keyboard coloring

use super::{Pattern, Verdict, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from letter to the strongest verdict observed for it
///
/// Letters never seen are unknown (`None`). A letter's state only ever
/// upgrades (`absent -> present -> correct`), never downgrades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback(FxHashMap<u8, Verdict>);

impl LetterFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the mapping
    pub fn record(&mut self, guess: &Word, pattern: &Pattern) {
        for (&letter, &verdict) in guess.letters().iter().zip(pattern.verdicts()) {
            let entry = self.0.entry(letter).or_insert(verdict);
            if verdict > *entry {
                *entry = verdict;
            }
        }
    }

    /// Best verdict for a letter, `None` if it has never been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(feedback: &mut LetterFeedback, guess: &str, answer: &str) {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        feedback.record(&guess, &Pattern::calculate(&guess, &answer));
    }

    #[test]
    fn feedback_unknown_letters_are_none() {
        let feedback = LetterFeedback::new();
        assert!(feedback.is_empty());
        assert_eq!(feedback.get(b'A'), None);
    }

    #[test]
    fn feedback_records_best_verdict_within_one_guess() {
        // First O is correct, second O present: O stays correct
        let mut feedback = LetterFeedback::new();
        record(&mut feedback, "rooms", "robot");

        assert_eq!(feedback.get(b'R'), Some(Verdict::Correct));
        assert_eq!(feedback.get(b'O'), Some(Verdict::Correct));
        assert_eq!(feedback.get(b'M'), Some(Verdict::Absent));
        assert_eq!(feedback.get(b's'), Some(Verdict::Absent));
        assert_eq!(feedback.len(), 4);
    }

    #[test]
    fn feedback_never_downgrades() {
        let mut feedback = LetterFeedback::new();
        record(&mut feedback, "tiger", "total"); // T correct
        record(&mut feedback, "start", "total"); // T only present
        assert_eq!(feedback.get(b'T'), Some(Verdict::Correct));

        record(&mut feedback, "laser", "total"); // L present
        record(&mut feedback, "total", "total"); // L correct
        assert_eq!(feedback.get(b'L'), Some(Verdict::Correct));
    }

    #[test]
    fn feedback_takes_strongest_of_repeated_letters() {
        // One A present, the other correct: correct wins
        let mut feedback = LetterFeedback::new();
        record(&mut feedback, "xaxxa", "arena");
        assert_eq!(feedback.get(b'A'), Some(Verdict::Correct));

        // First E present, second E absent: present is kept
        let mut feedback = LetterFeedback::new();
        record(&mut feedback, "eexxx", "arena");
        assert_eq!(feedback.get(b'E'), Some(Verdict::Present));
    }
}
