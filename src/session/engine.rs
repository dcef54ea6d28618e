//! Game coordinator
//!
//! Owns the active session together with its collaborators: the puzzle
//! generator, the storage port, settings and statistics. Every mutating
//! operation persists the session afterwards; terminal transitions also
//! update and persist statistics exactly once.

use super::{GuessError, PuzzleSession, SubmitOutcome};
use crate::core::WORD_LENGTH;
use crate::puzzle::{PuzzleGenerator, PuzzleMode};
use crate::store::{GameStorage, Settings, Statistics, Store};
use tracing::{info, warn};

pub struct Game<S: Store> {
    storage: GameStorage<S>,
    generator: PuzzleGenerator,
    settings: Settings,
    stats: Statistics,
    session: PuzzleSession,
}

impl<S: Store> Game<S> {
    /// Resume today's daily puzzle, or start it if there is no valid record
    pub fn open_daily(
        storage: GameStorage<S>,
        generator: PuzzleGenerator,
        settings: Settings,
        date_key: &str,
    ) -> Self {
        let session = storage
            .load_daily(date_key, generator.kind())
            .unwrap_or_else(|| fresh_daily(&generator, date_key));
        Self::assemble(storage, generator, settings, session)
    }

    /// Resume the saved random puzzle, or start a new one
    pub fn open_random(
        storage: GameStorage<S>,
        generator: PuzzleGenerator,
        settings: Settings,
    ) -> Self {
        let session = storage
            .load_random(generator.kind())
            .unwrap_or_else(|| fresh_random(&generator));
        Self::assemble(storage, generator, settings, session)
    }

    fn assemble(
        storage: GameStorage<S>,
        generator: PuzzleGenerator,
        settings: Settings,
        session: PuzzleSession,
    ) -> Self {
        let stats = storage.load_stats();
        let mut game = Self {
            storage,
            generator,
            settings,
            stats,
            session,
        };
        game.persist_session();
        game
    }

    /// Switch to the daily puzzle of `date_key`, resuming it if saved
    pub fn switch_to_daily(&mut self, date_key: &str) {
        self.session = self
            .storage
            .load_daily(date_key, self.generator.kind())
            .unwrap_or_else(|| fresh_daily(&self.generator, date_key));
        self.persist_session();
    }

    /// Replace the random slot with a brand new random puzzle
    pub fn start_random(&mut self) {
        self.session = fresh_random(&self.generator);
        self.persist_session();
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &PuzzleSession {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub const fn generator(&self) -> &PuzzleGenerator {
        &self.generator
    }

    #[must_use]
    pub fn storage(&self) -> &GameStorage<S> {
        &self.storage
    }

    pub fn type_letter(&mut self, ch: char) -> bool {
        let changed = self.session.append_letter(ch);
        if changed {
            self.persist_session();
        }
        changed
    }

    pub fn delete_letter(&mut self) -> bool {
        let changed = self.session.delete_letter();
        if changed {
            self.persist_session();
        }
        changed
    }

    /// Submit the typed attempt under the current settings
    ///
    /// # Errors
    /// Returns the rejection reason; the session is unchanged in that case.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GuessError> {
        let outcome = self
            .session
            .submit_attempt(self.settings.hard_mode, self.generator.variant())?;

        self.persist_session();

        if let Some(finished) = &outcome.finished {
            self.stats.record_outcome(finished);
            self.persist_stats();
        }

        Ok(outcome)
    }

    /// Replace the typed letters with `text` and submit it
    ///
    /// Characters other than A-Z are dropped while typing, so they surface
    /// as an incomplete guess. More than five letters is rejected before
    /// anything is typed.
    ///
    /// # Errors
    /// Returns the rejection reason; the typed letters stay in the buffer.
    pub fn guess_word(&mut self, text: &str) -> Result<SubmitOutcome, GuessError> {
        if self.session.status().is_finished() {
            return Err(GuessError::SessionOver(self.session.status()));
        }

        let text = text.trim();
        let letters = text.chars().filter(char::is_ascii_alphabetic).count();
        if letters > WORD_LENGTH {
            return Err(GuessError::TooManyLetters { letters });
        }

        while self.session.delete_letter() {}
        for ch in text.chars() {
            self.session.append_letter(ch);
        }
        self.submit()
    }

    pub fn set_hard_mode(&mut self, enabled: bool) {
        self.settings.hard_mode = enabled;
        self.persist_settings();
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        if let Err(e) = self.storage.clear_stats() {
            warn!(error = %e, "failed to clear statistics");
        }
    }

    fn persist_session(&mut self) {
        if let Err(e) = self.storage.save_session(&self.session) {
            warn!(error = %e, "failed to save session");
        }
    }

    fn persist_stats(&mut self) {
        if let Err(e) = self.storage.save_stats(&self.stats) {
            warn!(error = %e, "failed to save statistics");
        }
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.storage.save_settings(&self.settings) {
            warn!(error = %e, "failed to save settings");
        }
    }
}

fn fresh_daily(generator: &PuzzleGenerator, date_key: &str) -> PuzzleSession {
    info!(date_key, variant = %generator.kind(), "starting daily puzzle");
    PuzzleSession::new(
        PuzzleMode::daily(date_key),
        generator.kind(),
        generator.daily_answer(date_key),
    )
}

fn fresh_random(generator: &PuzzleGenerator) -> PuzzleSession {
    let mode = PuzzleMode::random_now();
    info!(mode = %mode, variant = %generator.kind(), "starting random puzzle");
    PuzzleSession::new(mode, generator.kind(), generator.random_answer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::puzzle::{Variant, WordList};
    use crate::rules::HardModeViolation;
    use crate::session::Status;
    use crate::store::MemoryStore;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    const DAY: &str = "2024-01-01";

    fn letters_generator() -> PuzzleGenerator {
        PuzzleGenerator::new(Variant::FreeLetters)
    }

    fn words_generator() -> PuzzleGenerator {
        PuzzleGenerator::new(Variant::Dictionary(
            WordList::new(words_from_slice(WORDS)).unwrap(),
        ))
    }

    fn daily_game(settings: Settings) -> Game<MemoryStore> {
        Game::open_daily(
            GameStorage::new(MemoryStore::new()),
            letters_generator(),
            settings,
            DAY,
        )
    }

    fn reopen(game: Game<MemoryStore>, date: &str) -> Game<MemoryStore> {
        let settings = *game.settings();
        let generator = game.generator.clone();
        Game::open_daily(game.storage, generator, settings, date)
    }

    #[test]
    fn open_daily_generates_the_days_answer() {
        let game = daily_game(Settings::default());
        assert_eq!(*game.session().mode(), PuzzleMode::daily(DAY));
        assert_eq!(game.session().answer().as_str(), "BYXKY");
        assert_eq!(game.session().status(), Status::InProgress);
    }

    #[test]
    fn daily_progress_survives_reopening() {
        let mut game = daily_game(Settings::default());
        game.guess_word("pixel").unwrap();
        game.type_letter('a');
        game.type_letter('b');

        let game = reopen(game, DAY);
        assert_eq!(game.session().attempts().len(), 1);
        assert_eq!(game.session().buffer(), "AB");
    }

    #[test]
    fn guess_word_rejects_extra_letters() {
        let mut game = daily_game(Settings::default());
        game.type_letter('p');

        assert_eq!(
            game.guess_word("byxkyzzz"),
            Err(GuessError::TooManyLetters { letters: 8 })
        );
        assert_eq!(
            game.guess_word("robots"),
            Err(GuessError::TooManyLetters { letters: 6 })
        );
        assert_eq!(game.session().status(), Status::InProgress);
        assert!(game.session().attempts().is_empty());
        assert_eq!(game.session().buffer(), "P");

        // Surrounding whitespace is not counted
        assert!(game.guess_word("  byxky \n").unwrap().finished.is_some());
    }

    #[test]
    fn next_day_starts_fresh() {
        let mut game = daily_game(Settings::default());
        game.guess_word("pixel").unwrap();

        let game = reopen(game, "2024-01-02");
        assert!(game.session().attempts().is_empty());
        assert_eq!(game.session().answer().as_str(), "BEPKO");
    }

    #[test]
    fn win_records_statistics_once() {
        let mut game = daily_game(Settings::default());
        game.guess_word("pixel").unwrap();
        let outcome = game.guess_word("byxky").unwrap();

        let finished = outcome.finished.unwrap();
        assert!(finished.won);
        assert_eq!(finished.attempts, 2);
        assert_eq!(game.stats().played, 1);
        assert_eq!(game.stats().distribution[1], 1);

        assert_eq!(
            game.guess_word("byxky"),
            Err(GuessError::SessionOver(Status::Won))
        );
        assert_eq!(game.stats().played, 1);

        // Statistics are persisted, and a finished daily stays finished
        let game = reopen(game, DAY);
        assert_eq!(game.stats().won, 1);
        assert_eq!(game.session().status(), Status::Won);
    }

    #[test]
    fn loss_resets_streak() {
        let mut game = daily_game(Settings::default());
        let mut stats = Statistics::default();
        stats.record(true, 3);
        game.storage.save_stats(&stats).unwrap();
        let mut game = reopen(game, DAY);
        assert_eq!(game.stats().streak, 1);

        // BYXKY has no Q
        for _ in 0..5 {
            assert!(game.guess_word("qqqqq").unwrap().finished.is_none());
        }
        let finished = game.guess_word("qqqqq").unwrap().finished.unwrap();

        assert_eq!(game.session().status(), Status::Lost);
        assert!(!finished.won);
        assert_eq!(finished.attempts, 0);
        assert_eq!(game.stats().played, 2);
        assert_eq!(game.stats().won, 1);
        assert_eq!(game.stats().streak, 0);
        assert_eq!(game.stats().best_streak, 1);
        assert_eq!(game.stats().distribution, stats.distribution);
        assert_eq!(game.storage().load_stats(), *game.stats());
    }

    #[test]
    fn hard_mode_setting_is_enforced_and_persisted() {
        let mut game = daily_game(Settings::default());
        game.set_hard_mode(true);

        // BYXKY: B pinned at column 1
        game.guess_word("bxxxx").unwrap();
        assert_eq!(
            game.guess_word("xbxxx"),
            Err(GuessError::HardMode(HardModeViolation::PositionMismatch {
                column: 1,
                letter: 'B'
            }))
        );
        assert_eq!(game.session().attempts().len(), 1);
        assert!(game.storage().load_settings().hard_mode);
    }

    #[test]
    fn random_game_does_not_touch_daily_slot() {
        let mut game = daily_game(Settings::default());
        game.guess_word("pixel").unwrap();

        game.start_random();
        assert!(!game.session().mode().is_daily());
        game.guess_word("arena").unwrap();

        game.switch_to_daily(DAY);
        assert_eq!(game.session().attempts().len(), 1);
        assert_eq!(game.session().attempts()[0].guess.as_str(), "PIXEL");
    }

    #[test]
    fn open_random_resumes_saved_random_game() {
        let mut game = daily_game(Settings::default());
        game.start_random();
        game.guess_word("arena").unwrap();
        let answer = *game.session().answer();

        let resumed = Game::open_random(game.storage, letters_generator(), Settings::default());
        assert_eq!(*resumed.session().answer(), answer);
        assert_eq!(resumed.session().attempts().len(), 1);
    }

    #[test]
    fn dictionary_variant_rejects_unknown_words() {
        let mut game = Game::open_daily(
            GameStorage::new(MemoryStore::new()),
            words_generator(),
            Settings::default(),
            DAY,
        );
        assert_eq!(game.session().answer().as_str(), "AUDIO");

        assert_eq!(
            game.guess_word("qqqqq"),
            Err(GuessError::NotInWordList(Word::new("qqqqq").unwrap()))
        );
        assert!(game.session().attempts().is_empty());

        let outcome = game.guess_word("radio").unwrap();
        assert!(outcome.finished.is_none());
    }

    #[test]
    fn guess_word_reports_incomplete_input() {
        let mut game = daily_game(Settings::default());
        assert_eq!(
            game.guess_word("ab1"),
            Err(GuessError::IncompleteGuess { letters: 2 })
        );
        assert_eq!(game.session().buffer(), "AB");
    }

    #[test]
    fn reset_stats_clears_and_persists() {
        let mut game = daily_game(Settings::default());
        game.guess_word("byxky").unwrap();
        game.reset_stats();

        assert_eq!(*game.stats(), Statistics::default());
        assert_eq!(game.storage().load_stats(), Statistics::default());
    }
}
