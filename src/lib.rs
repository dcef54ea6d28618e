//! NeonWord
//!
//! A five-letter word puzzle: six attempts, per-letter verdicts, a daily
//! puzzle shared by date and unlimited random puzzles.
//!
//! # Quick Start
//!
//! ```rust
//! use neonword::core::{Pattern, Word};
//!
//! let guess = Word::new("rooms").unwrap();
//! let answer = Word::new("robot").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_emoji(), "🟩🟩🟨⬛⬛");
//! ```
//!
//! A full game with persistence:
//!
//! ```rust
//! use neonword::puzzle::{PuzzleGenerator, Variant};
//! use neonword::session::{Game, Status};
//! use neonword::store::{GameStorage, MemoryStore, Settings};
//!
//! let storage = GameStorage::new(MemoryStore::new());
//! let generator = PuzzleGenerator::new(Variant::FreeLetters);
//! let mut game = Game::open_daily(storage, generator, Settings::default(), "2024-01-01");
//!
//! let outcome = game.guess_word("byxky").unwrap();
//! assert_eq!(game.session().status(), Status::Won);
//! assert!(outcome.finished.is_some());
//! ```

// Core domain types
pub mod core;

// Answer generation and guess dictionaries
pub mod puzzle;

// Hard-mode constraints
pub mod rules;

// Puzzle state machine and game coordinator
pub mod session;

// Persistence
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
