//! Puzzle sessions and the game coordinator

pub mod engine;
pub mod error;
pub mod state;

pub use engine::Game;
pub use error::GuessError;
pub use state::{Attempt, GameOutcome, MAX_ATTEMPTS, PuzzleSession, Status, SubmitOutcome};
