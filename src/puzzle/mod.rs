//! Puzzle generation
//!
//! Deterministic daily answers (seeded from the calendar date) and
//! non-deterministic random answers, for both game variants.

mod generator;
mod mode;
mod random;
mod seed;
mod variant;

pub use generator::PuzzleGenerator;
pub use mode::{DATE_KEY_FORMAT, PuzzleMode, SessionSlot, parse_date_key, today_key};
pub use random::SeededRandom;
pub use seed::daily_seed;
pub use variant::{GuessDictionary, Variant, VariantKind, WordList, WordListError};
