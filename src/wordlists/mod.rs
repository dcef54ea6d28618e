//! Embedded dictionary and word list loading
//!
//! The same list serves as the answer pool and, in the dictionary
//! variant, as the set of accepted guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
