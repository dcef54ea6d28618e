//! Hint accumulation and hard-mode validation

mod hard_mode;
mod hints;

pub use hard_mode::{HardModeViolation, validate_hard_mode};
pub use hints::HintSet;
