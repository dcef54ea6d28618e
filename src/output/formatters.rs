//! Formatting utilities for terminal output

use crate::core::{Verdict, Word};
use crate::session::{MAX_ATTEMPTS, PuzzleSession, Status};
use colored::{ColoredString, Colorize};

/// Game name used in share headers
pub const GAME_NAME: &str = "NeonWord";

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Shareable spoiler-free summary of a finished session
///
/// The header carries the date (or `Random`) and the score, `X` for a
/// loss; each following line is one attempt as emoji tiles.
///
/// # Examples
/// ```
/// use neonword::core::Word;
/// use neonword::output::formatters::share_text;
/// use neonword::puzzle::{PuzzleMode, Variant, VariantKind};
/// use neonword::session::PuzzleSession;
///
/// let mut session = PuzzleSession::new(
///     PuzzleMode::daily("2024-01-01"),
///     VariantKind::Letters,
///     Word::new("arena").unwrap(),
/// );
/// assert_eq!(share_text(&session), None);
///
/// for ch in "arena".chars() {
///     session.append_letter(ch);
/// }
/// session.submit_attempt(false, &Variant::FreeLetters).unwrap();
/// assert_eq!(
///     share_text(&session).unwrap(),
///     "NeonWord 2024-01-01 1/6\n🟩🟩🟩🟩🟩"
/// );
/// ```
#[must_use]
pub fn share_text(session: &PuzzleSession) -> Option<String> {
    let score = match session.status() {
        Status::InProgress => return None,
        Status::Won => session.attempts().len().to_string(),
        Status::Lost => "X".to_string(),
    };

    let mut text = format!(
        "{GAME_NAME} {} {score}/{MAX_ATTEMPTS}",
        session.mode().label()
    );
    for attempt in session.attempts() {
        text.push('\n');
        text.push_str(&attempt.pattern.to_emoji());
    }
    Some(text)
}

/// Paint a single letter tile according to its verdict
#[must_use]
pub fn tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let face = format!(" {} ", char::from(letter));
    match verdict {
        Some(Verdict::Correct) => face.black().on_green().bold(),
        Some(Verdict::Present) => face.black().on_yellow().bold(),
        Some(Verdict::Absent) => face.white().on_bright_black(),
        None => face.normal(),
    }
}

/// A scored word as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, verdicts: &[Verdict]) -> String {
    word.letters()
        .iter()
        .zip(verdicts)
        .map(|(&letter, &verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
