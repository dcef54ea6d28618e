//! Puzzle modes: the shared daily puzzle or a private random one

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Format of daily puzzle keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Which puzzle a session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PuzzleMode {
    /// Shared puzzle of one calendar day, keyed `YYYY-MM-DD`
    Daily { date: String },
    /// Private puzzle, identified by the millisecond timestamp it started at
    Random { token: u64 },
}

/// Storage slot a session occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSlot {
    Daily,
    Random,
}

impl PuzzleMode {
    #[must_use]
    pub fn daily(date: impl Into<String>) -> Self {
        Self::Daily { date: date.into() }
    }

    /// A random-mode identity stamped with the current wall-clock time
    #[must_use]
    pub fn random_now() -> Self {
        let token = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        Self::Random { token }
    }

    #[must_use]
    pub const fn slot(&self) -> SessionSlot {
        match self {
            Self::Daily { .. } => SessionSlot::Daily,
            Self::Random { .. } => SessionSlot::Random,
        }
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily { .. })
    }

    /// Short label for headers and share text: the date, or `Random`
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Daily { date } => date,
            Self::Random { .. } => "Random",
        }
    }
}

impl fmt::Display for PuzzleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { date } => write!(f, "daily:{date}"),
            Self::Random { token } => write!(f, "random:{token}"),
        }
    }
}

/// Today's local calendar date as a puzzle key
#[must_use]
pub fn today_key() -> String {
    Local::now().date_naive().format(DATE_KEY_FORMAT).to_string()
}

/// Validate and normalize a user-supplied date key
///
/// # Errors
/// Returns an error if the text is not a real `YYYY-MM-DD` date.
pub fn parse_date_key(text: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(text.trim(), DATE_KEY_FORMAT)?;
    Ok(date.format(DATE_KEY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display_is_qualified_identifier() {
        assert_eq!(PuzzleMode::daily("2024-01-01").to_string(), "daily:2024-01-01");
        assert_eq!(
            PuzzleMode::Random { token: 1_700_000 }.to_string(),
            "random:1700000"
        );
    }

    #[test]
    fn mode_slots_and_labels() {
        let daily = PuzzleMode::daily("2024-03-09");
        assert_eq!(daily.slot(), SessionSlot::Daily);
        assert!(daily.is_daily());
        assert_eq!(daily.label(), "2024-03-09");

        let random = PuzzleMode::random_now();
        assert_eq!(random.slot(), SessionSlot::Random);
        assert_eq!(random.label(), "Random");
    }

    #[test]
    fn mode_serde_is_tagged() {
        let json = serde_json::to_string(&PuzzleMode::daily("2024-01-01")).unwrap();
        assert_eq!(json, r#"{"kind":"daily","date":"2024-01-01"}"#);

        let back: PuzzleMode = serde_json::from_str(r#"{"kind":"random","token":5}"#).unwrap();
        assert_eq!(back, PuzzleMode::Random { token: 5 });
    }

    #[test]
    fn today_key_is_parseable() {
        let today = today_key();
        assert_eq!(today.len(), 10);
        assert_eq!(parse_date_key(&today).unwrap(), today);
    }

    #[test]
    fn parse_date_key_rejects_invalid_dates() {
        assert_eq!(parse_date_key(" 2024-02-29 ").unwrap(), "2024-02-29");
        assert!(parse_date_key("2023-02-29").is_err());
        assert!(parse_date_key("yesterday").is_err());
    }
}
