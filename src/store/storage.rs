//! Typed records on top of a `Store`
//!
//! Unreadable, corrupted or stale records are never surfaced as errors:
//! they are logged and reported as absent, so the caller starts fresh.

use super::{Settings, Statistics, Store, StoreError};
use crate::puzzle::{PuzzleMode, SessionSlot, VariantKind};
use crate::session::PuzzleSession;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const KEY_PREFIX: &str = "neonword_v1";

#[derive(Debug, Clone)]
pub struct GameStorage<S: Store> {
    store: S,
}

impl<S: Store> GameStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    fn session_key(slot: SessionSlot) -> String {
        match slot {
            SessionSlot::Daily => format!("{KEY_PREFIX}_daily_state"),
            SessionSlot::Random => format!("{KEY_PREFIX}_random_state"),
        }
    }

    fn stats_key() -> String {
        format!("{KEY_PREFIX}_stats")
    }

    fn settings_key() -> String {
        format!("{KEY_PREFIX}_settings")
    }

    /// The saved daily session for `date`, if one exists and is still valid
    pub fn load_daily(&self, date: &str, variant: VariantKind) -> Option<PuzzleSession> {
        let session = self.load_slot(SessionSlot::Daily, variant)?;
        let expected = PuzzleMode::daily(date);

        if *session.mode() != expected {
            debug!(stored = %session.mode(), expected = %expected, "discarding stale daily session");
            return None;
        }

        Some(session)
    }

    /// The saved random session, if one exists and is valid
    pub fn load_random(&self, variant: VariantKind) -> Option<PuzzleSession> {
        self.load_slot(SessionSlot::Random, variant)
    }

    fn load_slot(&self, slot: SessionSlot, variant: VariantKind) -> Option<PuzzleSession> {
        let key = Self::session_key(slot);
        let session: PuzzleSession = self.read_json(&key)?;

        if session.mode().slot() != slot {
            warn!(key = key.as_str(), mode = %session.mode(), "discarding session stored in the wrong slot");
            return None;
        }
        if session.variant() != variant {
            debug!(key = key.as_str(), stored = %session.variant(), expected = %variant, "discarding session of another variant");
            return None;
        }
        if !session.is_consistent() {
            warn!(key = key.as_str(), "discarding corrupted session");
            return None;
        }

        Some(session)
    }

    /// Persist a session in the slot its mode belongs to
    ///
    /// # Errors
    /// Returns an error if the record cannot be encoded or written.
    pub fn save_session(&mut self, session: &PuzzleSession) -> Result<(), StoreError> {
        let key = Self::session_key(session.mode().slot());
        self.write_json(&key, session)
    }

    /// Saved statistics, or fresh ones
    pub fn load_stats(&self) -> Statistics {
        self.read_json(&Self::stats_key()).unwrap_or_default()
    }

    /// # Errors
    /// Returns an error if the record cannot be encoded or written.
    pub fn save_stats(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.write_json(&Self::stats_key(), stats)
    }

    /// Delete saved statistics; the next load starts from zero
    ///
    /// # Errors
    /// Returns an error if the record cannot be removed.
    pub fn clear_stats(&mut self) -> Result<(), StoreError> {
        self.store.remove(&Self::stats_key())
    }

    /// Saved settings, or defaults
    pub fn load_settings(&self) -> Settings {
        self.read_json(&Self::settings_key()).unwrap_or_default()
    }

    /// # Errors
    /// Returns an error if the record cannot be encoded or written.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write_json(&Self::settings_key(), settings)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable record");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.write(key, &raw)
    }
}
