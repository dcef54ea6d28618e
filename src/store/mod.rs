//! Persistence
//!
//! A string-keyed store port with file and in-memory backends, and the
//! typed records the game keeps in it.

mod file;
mod memory;
mod records;
mod storage;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{Settings, Statistics};
pub use storage::GameStorage;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for serialized records
pub trait Store {
    /// Read the value stored under `key`, `None` if there is none
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`; removing a missing key is not an error
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
