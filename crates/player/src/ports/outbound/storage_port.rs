//! Durable key/value storage port.
//!
//! Implemented by a JSON file on desktop, `localStorage` in the browser and an
//! in-memory map in tests. Values are opaque strings (JSON text in practice).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    /// Persisted data exists but cannot be parsed; it is left as it is
    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Persistent storage abstraction (localStorage/file-based)
///
/// Every call is a single synchronous read or write.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Load a value by key, `Ok(None)` if the key was never written
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save a value under the given key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value by key; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
