//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::Duration;

use directories::ProjectDirs;

use crate::ports::outbound::{KeyValueStore, SleepPort, StorageError};

/// Platform-specific data directory:
/// - Linux: ~/.config/charbldr/player
/// - macOS: ~/Library/Application Support/io.charbldr.player
/// - Windows: C:\Users\<User>\AppData\Roaming\charbldr\player
///
/// Falls back to the current directory if project dirs are unavailable.
pub fn default_storage_dir() -> PathBuf {
    ProjectDirs::from("io", "charbldr", "player")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Desktop key/value store with file-based persistence
///
/// All keys live in one JSON object file. Every write rewrites the whole file
/// through a temporary sibling and a rename, so a crash mid-write leaves the
/// previous contents intact.
#[derive(Debug)]
pub struct FileKeyValueStore {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory copy of stored values
    cache: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open (or lazily create) the store at `storage_path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or parsed
    /// is an error and is never written to.
    pub fn open(storage_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            let data = fs::read_to_string(&storage_path).map_err(|e| {
                tracing::error!(path = ?storage_path, error = %e, "Failed to read storage file");
                StorageError::io(format!("{}: {}", storage_path.display(), e))
            })?;
            serde_json::from_str::<BTreeMap<String, String>>(&data).map_err(|e| {
                tracing::error!(path = ?storage_path, error = %e, "Failed to parse storage file");
                StorageError::Corrupt(format!("{}: {}", storage_path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = ?storage_path, keys = cache.len(), "File storage initialized");

        Ok(Self {
            storage_path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!(error = %e, "Failed to create storage directory");
                    StorageError::io(e.to_string())
                })?;
            }
        }

        let data = serde_json::to_string_pretty(values).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize storage data");
            StorageError::io(e.to_string())
        })?;

        let temp_path = self.storage_path.with_extension("json.tmp");
        fs::write(&temp_path, data)
            .and_then(|_| fs::rename(&temp_path, &self.storage_path))
            .map_err(|e| {
                tracing::error!(path = ?self.storage_path, error = %e, "Failed to write storage file");
                StorageError::io(e.to_string())
            })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.cache.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

/// Desktop sleep using the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

#[async_trait::async_trait]
impl SleepPort for TokioSleep {
    async fn sleep_ms(&self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
