//! Local homebrew overlay.
//!
//! The whole bank is one JSON document under [`storage_keys::HOMEBREW_BANK`].
//! Every write serializes the full bank and stores it with a single `save`
//! call; the in-memory copy is only replaced once that write succeeded.

use std::sync::{Arc, RwLock};

use charbldr_domain::{is_homebrew_index, ResourceType};
use charbldr_shared::records::HOMEBREW_RECORD_VERSION;
use charbldr_shared::{HomebrewBank, HomebrewBankEntry};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::migrations::{homebrew_bank_migrator, MigrationError};
use crate::ports::outbound::{storage_keys, ClockPort, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum HomebrewError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Homebrew bank could not be migrated: {0}")]
    Migration(#[from] MigrationError),

    #[error("Homebrew entry not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid homebrew record: {0}")]
    InvalidRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Homebrew bank lock poisoned")]
    LockPoisoned,
}

impl HomebrewError {
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }
}

pub struct HomebrewStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn ClockPort>,
    bank: RwLock<HomebrewBank>,
}

impl HomebrewStore {
    /// Load the bank from storage, upgrading it to the current version.
    ///
    /// Entries whose object index is not a UUID get a fresh one so they can
    /// never shadow a reference entity. An upgraded bank is written back. A bank that cannot be parsed or
    /// migrated is an error and the stored data is left untouched.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, HomebrewError> {
        let bank = match store.load(storage_keys::HOMEBREW_BANK)? {
            None => HomebrewBank::default(),
            Some(raw) => {
                let migrator = homebrew_bank_migrator();
                let migrated = migrator.migrate_str(&raw)?;
                let upgraded = migrated.was_upgraded(migrator.latest());
                let mut bank: HomebrewBank = serde_json::from_value(migrated.document)
                    .map_err(|e| MigrationError::invalid_document(e.to_string()))?;
                let reindexed = assign_homebrew_indices(&mut bank);
                if upgraded || reindexed > 0 {
                    tracing::info!(
                        from = migrated.from_version,
                        entries = bank.homebrew_bank_entries.len(),
                        reindexed,
                        "Persisting upgraded homebrew bank"
                    );
                    save_bank(store.as_ref(), &bank)?;
                }
                bank
            }
        };

        tracing::debug!(entries = bank.homebrew_bank_entries.len(), "Homebrew bank loaded");

        Ok(Self {
            store,
            clock,
            bank: RwLock::new(bank),
        })
    }

    /// The stored object of type `resource` whose semantic index is `index`.
    pub fn get(&self, resource: ResourceType, index: &str) -> Option<Value> {
        self.read(|bank| {
            bank.homebrew_bank_entries
                .iter()
                .find(|entry| {
                    entry.api_category_name == resource.as_str()
                        && entry.object_index() == Some(index)
                })
                .map(|entry| entry.homebrew_object.clone())
        })
        .flatten()
    }

    /// The entry with storage identity `id`.
    pub fn entry(&self, id: Uuid) -> Option<HomebrewBankEntry> {
        self.read(|bank| {
            bank.homebrew_bank_entries
                .iter()
                .find(|entry| entry.id == id)
                .cloned()
        })
        .flatten()
    }

    /// The entry of type `resource` whose semantic index is `index`.
    pub fn entry_by_index(&self, resource: ResourceType, index: &str) -> Option<HomebrewBankEntry> {
        self.read(|bank| {
            bank.homebrew_bank_entries
                .iter()
                .find(|entry| {
                    entry.api_category_name == resource.as_str()
                        && entry.object_index() == Some(index)
                })
                .cloned()
        })
        .flatten()
    }

    /// Stored objects of type `resource`, in insertion order.
    pub fn get_all_by_resource_type(&self, resource: ResourceType) -> Vec<Value> {
        self.read(|bank| {
            bank.homebrew_bank_entries
                .iter()
                .filter(|entry| entry.api_category_name == resource.as_str())
                .map(|entry| entry.homebrew_object.clone())
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn entries(&self) -> Vec<HomebrewBankEntry> {
        self.read(|bank| bank.homebrew_bank_entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.read(|bank| bank.homebrew_bank_entries.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new homebrew object.
    ///
    /// An object whose `index` is missing or not UUID-shaped gets a fresh UUID
    /// index, so homebrew ids never collide with reference ids.
    pub fn add(
        &self,
        resource: ResourceType,
        mut object: Value,
    ) -> Result<HomebrewBankEntry, HomebrewError> {
        let index = ensure_homebrew_index(&mut object)?;
        let now = self.clock.now();

        self.mutate(|bank| {
            let duplicate = bank.homebrew_bank_entries.iter().any(|entry| {
                entry.api_category_name == resource.as_str()
                    && entry.object_index() == Some(index.as_str())
            });
            if duplicate {
                return Err(HomebrewError::invalid_record(format!(
                    "{} {} already exists",
                    resource, index
                )));
            }

            let entry = HomebrewBankEntry {
                id: Uuid::new_v4(),
                homebrew_object: object,
                api_category_name: resource.as_str().to_string(),
                last_edit: now,
                version: HOMEBREW_RECORD_VERSION,
            };
            bank.homebrew_bank_entries.push(entry.clone());
            Ok(entry)
        })
        .inspect(|entry| {
            tracing::info!(id = %entry.id, resource = %resource, index = %index, "Homebrew entry added");
        })
    }

    /// Replace the object of entry `id`. The semantic index never changes.
    pub fn update(&self, id: Uuid, mut object: Value) -> Result<HomebrewBankEntry, HomebrewError> {
        if !object.is_object() {
            return Err(HomebrewError::invalid_record("homebrew object must be a JSON object"));
        }
        let now = self.clock.now();

        self.mutate(|bank| {
            let entry = bank
                .homebrew_bank_entries
                .iter_mut()
                .find(|entry| entry.id == id)
                .ok_or(HomebrewError::NotFound(id))?;

            if let (Some(index), Some(fields)) =
                (entry.homebrew_object.get("index").cloned(), object.as_object_mut())
            {
                fields.insert("index".to_string(), index);
            }
            entry.homebrew_object = object;
            entry.last_edit = now;
            entry.version = HOMEBREW_RECORD_VERSION;
            Ok(entry.clone())
        })
        .inspect(|_| tracing::info!(id = %id, "Homebrew entry updated"))
    }

    pub fn remove(&self, id: Uuid) -> Result<HomebrewBankEntry, HomebrewError> {
        self.mutate(|bank| {
            let position = bank
                .homebrew_bank_entries
                .iter()
                .position(|entry| entry.id == id)
                .ok_or(HomebrewError::NotFound(id))?;
            Ok(bank.homebrew_bank_entries.remove(position))
        })
        .inspect(|_| tracing::info!(id = %id, "Homebrew entry removed"))
    }

    /// Remove by semantic index; `Ok(None)` if there was nothing to remove.
    pub fn remove_by_index(
        &self,
        resource: ResourceType,
        index: &str,
    ) -> Result<Option<HomebrewBankEntry>, HomebrewError> {
        match self.entry_by_index(resource, index) {
            Some(entry) => self.remove(entry.id).map(Some),
            None => Ok(None),
        }
    }

    /// Merge an exported bank (of any supported version) into this one.
    ///
    /// Entries whose `id` already exists replace the stored entry; others are
    /// appended. Returns the number of imported entries.
    pub fn import_entries(&self, raw: &str) -> Result<usize, HomebrewError> {
        let migrated = homebrew_bank_migrator().migrate_str(raw)?;
        let imported: HomebrewBank = serde_json::from_value(migrated.document)
            .map_err(|e| MigrationError::invalid_document(e.to_string()))?;

        let mut entries = imported.homebrew_bank_entries;
        for entry in entries.iter_mut() {
            ensure_homebrew_index(&mut entry.homebrew_object)?;
        }
        let count = entries.len();

        self.mutate(|bank| {
            for entry in entries {
                match bank
                    .homebrew_bank_entries
                    .iter_mut()
                    .find(|existing| existing.id == entry.id)
                {
                    Some(existing) => *existing = entry,
                    None => bank.homebrew_bank_entries.push(entry),
                }
            }
            Ok(())
        })?;

        tracing::info!(count, "Homebrew entries imported");
        Ok(count)
    }

    /// The current bank as pretty-printed JSON.
    pub fn export(&self) -> Result<String, HomebrewError> {
        let guard = self.bank.read().map_err(|_| HomebrewError::LockPoisoned)?;
        serde_json::to_string_pretty(&*guard).map_err(|e| HomebrewError::Serialization(e.to_string()))
    }

    fn read<T>(&self, f: impl FnOnce(&HomebrewBank) -> T) -> Option<T> {
        match self.bank.read() {
            Ok(guard) => Some(f(&guard)),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for homebrew bank: {}", e);
                None
            }
        }
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut HomebrewBank) -> Result<T, HomebrewError>,
    ) -> Result<T, HomebrewError> {
        let mut guard = self.bank.write().map_err(|_| HomebrewError::LockPoisoned)?;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        save_bank(self.store.as_ref(), &next)?;
        *guard = next;
        Ok(out)
    }
}

fn save_bank(store: &dyn KeyValueStore, bank: &HomebrewBank) -> Result<(), HomebrewError> {
    let raw = serde_json::to_string(bank).map_err(|e| HomebrewError::Serialization(e.to_string()))?;
    store.save(storage_keys::HOMEBREW_BANK, &raw).map_err(|e| {
        tracing::error!(error = %e, "Failed to persist homebrew bank");
        HomebrewError::from(e)
    })
}

/// Returns the number of entries that were given a new index.
fn assign_homebrew_indices(bank: &mut HomebrewBank) -> usize {
    let mut reindexed = 0;
    for entry in bank.homebrew_bank_entries.iter_mut() {
        let before = entry.object_index().map(str::to_string);
        match ensure_homebrew_index(&mut entry.homebrew_object) {
            Ok(index) if before.as_deref() != Some(index.as_str()) => reindexed += 1,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(id = %entry.id, error = %e, "Leaving homebrew entry with invalid object")
            }
        }
    }
    reindexed
}

/// Make sure `object["index"]` is UUID-shaped and return it.
fn ensure_homebrew_index(object: &mut Value) -> Result<String, HomebrewError> {
    let fields = object
        .as_object_mut()
        .ok_or_else(|| HomebrewError::invalid_record("homebrew object must be a JSON object"))?;

    if let Some(index) = fields.get("index").and_then(Value::as_str) {
        if is_homebrew_index(index) {
            return Ok(index.to_string());
        }
        tracing::debug!(index, "Assigning homebrew id to non-UUID index");
    }

    let index = Uuid::new_v4().to_string();
    fields.insert("index".to_string(), Value::from(index.clone()));
    Ok(index)
}
