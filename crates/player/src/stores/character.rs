//! Character persistence.
//!
//! Characters are stored per slot under `character/{slot}`. Every document read
//! from storage or imported by the user goes through the character migration
//! chain first.

use std::sync::Arc;

use charbldr_shared::CharacterDocument;
use thiserror::Error;

use crate::migrations::{character_migrator, MigrationError};
use crate::ports::outbound::{storage_keys, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum CharacterStoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Character could not be migrated: {0}")]
    Migration(#[from] MigrationError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub struct CharacterStore {
    store: Arc<dyn KeyValueStore>,
}

impl CharacterStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(slot: &str) -> String {
        format!("{}{}", storage_keys::CHARACTER_PREFIX, slot)
    }

    /// Load and upgrade the character in `slot`. An upgraded document is
    /// written back.
    pub fn load(&self, slot: &str) -> Result<Option<CharacterDocument>, CharacterStoreError> {
        let Some(raw) = self.store.load(&Self::key(slot))? else {
            return Ok(None);
        };

        let (document, upgraded) = parse(&raw)?;
        if upgraded {
            tracing::info!(slot, "Persisting upgraded character");
            self.save(slot, &document)?;
        }
        Ok(Some(document))
    }

    pub fn save(&self, slot: &str, document: &CharacterDocument) -> Result<(), CharacterStoreError> {
        let raw = serde_json::to_string(document)
            .map_err(|e| CharacterStoreError::Serialization(e.to_string()))?;
        self.store.save(&Self::key(slot), &raw)?;
        Ok(())
    }

    /// Parse, migrate and persist user-provided JSON.
    ///
    /// Nothing is written unless the whole document migrates cleanly.
    pub fn import(&self, slot: &str, raw: &str) -> Result<CharacterDocument, CharacterStoreError> {
        let (document, _) = parse(raw)?;
        self.save(slot, &document)?;
        tracing::info!(slot, name = %document.name, "Character imported");
        Ok(document)
    }

    /// The character in `slot` as pretty-printed current-version JSON.
    pub fn export(&self, slot: &str) -> Result<Option<String>, CharacterStoreError> {
        self.load(slot)?
            .map(|document| {
                serde_json::to_string_pretty(&document)
                    .map_err(|e| CharacterStoreError::Serialization(e.to_string()))
            })
            .transpose()
    }

    pub fn remove(&self, slot: &str) -> Result<(), CharacterStoreError> {
        self.store.remove(&Self::key(slot))?;
        Ok(())
    }
}

fn parse(raw: &str) -> Result<(CharacterDocument, bool), MigrationError> {
    let migrator = character_migrator();
    let migrated = migrator.migrate_str(raw)?;
    let upgraded = migrated.was_upgraded(migrator.latest());
    let document = serde_json::from_value(migrated.document)
        .map_err(|e| MigrationError::invalid_document(e.to_string()))?;
    Ok((document, upgraded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryKeyValueStore;
    use charbldr_shared::CHARACTER_DOCUMENT_VERSION;
    use serde_json::{json, Value};

    #[test]
    fn import_migrates_and_persists() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = CharacterStore::new(kv.clone());

        let doc = store
            .import(
                "main",
                &json!({ "name": "Tordek", "strength": 16, "hitPoints": 12 }).to_string(),
            )
            .expect("import");

        assert_eq!(doc.strength, 16);
        assert_eq!((doc.current_hp, doc.max_hp), (12, 12));

        let raw = kv.load("character/main").expect("load").expect("persisted");
        let stored: Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(stored["version"], json!(CHARACTER_DOCUMENT_VERSION));
        assert_eq!(stored["str"], json!(16));
    }

    #[test]
    fn invalid_import_writes_nothing() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = CharacterStore::new(kv.clone());

        assert!(matches!(
            store.import("main", "{\"name\": "),
            Err(CharacterStoreError::Migration(MigrationError::InvalidDocument(_)))
        ));
        assert!(matches!(
            store.import("main", &json!({ "version": 99 }).to_string()),
            Err(CharacterStoreError::Migration(MigrationError::UnsupportedVersion { .. }))
        ));
        assert!(kv.is_empty());
    }

    #[test]
    fn load_upgrades_stored_legacy_document() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.save(
            "character/old",
            &json!({ "version": 2, "name": "Mialee", "int": 17, "hitPoints": "6/8" }).to_string(),
        )
        .expect("seed");
        let store = CharacterStore::new(kv.clone());

        let doc = store.load("old").expect("load").expect("present");
        assert_eq!(doc.intelligence, 17);
        assert_eq!((doc.current_hp, doc.max_hp), (6, 8));

        let raw = kv.load("character/old").expect("load").expect("present");
        assert!(!raw.contains("hitPoints"));
        assert!(store.load("missing").expect("load").is_none());
    }

    #[test]
    fn export_and_remove() {
        let store = CharacterStore::new(Arc::new(MemoryKeyValueStore::new()));
        store
            .save("slot", &CharacterDocument::default())
            .expect("save");

        let exported = store.export("slot").expect("export").expect("present");
        let reimported = store.import("copy", &exported).expect("import");
        assert_eq!(reimported, CharacterDocument::default());

        store.remove("slot").expect("remove");
        assert!(store.export("slot").expect("export").is_none());
    }
}
