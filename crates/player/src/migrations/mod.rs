//! Versioned document migrations.
//!
//! A persisted document carries an integer `version`. Loading it runs every
//! single-step upgrade from its version up to the latest one, then a schema
//! normalization pass that prunes unknown keys and fills missing ones with the
//! current defaults. A document without `version` is treated as version 1.

mod character;
mod homebrew;
pub mod schema;

use serde_json::{Map, Value};
use thiserror::Error;

pub use character::{character_migrator, migrate_character, upgrade_character};
pub use homebrew::{homebrew_bank_migrator, migrate_homebrew_bank, upgrade_homebrew_bank};
pub use schema::{normalize, SchemaDiff};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MigrationError {
    /// Not JSON, not an object, or not deserializable after migration
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid document version: {0}")]
    InvalidVersion(String),

    #[error("Document version {found} is newer than the supported version {latest}")]
    UnsupportedVersion { found: u32, latest: u32 },

    #[error("Migration from version {from} failed: {message}")]
    StepFailed { from: u32, message: String },
}

impl MigrationError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn step(from: u32, msg: impl Into<String>) -> Self {
        Self::StepFailed {
            from,
            message: msg.into(),
        }
    }
}

/// Upgrade of a document from version `from` to `from + 1`.
#[derive(Clone, Copy)]
pub struct MigrationStep {
    pub from: u32,
    pub description: &'static str,
    pub apply: fn(&mut Map<String, Value>) -> Result<(), MigrationError>,
}

impl std::fmt::Debug for MigrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationStep")
            .field("from", &self.from)
            .field("description", &self.description)
            .finish()
    }
}

/// Result of running a document through a [`Migrator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub document: Value,
    /// Version the document had before migrating
    pub from_version: u32,
    pub diff: SchemaDiff,
}

impl Migrated {
    pub fn was_upgraded(&self, latest: u32) -> bool {
        self.from_version != latest || !self.diff.is_empty()
    }
}

/// A migration chain for one document kind.
#[derive(Debug, Clone)]
pub struct Migrator {
    kind: &'static str,
    latest: u32,
    steps: Vec<MigrationStep>,
    defaults: Map<String, Value>,
}

impl Migrator {
    /// `defaults` is the serialized default document of the latest version.
    pub fn new(
        kind: &'static str,
        latest: u32,
        steps: Vec<MigrationStep>,
        defaults: Map<String, Value>,
    ) -> Self {
        Self {
            kind,
            latest,
            steps,
            defaults,
        }
    }

    pub fn latest(&self) -> u32 {
        self.latest
    }

    /// Parse and migrate JSON text. Invalid JSON never reaches the steps.
    pub fn migrate_str(&self, raw: &str) -> Result<Migrated, MigrationError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| MigrationError::invalid_document(e.to_string()))?;
        self.migrate(value)
    }

    pub fn migrate(&self, document: Value) -> Result<Migrated, MigrationError> {
        let Value::Object(mut object) = document else {
            return Err(MigrationError::invalid_document(format!(
                "{} document must be a JSON object",
                self.kind
            )));
        };

        let from_version = self.version_of(&object)?;
        let mut version = from_version;

        while version < self.latest {
            let step = self
                .steps
                .iter()
                .find(|step| step.from == version)
                .ok_or_else(|| MigrationError::step(version, "no migration step registered"))?;

            tracing::debug!(
                kind = self.kind,
                from = version,
                to = version + 1,
                step = step.description,
                "Applying migration step"
            );
            (step.apply)(&mut object)?;
            version += 1;
        }

        object.insert("version".to_string(), Value::from(self.latest));
        let diff = normalize(&mut object, &self.defaults);

        if from_version != self.latest || !diff.is_empty() {
            tracing::info!(
                kind = self.kind,
                from = from_version,
                to = self.latest,
                removed = ?diff.removed,
                added = ?diff.added,
                "Document migrated"
            );
        }

        Ok(Migrated {
            document: Value::Object(object),
            from_version,
            diff,
        })
    }

    fn version_of(&self, object: &Map<String, Value>) -> Result<u32, MigrationError> {
        let version = match object.get("version") {
            None | Some(Value::Null) => 1,
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| MigrationError::InvalidVersion(n.to_string()))?,
            Some(other) => return Err(MigrationError::InvalidVersion(other.to_string())),
        };

        if version < 1 {
            return Err(MigrationError::InvalidVersion(version.to_string()));
        }
        if version > self.latest {
            return Err(MigrationError::UnsupportedVersion {
                found: version,
                latest: self.latest,
            });
        }
        Ok(version)
    }
}
