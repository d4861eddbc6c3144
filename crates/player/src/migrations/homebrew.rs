//! Homebrew bank document migrations.
//!
//! - v1 -> v2: category names become endpoint names, millisecond timestamps
//!   become RFC 3339 strings, entries without a record version get version 1.

use chrono::{DateTime, Utc};
use charbldr_domain::ResourceType;
use charbldr_shared::{HomebrewBank, HOMEBREW_BANK_VERSION};
use serde_json::{Map, Value};

use super::{MigrationError, MigrationStep, Migrator};

/// Timestamp for legacy entries that were never stamped
const EPOCH: &str = "1970-01-01T00:00:00Z";

pub fn homebrew_bank_migrator() -> Migrator {
    let defaults = match serde_json::to_value(HomebrewBank::default()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    Migrator::new(
        "homebrew bank",
        HOMEBREW_BANK_VERSION,
        vec![MigrationStep {
            from: 1,
            description: "endpoint category names, RFC 3339 timestamps, entry versions",
            apply: v1_to_v2,
        }],
        defaults,
    )
}

pub fn migrate_homebrew_bank(document: Value) -> Result<Value, MigrationError> {
    homebrew_bank_migrator().migrate(document).map(|m| m.document)
}

/// Migrate and deserialize a homebrew bank document.
pub fn upgrade_homebrew_bank(document: Value) -> Result<HomebrewBank, MigrationError> {
    let migrated = migrate_homebrew_bank(document)?;
    serde_json::from_value(migrated).map_err(|e| MigrationError::invalid_document(e.to_string()))
}

fn v1_to_v2(doc: &mut Map<String, Value>) -> Result<(), MigrationError> {
    let entries = match doc.get_mut("homebrewBankEntries") {
        Some(Value::Array(entries)) => entries,
        Some(Value::Null) | None => return Ok(()),
        Some(other) => {
            return Err(MigrationError::step(
                1,
                format!("`homebrewBankEntries` must be an array, found {}", other),
            ))
        }
    };

    for entry in entries.iter_mut() {
        let Value::Object(entry) = entry else {
            return Err(MigrationError::step(1, "bank entries must be objects"));
        };
        migrate_entry(entry)?;
    }

    Ok(())
}

fn migrate_entry(entry: &mut Map<String, Value>) -> Result<(), MigrationError> {
    let category = entry
        .get("apiCategoryName")
        .and_then(Value::as_str)
        .ok_or_else(|| MigrationError::step(1, "bank entry without apiCategoryName"))?;
    let resource = ResourceType::from_category_name(category)
        .map_err(|e| MigrationError::step(1, e.to_string()))?;
    entry.insert(
        "apiCategoryName".to_string(),
        Value::from(resource.as_str()),
    );

    match entry.get("lastEdit") {
        Some(Value::Number(millis)) => {
            let timestamp = millis
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .ok_or_else(|| MigrationError::step(1, format!("invalid lastEdit {}", millis)))?;
            entry.insert("lastEdit".to_string(), Value::from(timestamp.to_rfc3339()));
        }
        Some(Value::String(_)) => {}
        Some(Value::Null) | None => {
            entry.insert("lastEdit".to_string(), Value::from(EPOCH));
        }
        Some(other) => {
            return Err(MigrationError::step(
                1,
                format!("invalid lastEdit {}", other),
            ))
        }
    }

    if entry.get("version").map_or(true, Value::is_null) {
        entry.insert("version".to_string(), Value::from(1));
    }

    Ok(())
}
