//! Character document migrations.
//!
//! - v1 -> v2: long ability names become abbreviations; identifiers are
//!   normalized to kebab-case ids.
//! - v2 -> v3: the compound `hitPoints` field is split; inventory strings
//!   become structured entries.

use charbldr_domain::common::kebab_case;
use charbldr_domain::is_homebrew_index;
use charbldr_shared::{CharacterDocument, CHARACTER_DOCUMENT_VERSION};
use serde_json::{json, Map, Value};

use super::{MigrationError, MigrationStep, Migrator};

const ABILITY_RENAMES: [(&str, &str); 6] = [
    ("strength", "str"),
    ("dexterity", "dex"),
    ("constitution", "con"),
    ("intelligence", "int"),
    ("wisdom", "wis"),
    ("charisma", "cha"),
];

const IDENTIFIER_KEYS: [&str; 5] = ["race", "subrace", "class", "subclass", "background"];

pub fn character_migrator() -> Migrator {
    let defaults = match serde_json::to_value(CharacterDocument::default()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    Migrator::new(
        "character",
        CHARACTER_DOCUMENT_VERSION,
        vec![
            MigrationStep {
                from: 1,
                description: "abbreviate ability scores, kebab-case identifiers",
                apply: v1_to_v2,
            },
            MigrationStep {
                from: 2,
                description: "split hit points, structure inventory",
                apply: v2_to_v3,
            },
        ],
        defaults,
    )
}

/// Migrate a raw character document to the latest schema.
pub fn migrate_character(document: Value) -> Result<Value, MigrationError> {
    character_migrator().migrate(document).map(|m| m.document)
}

/// Migrate and deserialize a character document.
pub fn upgrade_character(document: Value) -> Result<CharacterDocument, MigrationError> {
    let migrated = migrate_character(document)?;
    serde_json::from_value(migrated).map_err(|e| MigrationError::invalid_document(e.to_string()))
}

fn v1_to_v2(doc: &mut Map<String, Value>) -> Result<(), MigrationError> {
    for (long, short) in ABILITY_RENAMES {
        if let Some(score) = doc.remove(long) {
            // An already-abbreviated key wins over a stale long one
            doc.entry(short.to_string()).or_insert(score);
        }
    }

    for key in IDENTIFIER_KEYS {
        match doc.get_mut(key) {
            Some(Value::String(id)) => *id = normalize_identifier(id),
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(MigrationError::step(
                    1,
                    format!("`{}` must be a string, found {}", key, other),
                ))
            }
        }
    }

    match doc.get_mut("proficiencies") {
        Some(Value::Array(entries)) => {
            for entry in entries.iter_mut() {
                let Value::String(id) = entry else {
                    return Err(MigrationError::step(
                        1,
                        format!("proficiency entries must be strings, found {}", entry),
                    ));
                };
                *id = normalize_identifier(id);
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            return Err(MigrationError::step(
                1,
                format!("`proficiencies` must be an array, found {}", other),
            ))
        }
    }

    Ok(())
}

fn v2_to_v3(doc: &mut Map<String, Value>) -> Result<(), MigrationError> {
    if let Some(hit_points) = doc.remove("hitPoints") {
        let (current, max) = split_hit_points(&hit_points)?;
        doc.insert("currentHp".to_string(), Value::from(current));
        doc.insert("maxHp".to_string(), Value::from(max));
    }

    match doc.get_mut("inventory") {
        Some(Value::Array(items)) => {
            for item in items.iter_mut() {
                match item {
                    Value::String(index) => {
                        let index = index.clone();
                        *item = json!({
                            "index": index,
                            "quantity": 1,
                            "isHomebrew": is_homebrew_index(&index),
                        });
                    }
                    Value::Object(_) => {}
                    other => {
                        return Err(MigrationError::step(
                            2,
                            format!("inventory entries must be strings or objects, found {}", other),
                        ))
                    }
                }
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            return Err(MigrationError::step(
                2,
                format!("`inventory` must be an array, found {}", other),
            ))
        }
    }

    Ok(())
}

/// Homebrew ids are UUIDs and are kept as they are.
fn normalize_identifier(id: &str) -> String {
    if is_homebrew_index(id) {
        id.to_string()
    } else {
        kebab_case(id)
    }
}

/// `"12/15"` is current/max; a plain number (or numeric string) is both.
fn split_hit_points(value: &Value) -> Result<(u64, u64), MigrationError> {
    let invalid = || MigrationError::step(2, format!("unrecognized hitPoints value {}", value));

    match value {
        Value::Number(n) => n.as_u64().map(|hp| (hp, hp)).ok_or_else(invalid),
        Value::String(text) => {
            let parse = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid());
            match text.split_once('/') {
                Some((current, max)) => Ok((parse(current)?, parse(max)?)),
                None => parse(text).map(|hp| (hp, hp)),
            }
        }
        _ => Err(invalid()),
    }
}
