use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Current homebrew bank schema version.
pub const HOMEBREW_BANK_VERSION: u32 = 2;

/// The whole local overlay, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomebrewBank {
    pub version: u32,
    pub homebrew_bank_entries: Vec<HomebrewBankEntry>,
}

impl Default for HomebrewBank {
    fn default() -> Self {
        Self {
            version: HOMEBREW_BANK_VERSION,
            homebrew_bank_entries: Vec::new(),
        }
    }
}

/// A single homebrew entity and its bookkeeping.
///
/// `id` is the storage identity; `homebrew_object["index"]` is the semantic
/// identity other entities reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomebrewBankEntry {
    pub id: Uuid,
    pub homebrew_object: Value,
    /// Endpoint name of the resource type (`"races"`, `"magic-items"`)
    pub api_category_name: String,
    pub last_edit: DateTime<Utc>,
    /// Storage record schema version of `homebrew_object`
    pub version: u32,
}

impl HomebrewBankEntry {
    /// The semantic index of the stored object, if it has one.
    pub fn object_index(&self) -> Option<&str> {
        self.homebrew_object.get("index").and_then(Value::as_str)
    }
}
