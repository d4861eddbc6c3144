//! Schema normalization against a default document.

use serde_json::{Map, Value};

/// Keys removed from and added to a document by [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiff {
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

impl SchemaDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Make `document`'s top-level key set exactly the key set of `defaults`.
///
/// Keys absent from `defaults` are dropped. Keys that are missing or falsy
/// (`null`, `false`, `0` or `""`) in `document` take the default value, so a
/// stored `level: 0` comes back as the default level. Arrays and objects are
/// never falsy, even when empty.
pub fn normalize(document: &mut Map<String, Value>, defaults: &Map<String, Value>) -> SchemaDiff {
    let mut diff = SchemaDiff::default();

    document.retain(|key, _| {
        let keep = defaults.contains_key(key);
        if !keep {
            diff.removed.push(key.clone());
        }
        keep
    });

    for (key, default) in defaults {
        let replace = match document.get(key) {
            None => true,
            Some(value) => is_falsy(value) && value != default,
        };
        if replace {
            document.insert(key.clone(), default.clone());
            diff.added.push(key.clone());
        }
    }

    diff
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
