//! Records and the keyed result set.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::types::{FieldValue, InferredValue};

/// Field name to value, in column order. The key column is never present.
pub type Record = IndexMap<String, FieldValue>;

/// A record together with the key it was filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRecord {
    pub key: InferredValue,
    pub record: Record,
}

/// Output of one conversion: key to record, in order of first appearance.
///
/// Keys are compared by their JSON object key text, so two rows whose keys
/// would collide in the serialized object are treated as the same key.
/// Inserting an existing key replaces the record and keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: IndexMap<String, KeyedRecord>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `record` under `key`, returning the record it replaced, if any.
    pub fn insert(&mut self, key: InferredValue, record: Record) -> Option<Record> {
        self.entries
            .insert(key.to_json_key(), KeyedRecord { key, record })
            .map(|previous| previous.record)
    }

    /// Look up a record by its rendered key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key).map(|e| &e.record)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyedRecord> {
        self.entries.values()
    }

    /// Rendered keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, &entry.record)?;
        }
        map.end()
    }
}
