//! JSON-backed translation tables.
//!
//! A table maps string keys to either a plain translated text or a field
//! descriptor (display name + description). Tables are loaded once from a
//! JSON resource and are immutable afterwards; a load failure is an error at
//! construction, never a silently empty dictionary.
//!
//! Lookups never fail: a missing or wrongly-shaped entry resolves to a
//! visible placeholder so the menu stays usable, at the cost of leaking the
//! internal key name to the user.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TranslationError;

/// One translation entry.
///
/// Plain entries carry the translated text directly; field entries carry a
/// display name and a description, resolved separately by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Simple translation, e.g. the welcome or exit line.
    Text(String),
    /// Field descriptor with a display name and a description.
    Field { name: String, descr: String },
}

/// Immutable key → translation mapping loaded from one JSON resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, Entry>,
}

impl TranslationTable {
    /// Load a table from a JSON file.
    ///
    /// Fails fast on unreadable files, malformed JSON, a non-object root, or
    /// entries that are neither strings nor `{name, descr}` objects.
    pub fn load(path: &Path) -> Result<Self, TranslationError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::Io(path.to_path_buf(), e))?;
        let root: Value = serde_json::from_str(&text)
            .map_err(|e| TranslationError::Json(path.to_path_buf(), e))?;
        if !root.is_object() {
            return Err(TranslationError::NotAnObject(path.to_path_buf()));
        }
        let entries: HashMap<String, Entry> = serde_json::from_value(root)
            .map_err(|e| TranslationError::Json(path.to_path_buf(), e))?;
        debug!(path = %path.display(), keys = entries.len(), "loaded translation table");
        Ok(Self { entries })
    }

    /// Build a table from already-parsed entries. Used by tests and callers
    /// that source translations from somewhere other than a file.
    pub fn from_entries(entries: HashMap<String, Entry>) -> Self {
        Self { entries }
    }

    /// Resolve a plain translation.
    pub fn text(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Entry::Text(text)) => text.clone(),
            _ => missing_placeholder(key),
        }
    }

    /// Resolve a field entry's display name.
    pub fn field_name(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Entry::Field { name, .. }) => name.clone(),
            _ => missing_placeholder(key),
        }
    }

    /// Resolve a field entry's description.
    pub fn field_descr(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Entry::Field { descr, .. }) => descr.clone(),
            _ => missing_placeholder(key),
        }
    }

    /// True when the table defines `key` (of either entry shape).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Placeholder substituted for any lookup the table cannot resolve.
pub fn missing_placeholder(key: &str) -> String {
    format!("ALERT: Missing element in json file: {key}")
}
