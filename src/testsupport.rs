//! Shared test fixtures for the loader/renderer test modules.
//!
//! Kept tiny and std-only so unit tests can build temp resource trees
//! without introducing new dependencies.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("gather-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Build a serialized catalog fixture from `(id, name, fields)` triples.
///
/// Each record points at a `<id>_fields.json` translation next to the catalog
/// file and gets a derived description.
pub fn catalog_json_fixture(records: &[(&str, &str, &[&str])]) -> String {
    let array: Vec<serde_json::Value> = records
        .iter()
        .map(|(id, name, fields)| {
            json!({
                "id": id,
                "name": name,
                "descr": format!("{name} description"),
                "fields": fields,
                "translation": format!("{id}_fields.json"),
            })
        })
        .collect();
    serde_json::Value::Array(array).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.json", "{}");
        assert_eq!(fs::read_to_string(file).unwrap(), "{}");
        assert!(fixture.path().is_dir());
    }

    #[test]
    fn catalog_fixture_emits_ordered_records() {
        let raw = catalog_json_fixture(&[("hike", "Hike", &["title"])]);
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"hike_fields.json\""));
        assert!(raw.contains("\"Hike description\""));
    }
}
