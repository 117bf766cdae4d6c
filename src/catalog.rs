//! Event category catalog and the collaborator seams the menu renders through.
//!
//! The renderer never touches the catalog type directly: it asks a
//! [`Connector`] for the ordered category ids and an [`EventFactory`] for the
//! category objects. [`Catalog`] is the JSON-backed implementation of both,
//! loading a category array at construction so a broken catalog file fails
//! startup instead of producing an empty listing.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;

/// Provider of the ordered list of category identifiers.
pub trait Connector {
    fn categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// Factory resolving a category identifier into a full category object.
pub trait EventFactory {
    fn create(&self, id: &str) -> Result<Category, CatalogError>;
}

/// One event category: identity, display strings, and its field descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier used for lookups.
    pub id: String,
    /// Human-readable category name.
    pub name: String,
    /// One-line category description.
    pub descr: String,
    /// Ordered field keys, resolved against the category's translation table.
    pub fields: Vec<String>,
    /// Path of the JSON resource translating this category's field keys.
    pub translation_path: PathBuf,
}

/// On-disk category record. `translation` is relative to the catalog file.
#[derive(Debug, Clone, Deserialize)]
struct CategoryRecord {
    id: String,
    name: String,
    descr: String,
    fields: Vec<String>,
    translation: String,
}

/// JSON-backed catalog; implements both collaborator seams.
///
/// The catalog resource is a JSON array so that file order defines the order
/// categories are presented in.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load the catalog from a JSON array of category records.
    ///
    /// Relative translation paths are resolved against the catalog file's
    /// directory. Duplicate ids are rejected.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
        let records: Vec<CategoryRecord> =
            serde_json::from_str(&text).map_err(|e| CatalogError::Json(path.to_path_buf(), e))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut categories = Vec::with_capacity(records.len());
        for record in records {
            if categories.iter().any(|c: &Category| c.id == record.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate category id `{}`",
                    record.id
                )));
            }
            categories.push(Category {
                id: record.id,
                name: record.name,
                descr: record.descr,
                fields: record.fields,
                translation_path: base_dir.join(record.translation),
            });
        }
        debug!(path = %path.display(), categories = categories.len(), "loaded event catalog");
        Ok(Self { categories })
    }

    /// All loaded categories, in catalog order.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }
}

impl Connector for Catalog {
    fn categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.categories.iter().map(|c| c.id.clone()).collect())
    }
}

impl EventFactory for Catalog {
    fn create(&self, id: &str) -> Result<Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(id.to_string()))
    }
}
