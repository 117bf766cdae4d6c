//! Unified error types for the front-end.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// TranslationError
// ---------------------------------------------------------------------------

/// Errors when loading a translation table from a JSON resource.
///
/// Load failures are surfaced at construction so a renderer is never left
/// holding an unusable dictionary.
#[derive(Debug)]
pub enum TranslationError {
    /// The resource file could not be read.
    Io(PathBuf, std::io::Error),
    /// The resource is not valid JSON, or an entry has the wrong shape.
    Json(PathBuf, serde_json::Error),
    /// The document root is not a JSON object.
    NotAnObject(PathBuf),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => {
                write!(f, "failed to read translation file `{}`: {e}", path.display())
            }
            Self::Json(path, e) => {
                write!(f, "malformed translation file `{}`: {e}", path.display())
            }
            Self::NotAnObject(path) => {
                write!(
                    f,
                    "translation file `{}` must contain a top-level JSON object",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TranslationError {}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors from the category catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    Io(PathBuf, std::io::Error),
    /// The catalog file is not valid JSON or has the wrong shape.
    Json(PathBuf, serde_json::Error),
    /// A category id was requested that the catalog does not define.
    UnknownCategory(String),
    /// The catalog content violates a structural rule (e.g. duplicate ids).
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => {
                write!(f, "failed to read catalog file `{}`: {e}", path.display())
            }
            Self::Json(path, e) => write!(f, "malformed catalog file `{}`: {e}", path.display()),
            Self::UnknownCategory(id) => write!(f, "unknown event category `{id}`"),
            Self::Invalid(msg) => write!(f, "invalid catalog: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the front-end.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Translation(TranslationError),
    Catalog(CatalogError),
    /// Console I/O failed mid-render.
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Translation(e) => write!(f, "translation: {e}"),
            Self::Catalog(e) => write!(f, "catalog: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TranslationError> for AppError {
    fn from(e: TranslationError) -> Self {
        Self::Translation(e)
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
