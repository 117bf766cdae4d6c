//! Configuration loading and resolution.
//!
//! Configuration comes from a small TOML file resolved in order: an explicit
//! `--config` path, `./gather.toml`, then `~/.config/gather/gather.toml`.
//! Missing files fall back to defaults; an explicit override that cannot be
//! read is an error. CLI flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Default locale code used when nothing is configured.
const DEFAULT_LANGUAGE: &str = "EN";
/// Default resource directory, relative to the working directory.
const DEFAULT_RESOURCES: &str = "res";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub locale: LocaleConfig,
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether styled (colored) status output is enabled.
    pub color: bool,
}

/// Locale and resource-resolution settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale code prefixed onto resource file names, e.g. `EN` or `IT`.
    pub language: String,
    /// Base directory holding all JSON resources.
    pub resources: PathBuf,
}

impl Config {
    /// Path of the menu translation resource for the configured locale.
    pub fn menu_translation_path(&self) -> PathBuf {
        self.locale
            .resources
            .join(format!("{}_MenuDescr.json", self.locale.language))
    }

    /// Path of the category catalog resource for the configured locale.
    pub fn catalog_path(&self) -> PathBuf {
        self.locale
            .resources
            .join(format!("{}_Categories.json", self.locale.language))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig { color: true },
            locale: LocaleConfig {
                language: DEFAULT_LANGUAGE.to_string(),
                resources: PathBuf::from(DEFAULT_RESOURCES),
            },
        }
    }
}

/// On-disk TOML shape with every field optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    display: FileDisplayConfig,
    #[serde(default)]
    locale: FileLocaleConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplayConfig {
    color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLocaleConfig {
    language: Option<String>,
    resources: Option<PathBuf>,
}

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from the --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        || dirs::config_dir().map(|dir| dir.join("gather")),
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let text = match path_override {
        // Explicit override must be readable.
        Some(path) => Some(read_file(Path::new(path))?),
        None => {
            let mut found = None;
            let mut candidates = vec![PathBuf::from("gather.toml")];
            if let Some(root) = config_root() {
                candidates.push(root.join("gather.toml"));
            }
            for candidate in candidates {
                if let Ok(content) = read_file(&candidate) {
                    debug!(path = %candidate.display(), "using config file");
                    found = Some(content);
                    break;
                }
            }
            found
        }
    };

    let Some(text) = text else {
        return Ok(Config::default());
    };

    let parsed: FileConfig = toml::from_str(&text)?;
    let defaults = Config::default();
    let config = Config {
        display: DisplayConfig {
            color: parsed.display.color.unwrap_or(defaults.display.color),
        },
        locale: LocaleConfig {
            language: parsed
                .locale
                .language
                .unwrap_or(defaults.locale.language),
            resources: parsed
                .locale
                .resources
                .unwrap_or(defaults.locale.resources),
        },
    };
    if config.locale.language.is_empty() {
        return Err(ConfigError::Invalid(
            "locale.language must not be empty".to_string(),
        ));
    }
    Ok(config)
}
