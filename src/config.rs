//! Runtime configuration.
//!
//! Every field has a default, so an empty or missing file yields a working
//! setup. Files are YAML:
//!
//! ```yaml
//! storage:
//!   path: ~/.local/share/folio/preferences.json
//!   key: theme
//! effects:
//!   min_count: 2
//!   max_count: 4
//!   lifetime: 850
//! templates: ./templates
//! content: ./site.yaml
//! log_level: info
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effect::EffectSettings;
use crate::theme::THEME_STORAGE_KEY;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Environment variable overriding the storage file.
pub const STORAGE_ENV: &str = "FOLIO_STORAGE";

/// Error raised while loading configuration or content files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", origin(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("`{}`", path.display()),
        None => "inline yaml".to_string(),
    }
}

/// Where the appearance preference is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// JSON file backing durable storage. `None` keeps preferences in memory.
    pub path: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: None,
            key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSettings,
    pub effects: EffectSettings,
    /// Directory whose templates override the embedded ones by name.
    pub templates: Option<PathBuf>,
    /// YAML file replacing the built-in site content.
    pub content: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            effects: EffectSettings::default(),
            templates: None,
            content: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = if raw.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file. Relative paths inside it resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        log::debug!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Loads from an explicit path, else `$FOLIO_CONFIG`, else defaults.
    /// `$FOLIO_STORAGE` overrides the storage path either way.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if let Some(storage) = std::env::var_os(STORAGE_ENV) {
            config.storage.path = Some(PathBuf::from(storage));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.key must not be empty".into()));
        }
        self.effects.validate()
    }

    fn rebase(&mut self, base: &Path) {
        for path in [
            self.storage.path.as_mut(),
            self.templates.as_mut(),
            self.content.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
