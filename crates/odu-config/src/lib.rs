use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::language::LanguageConfig;
use self::reader::ReaderConfig;

pub mod dictionary;
pub mod language;
pub mod reader;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub language: LanguageConfig,
    pub reader: ReaderConfig,

    /// Tracing filter directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("ODU_LOG").unwrap_or_else(|_| "info".to_string());

        let record_missing = env::var("ODU_RECORD_MISSING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Config {
            dictionary: DictionaryConfig::with_data_dir(&data_dir()),
            language: LanguageConfig::default(),
            reader: ReaderConfig {
                record_missing,
                ..ReaderConfig::default()
            },
            log_filter,
        }
    }

    /// Read a JSON profile. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(io_error)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Base directory for dictionary and override files
pub fn data_dir() -> PathBuf {
    env::var("ODU_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}
