use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// SQLite stores, tried in order
    pub database_paths: Vec<PathBuf>,
    /// JSON maps merged into the in-memory fallback
    pub additional_paths: Vec<PathBuf>,
    pub overrides_path: Option<PathBuf>,
    pub missing_path: Option<PathBuf>,
}

impl DictionaryConfig {
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            enabled: default_enabled(),
            database_paths: vec![
                data_dir.join("dictionary.sqlite"),
                data_dir.join("alar.sqlite"),
            ],
            additional_paths: vec![],
            overrides_path: Some(data_dir.join("dictionary_overrides.tsv")),
            missing_path: Some(data_dir.join("dictionary_missing.tsv")),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::with_data_dir(&crate::data_dir())
    }
}
