use std::path::PathBuf;
use std::sync::Arc;

use odu_config::dictionary::DictionaryConfig;
use odu_core::dictionary::{DictionaryStore, LoadError};
use odu_dictionary::{MemoryDictionary, SqliteLoader, StoreChain};

pub const SAMPLE_DESCRIPTION: &str = "Bundled sample dictionary";

pub struct KannadaDictionaryLoader;

impl KannadaDictionaryLoader {
    /// Load the bundled sample dictionary
    pub fn load_embedded() -> Result<MemoryDictionary, LoadError> {
        let json = include_str!("../data/sample_dictionary.json");
        tracing::debug!("Loading embedded sample dictionary...");
        let dict = MemoryDictionary::from_json(json, SAMPLE_DESCRIPTION)?;
        tracing::debug!("Loaded {} sample entries", dict.len());
        Ok(dict)
    }

    /// Sample dictionary merged with additional JSON files
    pub fn load_fallback(additional_paths: &[PathBuf]) -> MemoryDictionary {
        let mut dict = Self::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            MemoryDictionary::new(SAMPLE_DESCRIPTION)
        });

        for path in additional_paths {
            match MemoryDictionary::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path.display());
                    dict = dict.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e);
                }
            }
        }

        dict
    }

    /// Pick the dictionary store for `config`: the first SQLite file that
    /// opens, else the in-memory fallback.
    pub fn build_store(config: &DictionaryConfig) -> Arc<dyn DictionaryStore> {
        if !config.enabled {
            tracing::info!("Dictionary disabled; only overrides will resolve");
            return Arc::new(MemoryDictionary::new("Dictionary disabled"));
        }

        let mut chain = StoreChain::new();
        for path in &config.database_paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            chain.push(Box::new(SqliteLoader::new(
                path,
                format!("Kannada dictionary ({})", name),
            )));
        }

        chain.open_or_else(|| Box::new(Self::load_fallback(&config.additional_paths)))
    }
}
