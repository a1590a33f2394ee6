use std::collections::HashMap;
use std::path::Path;

use odu_core::dictionary::{DictionaryStore, LoadError};
use odu_core::preprocess::TextNormalizer;

/// Small in-memory dictionary, used when no bulk store is available
#[derive(Debug, Clone)]
pub struct MemoryDictionary {
    entries: HashMap<String, String>,
    source_description: String,
}

impl MemoryDictionary {
    pub fn new(source_description: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            source_description: source_description.into(),
        }
    }

    /// Build from key/meaning pairs. Keys are normalized; blank keys are dropped.
    pub fn from_entries<K, V>(
        entries: impl IntoIterator<Item = (K, V)>,
        source_description: impl Into<String>,
    ) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dict = Self::new(source_description);
        for (key, meaning) in entries {
            dict.insert(key.as_ref(), meaning);
        }
        dict
    }

    /// Load a JSON object mapping headwords to meanings
    pub fn from_json(json: &str, source_description: impl Into<String>) -> Result<Self, LoadError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;
        Ok(Self::from_entries(entries, source_description))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json, format!("Dictionary file {}", path.display()))?;
        tracing::info!("Loaded {} dictionary entries from file", dict.len());
        Ok(dict)
    }

    pub fn insert(&mut self, key: &str, meaning: impl Into<String>) {
        let key = TextNormalizer::new().normalize(key);
        if key.is_empty() {
            return;
        }
        self.entries.insert(key, meaning.into());
    }

    /// Merge another dictionary into this one; its entries replace existing keys
    pub fn merge(mut self, other: MemoryDictionary) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionaryStore for MemoryDictionary {
    fn lookup(&self, normalized_key: &str) -> Option<String> {
        self.entries.get(normalized_key).cloned()
    }

    fn source_description(&self) -> &str {
        &self.source_description
    }
}
