use std::path::PathBuf;

use odu_core::dictionary::{DictionaryLoader, DictionaryStore, LoadError};

use crate::memory::MemoryDictionary;
use crate::sqlite::SqliteDictionary;

/// Opens an SQLite dictionary file
pub struct SqliteLoader {
    pub path: PathBuf,
    pub description: String,
}

impl SqliteLoader {
    pub fn new(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

impl DictionaryLoader for SqliteLoader {
    fn name(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn open(&self) -> Result<Box<dyn DictionaryStore>, LoadError> {
        let dict = SqliteDictionary::open(&self.path, self.description.clone())?;
        if let Some(count) = dict.entry_count() {
            tracing::info!("Opened {} with {} entries", self.path.display(), count);
        }
        Ok(Box::new(dict))
    }
}

/// Loads a JSON headword to meaning map into memory
pub struct JsonLoader {
    pub path: PathBuf,
}

impl JsonLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionaryLoader for JsonLoader {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn open(&self) -> Result<Box<dyn DictionaryStore>, LoadError> {
        let dict = MemoryDictionary::load_from_file(&self.path)?;
        Ok(Box::new(dict))
    }
}
