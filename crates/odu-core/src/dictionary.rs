use std::collections::HashMap;

/// Read-only key to meaning lookup backed by bulk dictionary data
pub trait DictionaryStore: Send + Sync {
    /// Exact match on an already normalized key
    fn lookup(&self, normalized_key: &str) -> Option<String>;

    /// Human-readable description of where the data comes from
    fn source_description(&self) -> &str;
}

/// Opens a dictionary store; one link of the startup fallback chain
pub trait DictionaryLoader {
    /// Name used in logs
    fn name(&self) -> String;

    /// Open the store, failing if it cannot serve lookups
    fn open(&self) -> Result<Box<dyn DictionaryStore>, LoadError>;
}

impl DictionaryStore for HashMap<String, String> {
    fn lookup(&self, normalized_key: &str) -> Option<String> {
        self.get(normalized_key).cloned()
    }

    fn source_description(&self) -> &str {
        "In-memory map"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
