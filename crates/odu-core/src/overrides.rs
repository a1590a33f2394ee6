use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use parking_lot::{Mutex, RwLock};

use crate::error::PersistError;
use crate::preprocess::TextNormalizer;

const COMMENT_MARKER: char = '#';
const DELIMITER: char = '\t';

const HEADER: [&str; 3] = [
    "# Dictionary overrides (TSV)",
    "# Format: normalized_key<TAB>meaning",
    "# Example: ಮನೆ\thouse",
];

/// User-correctable meanings that take precedence over the dictionary, plus
/// an append-only log of words that resolved to nothing.
///
/// The in-memory map is the source of truth for the running process. File
/// writes are best-effort: failures are logged and swallowed.
pub struct OverrideStore {
    overrides_path: Option<PathBuf>,
    missing_path: Option<PathBuf>,
    normalizer: TextNormalizer,
    overrides: RwLock<BTreeMap<String, String>>,
    missing_lock: Mutex<()>,
}

impl OverrideStore {
    /// Create a store, loading existing overrides from `overrides_path`
    pub fn new(overrides_path: Option<PathBuf>, missing_path: Option<PathBuf>) -> Self {
        Self::with_seed(overrides_path, missing_path, Vec::new())
    }

    /// Create a store from an in-memory seed. The overrides file is only read
    /// when the seed is empty.
    pub fn with_seed(
        overrides_path: Option<PathBuf>,
        missing_path: Option<PathBuf>,
        seed: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut overrides: BTreeMap<String, String> = seed.into_iter().collect();

        if overrides.is_empty() {
            if let Some(path) = &overrides_path {
                overrides = load_overrides(path);
            }
        }

        Self {
            overrides_path,
            missing_path,
            normalizer: TextNormalizer::new(),
            overrides: RwLock::new(overrides),
            missing_lock: Mutex::new(()),
        }
    }

    /// Store without backing files
    pub fn in_memory() -> Self {
        Self::new(None, None)
    }

    /// Plain map read; `normalized_key` must already be normalized
    pub fn lookup(&self, normalized_key: &str) -> Option<String> {
        self.overrides.read().get(normalized_key).cloned()
    }

    /// Insert or replace the meaning for `word`, then rewrite the overrides file.
    ///
    /// A blank meaning clears the override, since blank entries are never
    /// written and would not survive a reload.
    pub fn set_override(&self, word: &str, meaning: &str) {
        let key = self.normalizer.normalize(word);
        if key.is_empty() {
            tracing::debug!("Ignoring override for blank word");
            return;
        }

        let meaning = meaning.trim();
        let mut overrides = self.overrides.write();
        if meaning.is_empty() {
            overrides.remove(&key);
        } else {
            overrides.insert(key, meaning.to_string());
        }

        if let Err(e) = self.try_save(&overrides) {
            tracing::warn!("Failed to save dictionary overrides: {}", e);
        }
    }

    /// Create the overrides file with its header template if it does not exist yet
    pub fn ensure_overrides_file(&self) {
        if let Err(e) = self.try_ensure_overrides_file() {
            tracing::warn!("Failed to create overrides file: {}", e);
        }
    }

    /// Append `word<TAB>timestamp` to the missing-word log
    pub fn append_missing(&self, word: &str) {
        if let Err(e) = self.try_append_missing(word) {
            tracing::warn!("Failed to record missing word: {}", e);
        }
    }

    /// Sorted snapshot of all overrides
    pub fn entries(&self) -> Vec<(String, String)> {
        self.overrides
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.overrides.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.read().is_empty()
    }

    pub fn overrides_path(&self) -> Option<&Path> {
        self.overrides_path.as_deref()
    }

    pub fn missing_path(&self) -> Option<&Path> {
        self.missing_path.as_deref()
    }

    fn try_save(&self, overrides: &BTreeMap<String, String>) -> Result<(), PersistError> {
        let Some(path) = &self.overrides_path else {
            return Ok(());
        };

        let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
        lines.extend(
            overrides
                .iter()
                .filter(|(_, meaning)| !meaning.is_empty())
                .map(|(key, meaning)| format!("{key}{DELIMITER}{meaning}")),
        );
        let content = lines.join("\n") + "\n";

        write_atomic(path, &content)?;
        tracing::debug!("Saved {} overrides to {:?}", overrides.len(), path);
        Ok(())
    }

    fn try_ensure_overrides_file(&self) -> Result<(), PersistError> {
        let Some(path) = &self.overrides_path else {
            return Ok(());
        };
        if path.exists() {
            return Ok(());
        }

        create_parent(path)?;
        let header = HEADER.join("\n") + "\n";

        // create_new keeps an existing file untouched even if it appeared after the check
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(PersistError::write(path, e)),
        };
        file.write_all(header.as_bytes())
            .map_err(|e| PersistError::write(path, e))?;

        tracing::info!("Created overrides file at {:?}", path);
        Ok(())
    }

    fn try_append_missing(&self, word: &str) -> Result<(), PersistError> {
        let Some(path) = &self.missing_path else {
            return Ok(());
        };

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = format!("{word}{DELIMITER}{timestamp}\n");

        let _guard = self.missing_lock.lock();
        create_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| PersistError::write(path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| PersistError::write(path, e))?;

        tracing::debug!("Recorded missing word '{}'", word);
        Ok(())
    }
}

fn load_overrides(path: &Path) -> BTreeMap<String, String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let overrides = parse_overrides(&contents);
            tracing::info!("Loaded {} dictionary overrides from {:?}", overrides.len(), path);
            overrides
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No overrides file at {:?}, starting empty", path);
            BTreeMap::new()
        }
        Err(e) => {
            tracing::warn!("{}", PersistError::read(path, e));
            BTreeMap::new()
        }
    }
}

/// Parse override lines, skipping blanks, comments and malformed entries
pub(crate) fn parse_overrides(contents: &str) -> BTreeMap<String, String> {
    let mut overrides = BTreeMap::new();

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(DELIMITER) else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        overrides.insert(key.to_string(), value.to_string());
    }

    overrides
}

fn create_parent(path: &Path) -> Result<(), PersistError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| PersistError::write(parent, e))
        }
        _ => Ok(()),
    }
}

/// Write through a temp file and rename it over the target
fn write_atomic(path: &Path, content: &str) -> Result<(), PersistError> {
    create_parent(path)?;
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path).map_err(|e| PersistError::write(&temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| PersistError::write(&temp_path, e))?;
        file.sync_all()
            .map_err(|e| PersistError::write(&temp_path, e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PersistError::write(path, e)
    })
}
