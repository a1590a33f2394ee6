use std::path::Path;

use odu_core::dictionary::{DictionaryStore, LoadError};
use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

const LOOKUP_SQL: &str = "SELECT meaning FROM entries WHERE key = ?1 LIMIT 1";
const COUNT_SQL: &str = "SELECT COUNT(*) FROM entries";

/// Read-only dictionary backed by an SQLite file with an
/// `entries(key, word, meaning)` table keyed by normalized headword.
///
/// A single connection is shared; lookups are serialized on its mutex.
pub struct SqliteDictionary {
    conn: Mutex<Connection>,
    source_description: String,
}

impl SqliteDictionary {
    /// Open `path` read-only and prepare the lookup query.
    ///
    /// Fails when the file is missing or the query cannot be prepared, so an
    /// unusable file is rejected here instead of on the first lookup.
    pub fn open(path: &Path, source_description: impl Into<String>) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| LoadError::Database(format!("{}: {}", path.display(), e)))?;

        conn.prepare_cached(LOOKUP_SQL)
            .map_err(|e| LoadError::Database(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            conn: Mutex::new(conn),
            source_description: source_description.into(),
        })
    }

    /// Number of rows in the entries table
    pub fn entry_count(&self) -> Option<u64> {
        let conn = self.conn.lock();
        conn.query_row(COUNT_SQL, [], |row| row.get::<_, i64>(0))
            .ok()
            .and_then(|count| u64::try_from(count).ok())
    }

    fn query(&self, normalized_key: &str) -> rusqlite::Result<Option<String>> {
        let conn = self.conn.lock();
        let mut statement = conn.prepare_cached(LOOKUP_SQL)?;
        let meaning = statement
            .query_row([normalized_key], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(meaning.flatten())
    }
}

impl DictionaryStore for SqliteDictionary {
    fn lookup(&self, normalized_key: &str) -> Option<String> {
        match self.query(normalized_key) {
            Ok(meaning) => meaning,
            Err(e) => {
                tracing::warn!("Dictionary query for '{}' failed: {}", normalized_key, e);
                None
            }
        }
    }

    fn source_description(&self) -> &str {
        &self.source_description
    }
}
