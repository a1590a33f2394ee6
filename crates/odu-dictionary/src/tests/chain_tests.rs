use std::fs;

use odu_core::dictionary::DictionaryStore;
use rusqlite::Connection;
use tempfile::TempDir;

use crate::chain::StoreChain;
use crate::loaders::{JsonLoader, SqliteLoader};
use crate::memory::MemoryDictionary;

fn fallback() -> Box<dyn DictionaryStore> {
    Box::new(MemoryDictionary::from_entries([("ಪದ", "word")], "Fallback"))
}

#[test]
fn test_empty_chain_uses_fallback() {
    let chain = StoreChain::new();
    let store = chain.open_or_else(fallback);

    assert_eq!(store.source_description(), "Fallback");
    assert_eq!(store.lookup("ಪದ").as_deref(), Some("word"));
}

#[test]
fn test_missing_sources_fall_through() {
    let temp_dir = TempDir::new().unwrap();
    let chain = StoreChain::new()
        .with(SqliteLoader::new(temp_dir.path().join("a.db"), "First"))
        .with(JsonLoader::new(temp_dir.path().join("b.json")));

    assert_eq!(chain.len(), 2);
    let store = chain.open_or_else(fallback);

    assert_eq!(store.source_description(), "Fallback");
}

#[test]
fn test_first_available_source_wins() {
    let temp_dir = TempDir::new().unwrap();

    let db_path = temp_dir.path().join("second.db");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (key TEXT PRIMARY KEY, word TEXT, meaning TEXT);
         INSERT INTO entries VALUES ('ಮನೆ', 'ಮನೆ', 'house');",
    )
    .unwrap();
    drop(conn);

    let json_path = temp_dir.path().join("third.json");
    fs::write(&json_path, r#"{"ಮನೆ": "home"}"#).unwrap();

    let chain = StoreChain::new()
        .with(SqliteLoader::new(temp_dir.path().join("missing.db"), "Missing"))
        .with(SqliteLoader::new(&db_path, "Second"))
        .with(JsonLoader::new(&json_path));

    let store = chain.open_or_else(fallback);

    assert_eq!(store.source_description(), "Second");
    assert_eq!(store.lookup("ಮನೆ").as_deref(), Some("house"));
}
