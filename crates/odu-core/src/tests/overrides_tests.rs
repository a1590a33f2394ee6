use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::overrides::{OverrideStore, parse_overrides};

/// Helper to create a temp dir plus paths for both backing files
fn temp_paths() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let overrides = temp_dir.path().join("dictionary_overrides.tsv");
    let missing = temp_dir.path().join("dictionary_missing.tsv");
    (temp_dir, overrides, missing)
}

#[test]
fn test_ensure_overrides_file_creates_template() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.ensure_overrides_file();

    let contents = fs::read_to_string(&overrides_path).unwrap();
    assert!(contents.contains("# Dictionary overrides (TSV)"));
    assert!(contents.contains("# Format: normalized_key<TAB>meaning"));
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_ensure_overrides_file_keeps_existing_content() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    fs::write(&overrides_path, "ಮನೆ\thome\n").unwrap();
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.ensure_overrides_file();
    store.ensure_overrides_file();

    assert_eq!(fs::read_to_string(&overrides_path).unwrap(), "ಮನೆ\thome\n");
}

#[test]
fn test_ensure_creates_missing_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let overrides_path = temp_dir.path().join("nested/dir/overrides.tsv");
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.ensure_overrides_file();

    assert!(overrides_path.exists());
}

#[test]
fn test_set_override_persists_normalized_key_and_trimmed_meaning() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.set_override("  HELLO ", "  hi  ");
    assert_eq!(store.lookup("hello").as_deref(), Some("hi"));

    let reloaded = OverrideStore::new(Some(overrides_path), None);
    assert_eq!(reloaded.lookup("hello").as_deref(), Some("hi"));
}

#[test]
fn test_saved_file_is_sorted_with_header() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.set_override("zebra", "striped");
    store.set_override("apple", "fruit");
    store.set_override("mango", "fruit too");

    let contents = fs::read_to_string(&overrides_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert!(lines[0].starts_with('#'));
    let entries: Vec<&str> = lines.into_iter().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(entries, ["apple\tfruit", "mango\tfruit too", "zebra\tstriped"]);
}

#[test]
fn test_blank_meaning_clears_override() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    let store = OverrideStore::new(Some(overrides_path.clone()), None);

    store.set_override("ಮನೆ", "home");
    store.set_override("ಮನೆ", "   ");

    assert!(store.lookup("ಮನೆ").is_none());
    assert!(store.is_empty());
    let reloaded = OverrideStore::new(Some(overrides_path), None);
    assert!(reloaded.lookup("ಮನೆ").is_none());
}

#[test]
fn test_load_ignores_comments_and_malformed_lines() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    let content = [
        "# Comment",
        "",
        "valid\tmeaning",
        "missing-tab-value",
        "empty-value\t",
        "\tempty-key",
        "another\tentry",
        "tabbed\tmeaning\twith tab",
    ]
    .join("\n");
    fs::write(&overrides_path, content).unwrap();

    let store = OverrideStore::new(Some(overrides_path), None);

    assert_eq!(store.lookup("valid").as_deref(), Some("meaning"));
    assert_eq!(store.lookup("another").as_deref(), Some("entry"));
    assert_eq!(store.lookup("tabbed").as_deref(), Some("meaning\twith tab"));
    assert!(store.lookup("missing-tab-value").is_none());
    assert!(store.lookup("empty-value").is_none());
    assert!(store.lookup("").is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_parse_handles_crlf() {
    let overrides = parse_overrides("# header\r\nಮನೆ\thouse\r\n\r\n");
    assert_eq!(overrides.get("ಮನೆ").map(String::as_str), Some("house"));
    assert_eq!(overrides.len(), 1);
}

#[test]
fn test_seed_skips_file_load() {
    let (_temp_dir, overrides_path, _) = temp_paths();
    fs::write(&overrides_path, "fromfile\tvalue\n").unwrap();

    let store = OverrideStore::with_seed(
        Some(overrides_path),
        None,
        [("seeded".to_string(), "value".to_string())],
    );

    assert!(store.lookup("fromfile").is_none());
    assert_eq!(store.lookup("seeded").as_deref(), Some("value"));
}

#[test]
fn test_lookup_does_not_normalize() {
    let store = OverrideStore::in_memory();
    store.set_override("Hello", "hi");

    assert_eq!(store.lookup("hello").as_deref(), Some("hi"));
    assert!(store.lookup("Hello").is_none());
}

#[test]
fn test_append_missing_adds_one_line_per_word() {
    let (_temp_dir, _, missing_path) = temp_paths();
    let store = OverrideStore::new(None, Some(missing_path.clone()));

    store.append_missing("ಮೊದಲ");
    store.append_missing("ಎರಡನೆ");

    let contents = fs::read_to_string(&missing_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ಮೊದಲ\t"));
    assert!(lines[1].starts_with("ಎರಡನೆ\t"));
}

#[test]
fn test_append_missing_never_deduplicates_or_rewrites() {
    let (_temp_dir, _, missing_path) = temp_paths();
    fs::write(&missing_path, "earlier\t2024-01-01T00:00:00Z\n").unwrap();
    let store = OverrideStore::new(None, Some(missing_path.clone()));

    store.append_missing("ಪದ");
    store.append_missing("ಪದ");

    let contents = fs::read_to_string(&missing_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "earlier\t2024-01-01T00:00:00Z");

    let (word, timestamp) = lines[2].split_once('\t').unwrap();
    assert_eq!(word, "ಪದ");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test]
fn test_io_failures_are_swallowed() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let store = OverrideStore::new(
        Some(blocker.join("overrides.tsv")),
        Some(blocker.join("missing.tsv")),
    );

    store.ensure_overrides_file();
    store.set_override("ಮನೆ", "home");
    store.append_missing("ಪದ");

    assert_eq!(store.lookup("ಮನೆ").as_deref(), Some("home"));
    assert!(!blocker.join("overrides.tsv").exists());
}

#[test]
fn test_store_without_paths_is_memory_only() {
    let store = OverrideStore::in_memory();
    store.ensure_overrides_file();
    store.append_missing("ಪದ");
    store.set_override("ಪದ", "word");

    assert_eq!(store.entries(), [("ಪದ".to_string(), "word".to_string())]);
    assert!(store.overrides_path().is_none());
}
