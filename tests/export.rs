//! Tests for JSON export and host-delegated downloads.

use pagelog::{Level, LogEntry, LogStore, MemoryStorage, StaticHost};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn make_store(download_dir: &std::path::Path) -> LogStore {
    LogStore::builder()
        .storage(MemoryStorage::new())
        .host(
            StaticHost::new()
                .url("https://app.example/checkout")
                .user_agent("test-agent/1.0")
                .download_dir(download_dir),
        )
        .console(false)
        .build()
}

#[test]
fn export_round_trips_field_for_field() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());

    store.info("plain entry");
    store.log(
        Level::Error,
        "with payload",
        Some(json!({ "code": 500, "stack": "at handler (app.js:5:1)" })),
    );

    let exported = store.export_logs();
    let parsed: Vec<LogEntry> = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed, store.logs());
}

#[test]
fn export_is_pretty_printed_with_camel_case_names() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());
    store.warn("styled");

    let exported = store.export_logs();

    // 2-space indentation, one field per line
    assert!(exported.starts_with("[\n  {"));
    assert!(exported.contains("\"level\": \"WARN\""));
    assert!(exported.contains("\"userAgent\": \"test-agent/1.0\""));
    assert!(exported.contains("\"url\": \"https://app.example/checkout\""));
}

#[test]
fn export_while_disabled_is_empty_collection() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());
    store.info("hidden");
    store.disable();

    assert_eq!(store.export_logs(), "[]");
}

#[test]
fn download_uses_timestamped_default_name() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());
    store.info("saved");

    let path = store.download_logs(None).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();

    assert!(name.starts_with("logs-"));
    assert!(name.ends_with(".json"));
    // Path-safe on every filesystem the host may write to
    assert!(!name.contains(':'));

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, store.export_logs());
}

#[test]
fn download_respects_explicit_filename() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());
    store.info("saved");

    let path = store.download_logs(Some("session-logs.json")).unwrap();
    assert_eq!(path, dir.path().join("session-logs.json"));
    assert!(path.exists());
}

#[test]
fn download_while_disabled_is_noop() {
    let dir = tempdir().unwrap();
    let store = make_store(dir.path());
    store.info("hidden");
    store.disable();

    assert_eq!(store.download_logs(Some("never.json")), None);
    assert!(!dir.path().join("never.json").exists());
}
