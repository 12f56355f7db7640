//! Tests for the construction-time retention sweep.

use chrono::{Duration, Utc};
use pagelog::{Level, LogEntry, LogStore, MemoryStorage, StaticHost, Storage};

fn entry_aged(days: i64, message: &str) -> LogEntry {
    LogEntry {
        timestamp: Utc::now() - Duration::days(days),
        level: Level::Info,
        message: message.to_string(),
        data: None,
        stack: None,
        url: None,
        user_agent: None,
    }
}

fn seed(storage: &MemoryStorage, key: &str, entries: &[LogEntry]) {
    let raw = serde_json::to_string(entries).unwrap();
    storage.set(key, &raw).unwrap();
}

fn build_on(storage: MemoryStorage) -> LogStore {
    LogStore::builder()
        .storage(storage)
        .host(StaticHost::new())
        .console(false)
        .build()
}

#[test]
fn expired_entries_swept_at_construction() {
    let storage = MemoryStorage::new();
    seed(
        &storage,
        "pagelog",
        &[entry_aged(40, "stale"), entry_aged(1, "fresh")],
    );

    let store = build_on(storage);

    let logs = store.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "fresh");
}

#[test]
fn slot_removed_when_nothing_survives() {
    let storage = MemoryStorage::new();
    seed(&storage, "pagelog", &[entry_aged(31, "stale")]);

    let store = build_on(storage.clone());

    assert!(store.logs().is_empty());
    assert_eq!(storage.get("pagelog").unwrap(), None);
}

#[test]
fn entries_inside_the_window_untouched() {
    let storage = MemoryStorage::new();
    seed(
        &storage,
        "pagelog",
        &[entry_aged(29, "old but valid"), entry_aged(0, "new")],
    );

    let store = build_on(storage.clone());

    assert_eq!(store.logs().len(), 2);
    // Sweep found nothing to remove, so the slot was not rewritten
    let raw = storage.get("pagelog").unwrap().unwrap();
    let parsed: Vec<LogEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn custom_window_respected() {
    let storage = MemoryStorage::new();
    seed(
        &storage,
        "pagelog",
        &[entry_aged(10, "outside"), entry_aged(3, "inside")],
    );

    let store = LogStore::builder()
        .storage(storage)
        .host(StaticHost::new())
        .console(false)
        .expire_days(7)
        .build();

    let logs = store.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "inside");
}
