//! Tests for the capacity bound on the persisted collection.

use pagelog::{LogStore, MemoryStorage, StaticHost};

fn make_store(max_entries: usize) -> LogStore {
    LogStore::builder()
        .storage(MemoryStorage::new())
        .host(StaticHost::new())
        .console(false)
        .max_entries(max_entries)
        .build()
}

#[test]
fn oldest_evicted_first() {
    let store = make_store(5);

    for i in 0..8 {
        store.info(&format!("entry {i}"));
    }

    let logs = store.logs();
    assert_eq!(logs.len(), 5);

    let messages: Vec<&str> = logs.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["entry 3", "entry 4", "entry 5", "entry 6", "entry 7"]
    );
}

#[test]
fn exactly_at_capacity_keeps_everything() {
    let store = make_store(4);

    for i in 0..4 {
        store.info(&format!("entry {i}"));
    }

    assert_eq!(store.logs().len(), 4);
    assert_eq!(store.logs()[0].message, "entry 0");
}

#[test]
fn default_bound_holds_at_scale() {
    let store = LogStore::builder()
        .storage(MemoryStorage::new())
        .host(StaticHost::new())
        .console(false)
        .build();
    assert_eq!(store.max_entries(), 1000);

    for i in 0..1010 {
        store.info(&format!("entry {i}"));
    }

    let logs = store.logs();
    assert_eq!(logs.len(), 1000);
    // The ten oldest were evicted
    assert_eq!(logs[0].message, "entry 10");
    assert_eq!(logs[999].message, "entry 1009");
}
