//! Tests for the passive error/rejection observers.

use pagelog::{HostEvent, Level, LogStore, MemoryStorage, StaticHost};
use serde_json::json;

fn make_store(host: &StaticHost) -> LogStore {
    LogStore::builder()
        .storage(MemoryStorage::new())
        .host(host.clone())
        .console(false)
        .build()
}

#[test]
fn uncaught_error_becomes_one_error_entry() {
    let host = StaticHost::new().url("https://app.example/page");
    let store = make_store(&host);

    host.emit(&HostEvent::UncaughtError {
        message: "x is not a function".to_string(),
        filename: "https://app.example/bundle.js".to_string(),
        line: 120,
        column: 17,
        stack: None,
    });

    let logs = store.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, Level::Error);
    assert_eq!(logs[0].message, "Uncaught error");

    let data = logs[0].data.as_ref().unwrap();
    assert_eq!(data.get("message"), Some(&json!("x is not a function")));
    assert_eq!(
        data.get("filename"),
        Some(&json!("https://app.example/bundle.js"))
    );
    assert_eq!(data.get("line"), Some(&json!(120)));
    assert_eq!(data.get("column"), Some(&json!(17)));
}

#[test]
fn event_stack_lands_on_the_entry() {
    let host = StaticHost::new();
    let store = make_store(&host);

    host.emit(&HostEvent::UncaughtError {
        message: "boom".to_string(),
        filename: "bundle.js".to_string(),
        line: 1,
        column: 1,
        stack: Some("at boom (bundle.js:1:1)".to_string()),
    });

    assert_eq!(
        store.logs()[0].stack.as_deref(),
        Some("at boom (bundle.js:1:1)")
    );
}

#[test]
fn rejection_reason_is_recorded() {
    let host = StaticHost::new();
    let store = make_store(&host);

    host.emit(&HostEvent::UnhandledRejection {
        reason: json!("network unreachable"),
    });

    let logs = store.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, Level::Error);
    assert_eq!(logs[0].message, "Unhandled promise rejection");
    assert_eq!(
        logs[0].data.as_ref().unwrap().get("reason"),
        Some(&json!("network unreachable"))
    );
}

#[test]
fn error_shaped_rejection_reason_contributes_its_stack() {
    let host = StaticHost::new();
    let store = make_store(&host);

    host.emit(&HostEvent::UnhandledRejection {
        reason: json!({ "message": "timeout", "stack": "at fetch (app.js:3:9)" }),
    });

    assert_eq!(
        store.logs()[0].stack.as_deref(),
        Some("at fetch (app.js:3:9)")
    );
}

#[test]
fn events_respect_the_gate() {
    let host = StaticHost::new();
    let store = make_store(&host);
    store.disable();

    host.emit(&HostEvent::UnhandledRejection { reason: json!(1) });

    store.enable();
    assert!(store.logs().is_empty());
}

#[test]
fn observer_goes_inert_when_store_dropped() {
    let host = StaticHost::new();
    let store = make_store(&host);
    drop(store);

    // Nothing upgrades, nothing panics
    host.emit(&HostEvent::UnhandledRejection { reason: json!(1) });
}
