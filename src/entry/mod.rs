//! The immutable captured log event and the stack-snapshot helpers that fill it.

use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};

/// One captured log event: append-only, never mutated after creation.
///
/// Wire names are camelCase so the exported JSON reads `userAgent`, matching
/// what log-viewing tooling expects from page-session captures. Optional
/// fields are omitted from serialization when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Creation time, serialized as an RFC 3339 string.
    pub timestamp: DateTime<Utc>,
    /// Severity at capture time; threshold changes never reclassify old entries.
    pub level: Level,
    /// Short human-readable description of the event.
    pub message: String,
    /// Opaque structured payload; the store never interprets it beyond the
    /// error-shaped `stack` check in [`attached_stack`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Call-stack snapshot: an attached trace from `data` when present,
    /// otherwise captured at the log call site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Page location at capture time, absent when the host can't supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Host identification string, absent when the host can't supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// The one place the opaque payload is inspected: an error-shaped value is any
/// map exposing a string `stack` field. Values that merely carry a `stack`
/// field without being errors are treated the same way.
#[must_use]
pub fn attached_stack(data: &Value) -> Option<String> {
    data.get("stack").and_then(Value::as_str).map(ToOwned::to_owned)
}

/// Call-site snapshot honoring `RUST_BACKTRACE`: with traces off this returns
/// `None` instead of paying the capture cost on every log call.
#[must_use]
pub fn capture_stack() -> Option<String> {
    let trace = Backtrace::capture();
    matches!(trace.status(), BacktraceStatus::Captured).then(|| trace.to_string())
}
