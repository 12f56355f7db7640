//! The log store: filters by severity, appends to the bounded persisted
//! collection, mirrors to the console, and serves reads/exports/summaries.
//!
//! The engineering contract of this module is total silence on persistence
//! failure: a log call returns normally whether the append landed or not, and
//! every read folds storage trouble into an empty result. Logging
//! infrastructure must never be the cause of an application fault.

mod builder;
mod from_config;
mod summary;

pub use builder::LogStoreBuilder;
pub use summary::LogSummary;

use crate::console::ConsoleMirror;
use crate::entry::{self, LogEntry};
use crate::host::{HostEnv, HostEvent};
use crate::level::Level;
use crate::storage::Storage;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// State shared between the application's handle and the host-event observer.
pub(crate) struct Shared {
    pub(crate) storage: Box<dyn Storage>,
    pub(crate) host: Box<dyn HostEnv>,
    pub(crate) console: Option<ConsoleMirror>,
    pub(crate) storage_key: String,
    pub(crate) max_entries: usize,
    pub(crate) expire_days: u32,
    /// Fixed at construction; `enable()` cannot resurrect a store whose host is absent.
    pub(crate) host_available: bool,
    pub(crate) enabled: AtomicBool,
    pub(crate) min_level: RwLock<Level>,
}

/// Handle to one page session's log store. `Clone` is cheap and all clones
/// share state, so the handle can be passed to whatever needs to log.
#[derive(Clone)]
pub struct LogStore {
    pub(crate) shared: Arc<Shared>,
}

impl LogStore {
    /// The builder hides the collaborator wiring that direct construction would expose.
    #[must_use]
    pub fn builder() -> LogStoreBuilder {
        LogStoreBuilder::new()
    }

    /// Core capture path: filters by severity, then persists and mirrors.
    ///
    /// Below-threshold and disabled-store calls are silent drops, not errors.
    /// A failed append still lets the console mirror happen.
    pub fn log(&self, level: Level, message: &str, data: Option<Value>) {
        self.log_captured(level, message, data, None);
    }

    /// Development-time diagnostics.
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message, None);
    }

    /// Normal operational milestones: page loaded, request completed, etc.
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message, None);
    }

    /// Non-fatal anomalies: retries, degraded features, recoverable errors.
    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message, None);
    }

    /// Failures, including the entries the host-event observers synthesize.
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message, None);
    }

    /// The full persisted collection, oldest first. Empty when disabled, when
    /// the slot is empty or unreadable, or when the payload was corrupt. A
    /// corrupt payload also clears the slot so the decode failure can't repeat.
    #[must_use]
    pub fn logs(&self) -> Vec<LogEntry> {
        if self.is_enabled() {
            self.read_slot()
        } else {
            Vec::new()
        }
    }

    /// Removes the persisted collection entirely. No-op while disabled, and a
    /// failed removal never surfaces to the caller.
    pub fn clear_logs(&self) {
        if self.is_enabled() {
            let _ = self.shared.storage.remove(&self.shared.storage_key);
        }
    }

    /// The collection as a pretty-printed JSON array, `"[]"` while disabled.
    #[must_use]
    pub fn export_logs(&self) -> String {
        if !self.is_enabled() {
            return String::from("[]");
        }
        serde_json::to_string_pretty(&self.read_slot()).unwrap_or_else(|_| String::from("[]"))
    }

    /// Saves the export through the host's download capability and returns
    /// the written path. `None` while disabled or when the host save failed;
    /// downloads follow the same never-raise contract as everything else.
    pub fn download_logs(&self, filename: Option<&str>) -> Option<PathBuf> {
        if !self.is_enabled() {
            return None;
        }
        let name = filename.map_or_else(default_export_name, ToOwned::to_owned);
        let contents = self.export_logs();
        self.shared.host.save_export(&name, &contents).ok()
    }

    /// Per-level counts over the persisted collection, all zero while disabled.
    #[must_use]
    pub fn summary(&self) -> LogSummary {
        if self.is_enabled() {
            LogSummary::of(&self.read_slot())
        } else {
            LogSummary::default()
        }
    }

    /// Re-opens the gate. Persisted data was never touched by `disable()`, so
    /// prior entries become visible again. Has no effect on an absent-host store.
    pub fn enable(&self) {
        self.shared.enabled.store(true, Ordering::Relaxed);
    }

    /// Closes the gate: reads refuse, writes and exports become no-ops.
    /// Persisted data stays where it is.
    pub fn disable(&self) {
        self.shared.enabled.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.host_available && self.shared.enabled.load(Ordering::Relaxed)
    }

    /// Changes the minimum level accepted by future log calls. Entries
    /// already persisted are not reclassified or dropped.
    pub fn set_level_threshold(&self, level: Level) {
        if let Ok(mut min_level) = self.shared.min_level.write() {
            *min_level = level;
        }
    }

    /// The threshold active for the next log call.
    #[must_use]
    pub fn level_threshold(&self) -> Level {
        self.shared.min_level.read().map_or(Level::Debug, |l| *l)
    }

    /// Tests and diagnostics need to verify the configured capacity bound.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.shared.max_entries
    }

    /// The one key this store owns in the storage medium.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.shared.storage_key
    }

    /// Shared capture path for direct calls (no stack override) and host
    /// events (stack taken from the event's error object when present).
    fn log_captured(
        &self,
        level: Level,
        message: &str,
        data: Option<Value>,
        stack_override: Option<String>,
    ) {
        if !self.is_enabled() || level < self.level_threshold() {
            return;
        }

        // Stack preference: the trace already attached to the payload beats a
        // fresh call-site capture
        let stack = stack_override
            .or_else(|| data.as_ref().and_then(entry::attached_stack))
            .or_else(entry::capture_stack);

        let log_entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            data,
            stack,
            url: self.shared.host.location(),
            user_agent: self.shared.host.user_agent(),
        };

        self.append(&log_entry);

        if let Some(console) = &self.shared.console {
            console.write(&log_entry);
        }
    }

    /// Appends under the capacity bound: oldest entries are evicted first
    /// once the collection would exceed `max_entries`.
    fn append(&self, log_entry: &LogEntry) {
        let mut entries = self.read_slot();
        entries.push(log_entry.clone());

        if entries.len() > self.shared.max_entries {
            let excess = entries.len() - self.shared.max_entries;
            entries.drain(..excess);
        }

        self.write_slot(&entries);
    }

    /// Reads the slot with every failure folded to empty. A payload that no
    /// longer decodes is removed on the spot, since leaving it would make every
    /// subsequent read fail the same way.
    fn read_slot(&self) -> Vec<LogEntry> {
        match self.shared.storage.get(&self.shared.storage_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|_| {
                let _ = self.shared.storage.remove(&self.shared.storage_key);
                Vec::new()
            }),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    /// Compact serialization for the persisted form; pretty-printing is
    /// reserved for exports. A refused write means the append is lost, which
    /// the failure contract accepts.
    fn write_slot(&self, entries: &[LogEntry]) {
        if let Ok(serialized) = serde_json::to_string(entries) {
            let _ = self.shared.storage.set(&self.shared.storage_key, &serialized);
        }
    }

    /// Construction-time retention sweep: nothing older than `expire_days`
    /// survives. The slot is rewritten only when the sweep removed something,
    /// and removed outright when nothing survives.
    pub(crate) fn sweep_expired(&self) {
        let entries = self.read_slot();
        if entries.is_empty() {
            return;
        }

        // An absurd retention window that underflows the calendar disables
        // the sweep rather than panicking
        let Some(cutoff) =
            Utc::now().checked_sub_signed(Duration::days(i64::from(self.shared.expire_days)))
        else {
            return;
        };

        let kept: Vec<LogEntry> = entries
            .iter()
            .filter(|e| e.timestamp >= cutoff)
            .cloned()
            .collect();

        if kept.len() == entries.len() {
            return;
        }

        if kept.is_empty() {
            let _ = self.shared.storage.remove(&self.shared.storage_key);
        } else {
            self.write_slot(&kept);
        }
    }

    /// Observer entry point: synthesizes an ERROR entry from the event's
    /// diagnostic fields and feeds it through the normal capture path, so
    /// threshold, capacity, and mirroring all apply as usual.
    pub(crate) fn capture_host_event(&self, event: &HostEvent) {
        match event {
            HostEvent::UncaughtError {
                message,
                filename,
                line,
                column,
                stack,
            } => {
                let data = json!({
                    "message": message,
                    "filename": filename,
                    "line": line,
                    "column": column,
                });
                self.log_captured(Level::Error, "Uncaught error", Some(data), stack.clone());
            }
            HostEvent::UnhandledRejection { reason } => {
                // An error-shaped rejection reason carries its own trace
                let stack = entry::attached_stack(reason);
                self.log_captured(
                    Level::Error,
                    "Unhandled promise rejection",
                    Some(json!({ "reason": reason })),
                    stack,
                );
            }
        }
    }
}

/// Timestamped default so repeated downloads don't overwrite each other.
/// Colons become dashes: the host writes to a real filesystem.
fn default_export_name() -> String {
    format!("logs-{}.json", Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ"))
}
