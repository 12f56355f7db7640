//! `pagelog` - Capture-and-persist logging for webview page sessions.
//!
//! A bounded, crash-safe log capture library with support for:
//! - Severity filtering with a runtime-adjustable threshold
//! - Capacity-bounded persistence behind a pluggable key-value store
//! - Age-based expiry swept at store construction
//! - Colored diagnostic-console mirroring
//! - Host-environment error and rejection observers
//! - JSON export, file download, and per-level summaries
//!
//! # Example
//!
//! ```
//! use pagelog::{Level, LogStore, MemoryStorage, StaticHost};
//!
//! let store = LogStore::builder()
//!     .storage(MemoryStorage::new())
//!     .host(StaticHost::new().url("https://app.example/dashboard"))
//!     .console(false)
//!     .build();
//!
//! store.info("Dashboard loaded");
//! store.log(Level::Warn, "Cache miss", None);
//! assert_eq!(store.logs().len(), 2);
//! ```
//!
//! Logging must never be the reason an application faults: every storage
//! interaction is folded into a safe default (empty read, lost append), and
//! a store built without a host environment degrades to an inert no-op.

pub mod config;
pub mod console;
pub mod entry;
mod error;
pub mod global;
pub mod host;
pub mod level;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use console::{Color, ConsoleMirror};
pub use entry::LogEntry;
pub use error::Error;
pub use host::{EventObserver, HostEnv, HostEvent, NullHost, StaticHost};
pub use level::Level;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{LogStore, LogStoreBuilder, LogSummary};
