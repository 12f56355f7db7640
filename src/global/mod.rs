//! Module-level default store: a convenience wrapper, not the primary
//! access path. Application code that doesn't want to thread a handle around
//! initializes once and uses the free-function shorthands.
//!
//! Uses `OnceLock` so the store is initialized exactly once, even if
//! multiple entry points race to call `init`.

use crate::level::Level;
use crate::store::LogStore;
use std::sync::OnceLock;

static DEFAULT_STORE: OnceLock<LogStore> = OnceLock::new();

/// Installs the default store. The first call wins; later calls drop their
/// argument and return the store already installed.
pub fn init(store: LogStore) -> &'static LogStore {
    DEFAULT_STORE.get_or_init(|| store)
}

/// Fallback initializer that wires the store from the user's config file,
/// used when no caller assembles collaborators by hand.
pub fn init_from_config() -> &'static LogStore {
    DEFAULT_STORE.get_or_init(LogStore::from_default_config)
}

/// The installed store, if any, for operations beyond the shorthands
/// (export, summary, threshold changes).
pub fn get() -> Option<&'static LogStore> {
    DEFAULT_STORE.get()
}

/// Pre-init calls silently vanish rather than crashing; safe during early startup.
fn log(level: Level, message: &str) {
    if let Some(store) = DEFAULT_STORE.get() {
        store.log(level, message, None);
    }
}

/// Development-time diagnostics.
pub fn debug(message: &str) {
    log(Level::Debug, message);
}

/// Normal operational milestones.
pub fn info(message: &str) {
    log(Level::Info, message);
}

/// Non-fatal anomalies.
pub fn warn(message: &str) {
    log(Level::Warn, message);
}

/// Failures.
pub fn error(message: &str) {
    log(Level::Error, message);
}
