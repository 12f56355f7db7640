//! Direct `LogStore` construction would require knowing every collaborator's
//! internals; the builder hides that behind a stepwise API and performs the
//! construction-time duties (host detection, expiry sweep, observer wiring).

use super::{LogStore, Shared};
use crate::console::{Color, ConsoleMirror};
use crate::host::{HostEnv, NullHost};
use crate::level::Level;
use crate::storage::{MemoryStorage, Storage};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Once, RwLock};

/// The one user-visible signal this crate ever emits on its own behalf.
static ABSENT_HOST_NOTICE: Once = Once::new();

const DEFAULT_STORAGE_KEY: &str = "pagelog";
const DEFAULT_MAX_ENTRIES: usize = 1000;
const DEFAULT_EXPIRE_DAYS: u32 = 30;

pub struct LogStoreBuilder {
    storage: Option<Box<dyn Storage>>,
    host: Option<Box<dyn HostEnv>>,
    console_enabled: bool,
    mirror: ConsoleMirror,
    storage_key: String,
    max_entries: usize,
    expire_days: u32,
    enabled: bool,
    min_level: Level,
}

impl Default for LogStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStoreBuilder {
    /// Debug threshold by default: a capture buffer records everything
    /// unless told otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: None,
            host: None,
            console_enabled: true,
            mirror: ConsoleMirror::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            expire_days: DEFAULT_EXPIRE_DAYS,
            enabled: true,
            min_level: Level::Debug,
        }
    }

    /// The persistent medium. Defaults to [`MemoryStorage`], which lives only
    /// as long as the process.
    #[must_use]
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// The host environment. Without one the store builds against
    /// [`NullHost`] and is disabled from the start.
    #[must_use]
    pub fn host(mut self, host: impl HostEnv + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Turns the diagnostic-console mirror off entirely.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.mirror = self.mirror.colors(enabled);
        self
    }

    /// Default level colors may clash with the embedder's terminal theme.
    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.mirror = self.mirror.level_color(level, color);
        self
    }

    /// The single key this store owns in the storage medium.
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Capacity bound on the persisted collection; oldest entries are
    /// evicted first once exceeded.
    #[must_use]
    pub const fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Retention window enforced by the construction-time sweep.
    #[must_use]
    pub const fn expire_days(mut self, expire_days: u32) -> Self {
        self.expire_days = expire_days;
        self
    }

    /// Initial gate state; `enable()`/`disable()` toggle it later.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Minimum severity persisted and mirrored.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Detects the host, sweeps expired entries, and registers the passive
    /// error/rejection observers before handing the store out.
    #[must_use]
    pub fn build(self) -> LogStore {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()) as Box<dyn Storage>);
        let host = self
            .host
            .unwrap_or_else(|| Box::new(NullHost) as Box<dyn HostEnv>);
        let host_available = host.available();

        let store = LogStore {
            shared: Arc::new(Shared {
                storage,
                host,
                console: self.console_enabled.then_some(self.mirror),
                storage_key: self.storage_key,
                max_entries: self.max_entries,
                expire_days: self.expire_days,
                host_available,
                enabled: AtomicBool::new(self.enabled),
                min_level: RwLock::new(self.min_level),
            }),
        };

        if host_available {
            store.sweep_expired();

            // The observer holds only a weak reference: a dropped store's
            // observer goes inert instead of keeping the state alive through
            // the host's observer list
            let weak = Arc::downgrade(&store.shared);
            store.shared.host.subscribe(Arc::new(move |event| {
                if let Some(shared) = weak.upgrade() {
                    LogStore { shared }.capture_host_event(event);
                }
            }));
        } else {
            ABSENT_HOST_NOTICE.call_once(|| {
                eprintln!("pagelog: no host environment detected, log capture disabled");
            });
        }

        store
    }
}
