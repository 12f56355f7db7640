//! The host-environment collaborator: supplies ambient page context (URL,
//! user agent), the global error/rejection event channels, and the save-file
//! capability that downloads delegate to. A store built on an absent host is
//! fully disabled rather than special-cased throughout the core.

use crate::error::Error;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Diagnostic payloads of the two global event channels the store observes.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// An uncaught synchronous error surfaced by the host.
    UncaughtError {
        message: String,
        filename: String,
        line: u32,
        column: u32,
        /// Trace attached by the host's error object, when one was available.
        stack: Option<String>,
    },
    /// An asynchronous rejection nothing handled, carrying its reason value.
    UnhandledRejection { reason: Value },
}

/// Observers stay registered for the lifetime of the page; there is no
/// unsubscribe, so implementations hold them until the host itself goes away.
pub type EventObserver = Arc<dyn Fn(&HostEvent) + Send + Sync>;

/// Browser-like environment the store derives ambient context from.
pub trait HostEnv: Send + Sync {
    /// Absence is a supported configuration: a store built on an unavailable
    /// host disables itself entirely.
    fn available(&self) -> bool;

    /// Current page location, when the host has one.
    fn location(&self) -> Option<String>;

    /// Host identification string, when the host has one.
    fn user_agent(&self) -> Option<String>;

    /// Registers a passive observer on the error and rejection channels.
    fn subscribe(&self, observer: EventObserver);

    /// Saves an export to the host's download area and returns the written path.
    ///
    /// # Errors
    /// The host has no download capability, or writing the file failed.
    fn save_export(&self, filename: &str, contents: &str) -> Result<PathBuf, Error>;
}

/// The absent environment. Everything is inert, which lets the store treat
/// "no host" as just another collaborator instead of a branch in every method.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl HostEnv for NullHost {
    fn available(&self) -> bool {
        false
    }

    fn location(&self) -> Option<String> {
        None
    }

    fn user_agent(&self) -> Option<String> {
        None
    }

    fn subscribe(&self, _observer: EventObserver) {}

    fn save_export(&self, _filename: &str, _contents: &str) -> Result<PathBuf, Error> {
        Err(Error::HostUnavailable)
    }
}

/// Embedder-configured environment: fixed page context, an `emit` method the
/// embedder forwards host error events through, and a download directory for
/// saved exports. `Clone` shares the observer list, so the embedder keeps one
/// handle for emitting while the store holds another.
#[derive(Clone)]
pub struct StaticHost {
    url: Option<String>,
    user_agent: Option<String>,
    download_dir: PathBuf,
    observers: Arc<Mutex<Vec<EventObserver>>>,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticHost {
    /// Defaults the download area to the user's download directory, matching
    /// where a page-session host would drop a saved file.
    #[must_use]
    pub fn new() -> Self {
        let download_dir = directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            url: None,
            user_agent: None,
            download_dir,
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Page location reported on every captured entry.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Identification string reported on every captured entry.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The default download directory doesn't work for every deployment.
    #[must_use]
    pub fn download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Fans an event out to every subscribed observer. The embedder calls
    /// this from whatever thread surfaces the host's error events; observers
    /// run the store's normal synchronous logging path.
    pub fn emit(&self, event: &HostEvent) {
        // Snapshot under the lock so an observer that logs (and so touches
        // this host again) can't deadlock on it
        let observers: Vec<EventObserver> = match self.observers.lock() {
            Ok(observers) => observers.clone(),
            Err(_) => return,
        };

        for observer in observers {
            observer(event);
        }
    }
}

impl HostEnv for StaticHost {
    fn available(&self) -> bool {
        true
    }

    fn location(&self) -> Option<String> {
        self.url.clone()
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn subscribe(&self, observer: EventObserver) {
        if let Ok(mut observers) = self.observers.lock() {
            observers.push(observer);
        }
    }

    fn save_export(&self, filename: &str, contents: &str) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(filename);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
