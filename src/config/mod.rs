//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic (path resolution,
//! file I/O) stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, GeneralConfig, HostConfig, StorageConfig, StoreConfig};

use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working store;
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity threshold and the gate apply to the whole store; they belong above any one collaborator.
    pub general: GeneralConfig,
    /// Capacity and retention of the persisted collection.
    pub store: StoreConfig,
    /// Which medium persists the collection, and where.
    pub storage: StorageConfig,
    /// Mirror visibility and styling are independent of what persistence does.
    pub console: ConsoleConfig,
    /// Absent section means headless: the factory wires an absent host and
    /// the store starts disabled.
    pub host: Option<HostConfig>,
}

impl Config {
    /// Primary entry point: loads the user's config from the platform
    /// config directory, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default
    /// location. Useful for tests and embedders with bundled config.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Platform config dir for pagelog: `~/.config/pagelog/pagelog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "pagelog")
            .map(|dirs| dirs.config_dir().join("pagelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores the level as a string for TOML ergonomics; this
    /// converts to the typed enum the store needs, defaulting to the
    /// capture-everything threshold on unknown strings.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Debug)
    }
}
