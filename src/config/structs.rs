//! Configuration struct definitions.

use serde::Deserialize;
use std::collections::HashMap;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Initial gate state.
    pub enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            enabled: true,
        }
    }
}

/// Persisted-collection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key for the collection.
    pub key: String,
    /// Capacity bound, oldest evicted first.
    pub max_entries: usize,
    /// Retention window in days.
    pub expire_days: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: "pagelog".to_string(),
            max_entries: 1000,
            expire_days: 30,
        }
    }
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend kind ("file" or "memory").
    pub backend: String,
    /// Base directory override for the file backend.
    pub base_dir: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            base_dir: None,
        }
    }
}

/// Console mirror configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable the console mirror.
    pub enabled: bool,
    /// Enable colors.
    pub colors: bool,
    /// Per-level color overrides as `#RRGGBB` hex strings.
    pub level_colors: HashMap<String, String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            level_colors: HashMap::new(),
        }
    }
}

/// Host environment configuration. The section's presence in the config file
/// is what marks the environment as available.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Page location reported on captured entries.
    pub url: Option<String>,
    /// Identification string reported on captured entries.
    pub user_agent: Option<String>,
    /// Where downloaded exports land.
    pub download_dir: Option<String>,
}
