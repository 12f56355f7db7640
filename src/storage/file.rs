//! File-backed storage: one file per key under a state directory, the
//! durable default for hosts that persist through the filesystem.

use super::Storage;
use crate::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Maps each storage key to `<base_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Kept as the raw configured string so `~` expands at access time.
    base_dir: String,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage {
    /// Sensible XDG default path lets the builder work without any configuration for common setups.
    #[must_use]
    pub fn new() -> Self {
        let base_dir = directories::ProjectDirs::from("", "", "pagelog").map_or_else(
            || "pagelog-store".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("store")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self { base_dir }
    }

    /// Default XDG path doesn't work for every deployment (containers, custom setups).
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Config values use `~` for portability; the OS needs an absolute path for file operations.
    fn key_path(&self, key: &str) -> PathBuf {
        let expanded = shellexpand::tilde(&self.base_dir);
        PathBuf::from(expanded.as_ref()).join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
