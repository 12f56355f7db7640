//! In-memory storage for tests and hosts without a durable medium.

use super::Storage;
use crate::error::Error;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// `Clone` shares the underlying map, so a test can seed or inspect the same
/// slot the store it handed the clone to is writing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
    /// Emulates the original medium's quota: `set` fails once total stored
    /// bytes would exceed it.
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quota-bounded variant for exercising the write-failure path.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            quota_bytes: Some(bytes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, Error> {
        self.inner
            .lock()
            .map_err(|_| Error::Storage("storage mutex poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut map = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            // The write replaces the key's old value, so that value's size
            // doesn't count against the quota
            let current: usize = map.values().map(String::len).sum();
            let replaced = map.get(key).map_or(0, String::len);
            if current - replaced + value.len() > quota {
                return Err(Error::Storage("quota exceeded".to_string()));
            }
        }

        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.lock()?.remove(key);
        Ok(())
    }
}
