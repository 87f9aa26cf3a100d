use crate::errors::AppResult;
use crate::store::{BundleStorage, CacheKey};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Process-local storage, mainly for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<CacheKey, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<CacheKey, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl BundleStorage for MemoryStorage {
    fn exists(&self, key: &CacheKey) -> bool {
        self.entries().contains_key(key)
    }

    fn read(&self, key: &CacheKey) -> AppResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &CacheKey, payload: &str) -> AppResult<()> {
        self.entries().insert(key.clone(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &CacheKey) -> AppResult<bool> {
        Ok(self.entries().remove(key).is_some())
    }

    fn keys(&self) -> AppResult<Vec<CacheKey>> {
        Ok(self.entries().keys().cloned().collect())
    }
}
