//! In-memory configuration.

use std::{collections::HashMap, sync::RwLock};

use super::traits::ConfigRepository;

/// Mutable in-memory configuration store.
#[derive(Debug, Default)]
pub struct MapConfig {
    data: RwLock<HashMap<String, String>>,
}

impl MapConfig {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.insert(key.into(), value.into());
    }

    /// Remove a value.
    pub fn remove(&self, key: &str) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.remove(key);
    }
}

impl ConfigRepository for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.get(key).cloned()
    }
}
