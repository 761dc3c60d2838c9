//! In-memory storage backend

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::backend::StorageBackend;
use crate::error::BackendResult;

/// Volatile backend for tests and ephemeral profiles. Records live in a
/// plain map and vanish with the process.
pub struct MemoryBackend {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> BackendResult<Option<String>> {
        Ok(self.records.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> BackendResult<()> {
        self.records
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BackendResult<()> {
        self.records.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> BackendResult<()> {
        self.records.write().clear();
        Ok(())
    }
}
