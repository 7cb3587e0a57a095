//! In-memory key-value store implementation for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{KVError, KVResult, KVStore};

/// An in-memory key-value store backed by a HashMap.
#[derive(Clone)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KVStore for MemoryStore {
    fn get(&self, key: &str) -> KVResult<Option<String>> {
        let data = self
            .data
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KVResult<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> KVResult<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| KVError::Storage(e.to_string()))?;
        data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let store = MemoryStore::new();

        // Set and get
        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));

        // Non-existent key
        assert_eq!(store.get("nonexistent").unwrap(), None);

        // Delete
        store.delete("key1").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();

        store.set("key1", "old").unwrap();
        store.set("key1", "new").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_delete_missing_key() {
        let store = MemoryStore::new();
        store.delete("never-set").unwrap();
    }
}
