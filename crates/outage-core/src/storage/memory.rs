//! In-memory storage for tests. Not durable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::Result;

use super::Storage;

/// In-memory key/value storage backed by a mutex-guarded map.
///
/// Saves can be made to fail on demand so tests can exercise the store's
/// optimistic no-rollback behavior.
#[derive(Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, Value>>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of blobs currently held.
    pub fn len(&self) -> usize {
        self.blobs.lock().expect("storage mutex poisoned").len()
    }

    /// True when no blob has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, value: &Value) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(crate::ProtocolError::Internal {
                message: format!("Injected save failure for key '{key}'"),
            });
        }
        self.blobs
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self
            .blobs
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        let value = serde_json::json!({"steps": []});
        storage.save("k", &value).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(value));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_load_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("absent").unwrap(), None);
    }

    #[test]
    fn test_injected_save_failure() {
        let storage = MemoryStorage::new();
        storage.set_fail_saves(true);
        assert!(storage.save("k", &serde_json::json!(1)).is_err());

        storage.set_fail_saves(false);
        assert!(storage.save("k", &serde_json::json!(1)).is_ok());
    }
}
