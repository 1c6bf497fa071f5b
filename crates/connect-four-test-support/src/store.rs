//! Test stores: mock `SnapshotStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use connect_four_core::error::DomainError;
use connect_four_core::repository::SnapshotStore;

/// A working in-memory store that also records every `put` call, so tests
/// can assert both on the latest snapshot and on whether anything was
/// written at all.
#[derive(Debug, Default)]
pub struct RecordingSnapshotStore {
    entries: Mutex<HashMap<String, serde_json::Value>>,
    puts: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`. The seed is
    /// not counted as a `put`.
    #[must_use]
    pub fn with_snapshot(key: &str, value: serde_json::Value) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value);
        store
    }

    /// Returns a snapshot of all `put` calls, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn puts(&self) -> Vec<(String, serde_json::Value)> {
        self.puts.lock().unwrap().clone()
    }

    /// Returns the value currently stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn current(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl SnapshotStore for RecordingSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError> {
        self.puts
            .lock()
            .unwrap()
            .push((key.to_owned(), value.clone()));
        self.entries.lock().unwrap().insert(key.to_owned(), value);
        Ok(())
    }
}

/// A store that always returns an infrastructure error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingSnapshotStore;

#[async_trait]
impl SnapshotStore for FailingSnapshotStore {
    async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn put(&self, _key: &str, _value: serde_json::Value) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
