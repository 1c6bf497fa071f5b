//! In-process `SnapshotStore`.

use std::collections::HashMap;

use async_trait::async_trait;
use connect_four_core::error::DomainError;
use connect_four_core::repository::SnapshotStore;
use tokio::sync::RwLock;

/// Keeps snapshots in a map for the life of the process.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError> {
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }
}
