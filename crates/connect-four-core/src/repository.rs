//! Snapshot store abstraction.
//!
//! The engine keeps no state between invocations. Everything it needs is
//! read from, and written back to, an opaque key-value store holding one
//! JSON snapshot per context.

use async_trait::async_trait;

use crate::error::DomainError;

/// Key-value store for serialized session snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot stored under `key`, or `None` if nothing was ever
    /// stored there.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Store `value` under `key`, replacing any previous snapshot.
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError>;
}
