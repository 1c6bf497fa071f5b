//! `PostgreSQL` implementation of the `SnapshotStore` trait.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use connect_four_core::error::DomainError;
use connect_four_core::repository::SnapshotStore;

use crate::schema::CREATE_BOT_STORAGE_TABLE;

/// PostgreSQL-backed snapshot store over the `bot_storage` table.
#[derive(Debug, Clone)]
pub struct PgSnapshotStore {
    pool: PgPool,
}

impl PgSnapshotStore {
    /// Creates a new `PgSnapshotStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `bot_storage` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_BOT_STORAGE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(())
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(format!("snapshot store: {err}"))
}

#[async_trait]
impl SnapshotStore for PgSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        let row = sqlx::query("SELECT value FROM bot_storage WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure)?;

        row.map(|row| row.try_get::<serde_json::Value, _>("value"))
            .transpose()
            .map_err(infrastructure)
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError> {
        sqlx::query(
            r"INSERT INTO bot_storage (key, value, updated_at)
              VALUES ($1, $2, NOW())
              ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&value)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        debug!(key, "snapshot stored");
        Ok(())
    }
}
