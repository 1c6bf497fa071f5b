//! Integration tests for `PgSnapshotStore`.
//!
//! These need a running `PostgreSQL` reachable through `DATABASE_URL`; run
//! them with `cargo test -- --ignored`.

use connect_four_core::repository::SnapshotStore;
use connect_four_store::pg_snapshot_store::PgSnapshotStore;
use serde_json::json;
use sqlx::PgPool;

// --- get ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_get_returns_none_for_missing_key(pool: PgPool) {
    let store = PgSnapshotStore::new(pool);

    let value = store.get("connect_four").await.unwrap();

    assert!(value.is_none());
}

// --- put + get round-trip ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_put_and_get_round_trip(pool: PgPool) {
    let store = PgSnapshotStore::new(pool);
    let snapshot = json!({
        "state": "inviting",
        "participants": ["alice@example.com", "bob@example.com"],
        "mode": "vs_human"
    });

    store.put("connect_four", snapshot.clone()).await.unwrap();

    assert_eq!(store.get("connect_four").await.unwrap(), Some(snapshot));
}

// --- upsert ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_put_overwrites_existing_value(pool: PgPool) {
    let store = PgSnapshotStore::new(pool.clone());
    store
        .put("connect_four", json!({ "state": "inviting" }))
        .await
        .unwrap();

    store
        .put("connect_four", json!({ "state": "waiting" }))
        .await
        .unwrap();

    assert_eq!(
        store.get("connect_four").await.unwrap(),
        Some(json!({ "state": "waiting" }))
    );
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bot_storage")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// --- schema ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let store = PgSnapshotStore::new(pool);

    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();
}
