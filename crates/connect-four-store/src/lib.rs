//! Connect Four bot: snapshot storage.
//!
//! Implementations of `SnapshotStore`: an in-process map for single-node
//! deployments and tests, and a PostgreSQL table for everything else.

pub mod memory;
pub mod pg_snapshot_store;
pub mod schema;
