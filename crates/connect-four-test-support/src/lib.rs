//! Shared test mocks and utilities for the Connect Four bot engine.

mod rng;
mod sender;
mod store;

pub use rng::{MockRng, SequenceRng};
pub use sender::{FailingMessageSender, RecordingMessageSender};
pub use store::{FailingSnapshotStore, RecordingSnapshotStore};
