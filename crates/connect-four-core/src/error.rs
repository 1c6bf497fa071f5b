//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// These are failures of the engine itself, not rejected user input. A
/// rejected command is answered with a reply and never surfaces here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Persisted state violates a session invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
