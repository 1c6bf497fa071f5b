//! Inbound command metadata.

use uuid::Uuid;

/// What every inbound command exposes to logging and routing, independent
/// of its payload.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name of the command type, recorded as a log field.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried by every log line of one request.
    fn correlation_id(&self) -> Uuid;

    /// Storage key of the engagement the command addresses.
    fn context(&self) -> &str;

    /// Identity that issued the command.
    fn issuer(&self) -> &str;
}
