//! Outbound message delivery abstraction.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A single private message addressed to one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Identity of the recipient.
    pub recipient: String,
    /// Message text.
    pub content: String,
}

impl OutboundMessage {
    /// Creates a new outbound message.
    #[must_use]
    pub fn new(recipient: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            content: content.into(),
        }
    }
}

/// Delivers outbound messages to the chat transport.
///
/// Delivery is fire-and-forget: callers log failures and never retry.
/// Implementations must not block on network I/O; hand the message off to
/// the transport and return.
pub trait MessageSender: Send + Sync {
    /// Hands one message to the transport.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the transport refuses the
    /// message.
    fn send(&self, message: &OutboundMessage) -> Result<(), DomainError>;
}
