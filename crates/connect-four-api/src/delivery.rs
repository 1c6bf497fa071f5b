//! Outbound delivery for the server binary.

use connect_four_core::error::DomainError;
use connect_four_core::messaging::{MessageSender, OutboundMessage};
use tracing::info;

/// Records each outbound message in the log. The messages themselves reach
/// the chat transport through the HTTP response.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMessageSender;

impl MessageSender for LoggingMessageSender {
    fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        info!(
            recipient = %message.recipient,
            length = message.content.len(),
            "outbound message"
        );
        Ok(())
    }
}
