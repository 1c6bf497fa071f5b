//! Test senders: mock `MessageSender` implementations for tests.

use std::sync::Mutex;

use connect_four_core::error::DomainError;
use connect_four_core::messaging::{MessageSender, OutboundMessage};

/// A sender that records every message handed to it.
#[derive(Debug, Default)]
pub struct RecordingMessageSender {
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingMessageSender {
    /// Create an empty recording sender.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all messages sent, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns the contents of all messages sent to `recipient`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sent_to(&self, recipient: &str) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.recipient == recipient)
            .map(|m| m.content.clone())
            .collect()
    }
}

impl MessageSender for RecordingMessageSender {
    fn send(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// A sender whose transport always refuses messages.
#[derive(Debug)]
pub struct FailingMessageSender;

impl MessageSender for FailingMessageSender {
    fn send(&self, _message: &OutboundMessage) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("transport unavailable".into()))
    }
}
