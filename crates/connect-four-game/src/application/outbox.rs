//! Per-recipient message queues produced by the state handlers.

use crate::domain::session::Session;

/// Messages queued by a handler, split by who should receive them.
///
/// Handlers only know "the sender" and "the other side". The controller
/// resolves the other side to a concrete identity before flushing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outbox {
    /// Messages for the identity that sent the command.
    pub sender: Vec<String>,
    /// Messages for the other participant.
    pub opponent: Vec<String>,
}

impl Outbox {
    /// Queue a message for the sender.
    pub fn to_sender(&mut self, message: impl Into<String>) {
        self.sender.push(message.into());
    }

    /// Queue a message for the other participant.
    pub fn to_opponent(&mut self, message: impl Into<String>) {
        self.opponent.push(message.into());
    }

    /// An outbox holding one reply to the sender.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        let mut outbox = Self::default();
        outbox.to_sender(message);
        outbox
    }
}

/// A handler's result: the session to persist and the messages to flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Session after the command.
    pub session: Session,
    /// Messages to deliver.
    pub outbox: Outbox,
}

impl Transition {
    /// Builds a transition to `session` with `outbox`.
    #[must_use]
    pub fn new(session: Session, outbox: Outbox) -> Self {
        Self { session, outbox }
    }
}
