//! Session controller: the single entry point for inbound chat messages.
//!
//! Each message is processed under a per-context lock:
//! load, authorize, dispatch, flush, persist. Rejections reply to the sender
//! and return before anything is written.

use std::sync::{Arc, Mutex};

use connect_four_core::command::Command;
use connect_four_core::error::DomainError;
use connect_four_core::messaging::{MessageSender, OutboundMessage};
use connect_four_core::repository::SnapshotStore;
use connect_four_core::rng::DeterministicRng;
use dashmap::DashMap;
use tracing::{debug, info, instrument, warn};

use crate::application::outbox::{Outbox, Transition};
use crate::application::{game_creator, game_handler, invitation_handler, query_handlers};
use crate::domain::commands::{GameCommand, InboundMessage};
use crate::domain::permissions::{verify_command, verify_user};
use crate::domain::rejection::Rejection;
use crate::domain::session::{COMPUTER_NAME, Session, SessionState};
use crate::domain::strategy::MoveStrategy;

/// Orchestrates one engagement per context.
pub struct SessionController {
    store: Arc<dyn SnapshotStore>,
    sender: Arc<dyn MessageSender>,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    strategy: Arc<dyn MoveStrategy>,
    locks: DashMap<String, Arc<tokio::sync::Mutex<()>>>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Create a controller over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        sender: Arc<dyn MessageSender>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        strategy: Arc<dyn MoveStrategy>,
    ) -> Self {
        Self {
            store,
            sender,
            rng,
            strategy,
            locks: DashMap::new(),
        }
    }

    /// Processes one inbound message and returns the messages delivered as a
    /// result, in delivery order.
    ///
    /// Rejected commands produce a single reply to the sender and leave the
    /// stored snapshot untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store fails or the
    /// stored snapshot cannot be decoded, and `DomainError::Validation` if
    /// the stored snapshot breaks a session invariant.
    #[instrument(
        skip(self, message),
        fields(
            correlation_id = %message.correlation_id(),
            command_type = message.command_type(),
            context = %message.context(),
            sender = %message.issuer(),
        )
    )]
    pub async fn handle(&self, message: &InboundMessage) -> Result<Vec<OutboundMessage>, DomainError> {
        let lock = self.context_lock(&message.context);
        let result = {
            let _guard = lock.lock().await;
            self.process(message).await
        };
        drop(lock);
        self.release_context_lock(&message.context);
        result
    }

    async fn process(&self, message: &InboundMessage) -> Result<Vec<OutboundMessage>, DomainError> {
        let snapshot = self.store.get(&message.context).await?;
        let session = Session::from_snapshot(snapshot)?;
        let sender = message.sender.as_str();

        let command = match authorize(&session, sender, &message.content) {
            Ok(Authorized::Command(command)) => command,
            Ok(Authorized::Reply(reply)) => return Ok(self.flush(sender, None, Outbox::single(reply))),
            Err(rejection) => return Ok(self.reject(sender, &rejection)),
        };

        let dispatched = {
            // Lock the RNG only for the synchronous handler, never across an await.
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
            dispatch(&session, sender, &command, self.strategy.as_ref(), &mut *rng)
        };
        let transition = match dispatched {
            Ok(transition) => transition,
            Err(rejection) => return Ok(self.reject(sender, &rejection)),
        };

        let opponent = resolve_opponent(&session, &transition.session, sender);
        let delivered = self.flush(sender, opponent.as_deref(), transition.outbox);

        self.store
            .put(&message.context, transition.session.to_snapshot()?)
            .await?;

        info!(
            command = %command,
            state = ?transition.session.state,
            delivered = delivered.len(),
            "command applied"
        );
        Ok(delivered)
    }

    fn reject(&self, sender: &str, rejection: &Rejection) -> Vec<OutboundMessage> {
        warn!(code = rejection.code(), "command rejected");
        self.flush(sender, None, Outbox::single(rejection.to_string()))
    }

    /// Delivers the sender queue, then the opponent queue. Messages for an
    /// unresolved or computer opponent are dropped.
    fn flush(&self, sender: &str, opponent: Option<&str>, outbox: Outbox) -> Vec<OutboundMessage> {
        let Outbox {
            sender: to_sender,
            opponent: to_opponent,
        } = outbox;

        let mut messages: Vec<OutboundMessage> = to_sender
            .into_iter()
            .map(|content| OutboundMessage::new(sender, content))
            .collect();

        match opponent {
            Some(opponent) if opponent != COMPUTER_NAME => messages.extend(
                to_opponent
                    .into_iter()
                    .map(|content| OutboundMessage::new(opponent, content)),
            ),
            _ if !to_opponent.is_empty() => {
                warn!(dropped = to_opponent.len(), "no human opponent to deliver to");
            }
            _ => {}
        }

        debug!(count = messages.len(), "flushing outbound messages");
        for message in &messages {
            if let Err(e) = self.sender.send(message) {
                warn!(recipient = %message.recipient, error = %e, "message delivery failed");
            }
        }
        messages
    }

    fn context_lock(&self, context: &str) -> Arc<tokio::sync::Mutex<()>> {
        Arc::clone(&self.locks.entry(context.to_owned()).or_default())
    }

    /// Evicts the lock for `context` once no other call holds or awaits it.
    fn release_context_lock(&self, context: &str) {
        self.locks
            .remove_if(context, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Number of contexts with a live lock entry.
    #[cfg(test)]
    fn tracked_contexts(&self) -> usize {
        self.locks.len()
    }
}

/// Outcome of the checks that run before any handler.
enum Authorized {
    /// A state-changing command for the matching handler.
    Command(GameCommand),
    /// A read-only answer; nothing is persisted.
    Reply(String),
}

/// Parses `content` and checks it against the session.
fn authorize(session: &Session, sender: &str, content: &str) -> Result<Authorized, Rejection> {
    let command = GameCommand::parse(content).ok_or(Rejection::UnrecognizedCommand)?;

    if command.is_universal() {
        let reply = match command {
            GameCommand::Status => query_handlers::status_message(session),
            _ => query_handlers::help_message(),
        };
        return Ok(Authorized::Reply(reply));
    }

    if session.state != SessionState::Waiting && !verify_user(sender, &session.participants) {
        return Err(Rejection::BusyConflict);
    }
    if !verify_command(sender, &command, session.state, &session.participants, session.turn) {
        return Err(Rejection::PermissionDenied(content.trim().to_owned()));
    }
    Ok(Authorized::Command(command))
}

/// Runs the handler for the session's current state.
fn dispatch(
    session: &Session,
    sender: &str,
    command: &GameCommand,
    strategy: &dyn MoveStrategy,
    rng: &mut dyn DeterministicRng,
) -> Result<Transition, Rejection> {
    match session.state {
        SessionState::Waiting => game_creator::handle(session, sender, command),
        SessionState::Inviting => invitation_handler::handle(session, sender, command),
        SessionState::Playing => game_handler::handle(session, sender, command, strategy, rng),
    }
}

/// The other participant, looked up before the handler ran and, failing
/// that, after it.
fn resolve_opponent(before: &Session, after: &Session, sender: &str) -> Option<String> {
    let source = if before.participants.is_empty() { after } else { before };
    source.opponent_of(sender).map(str::to_owned)
}
