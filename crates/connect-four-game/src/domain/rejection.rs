//! Rejected commands.
//!
//! A rejection is answered with exactly one reply to the sender. The
//! `Display` text of each variant is that reply.

use thiserror::Error;

use super::board::BoardError;

/// Why a command was refused. None of these change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The text does not match the command grammar.
    #[error("Sorry, but I couldn't understand your input.\nType ```help``` to see a full list of commands.")]
    UnrecognizedCommand,

    /// Right grammar, wrong actor or state. Carries the command as typed.
    #[error("Sorry, but you can't run the command ```{0}```")]
    PermissionDenied(String),

    /// The move names a column that cannot take a token.
    #[error("That's an invalid move. Please specify a column with at least one blank space, between 1 and 7")]
    InvalidMove,

    /// The sender invited themselves.
    #[error("You can't play against yourself!")]
    SelfChallenge,

    /// A non-participant acted while an engagement is under way.
    #[error("Sorry, but other users are already using the bot. Type ```status``` to see the current status of the bot.")]
    BusyConflict,
}

impl Rejection {
    /// Stable machine-readable name, used in logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedCommand => "unrecognized_command",
            Self::PermissionDenied(_) => "permission_denied",
            Self::InvalidMove => "invalid_move",
            Self::SelfChallenge => "self_challenge",
            Self::BusyConflict => "busy_conflict",
        }
    }
}

impl From<BoardError> for Rejection {
    fn from(_: BoardError) -> Self {
        Self::InvalidMove
    }
}
