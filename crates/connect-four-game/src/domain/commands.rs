//! Commands for the game session context.
//!
//! Inbound chat text is parsed against a fixed, case-insensitive grammar:
//!
//! ```text
//! help | status | start game with computer | start game with <email>
//! withdraw invitation | accept | decline | move <digit> | quit | confirm quit
//! ```

use std::fmt;

use connect_four_core::command::Command;
use uuid::Uuid;

/// One inbound chat message addressed to the bot.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Storage key of the engagement this message belongs to.
    pub context: String,
    /// Identity of the sender.
    pub sender: String,
    /// Raw message text.
    pub content: String,
}

impl InboundMessage {
    /// Creates an inbound message with a fresh correlation ID.
    #[must_use]
    pub fn new(
        context: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            context: context.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }
}

impl Command for InboundMessage {
    fn command_type(&self) -> &'static str {
        "connect_four.inbound_message"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn context(&self) -> &str {
        &self.context
    }

    fn issuer(&self) -> &str {
        &self.sender
    }
}

/// The command shape, without arguments. Permission entries are lists of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `help`
    Help,
    /// `status`
    Status,
    /// `start game with computer`
    StartWithComputer,
    /// `start game with <email>`
    StartWithUser,
    /// `withdraw invitation`
    WithdrawInvitation,
    /// `accept`
    Accept,
    /// `decline`
    Decline,
    /// `move <digit>`
    Move,
    /// `quit`
    Quit,
    /// `confirm quit`
    ConfirmQuit,
}

/// A parsed, grammatical command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Show the command reference.
    Help,
    /// Show what the bot is doing.
    Status,
    /// Start a single-player game.
    StartWithComputer,
    /// Invite another identity to a two-player game.
    StartWithUser {
        /// The invited identity, as typed.
        opponent: String,
    },
    /// Challenger cancels a pending invitation.
    WithdrawInvitation,
    /// Invitee accepts.
    Accept,
    /// Invitee declines.
    Decline,
    /// Drop a token. `column` is the 1-indexed digit as typed.
    Move {
        /// Column digit, 1-indexed.
        column: u8,
    },
    /// Ask to forfeit.
    Quit,
    /// Forfeit.
    ConfirmQuit,
}

const START_PREFIX: &str = "start game with ";
const MOVE_PREFIX: &str = "move ";

impl GameCommand {
    /// Parses trimmed input against the grammar. Empty input means `help`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let lowered = trimmed.to_lowercase();

        let command = match lowered.as_str() {
            "" | "help" => Self::Help,
            "status" => Self::Status,
            "start game with computer" => Self::StartWithComputer,
            "withdraw invitation" => Self::WithdrawInvitation,
            "accept" => Self::Accept,
            "decline" => Self::Decline,
            "quit" => Self::Quit,
            "confirm quit" => Self::ConfirmQuit,
            other => {
                if let Some(rest) = other.strip_prefix(MOVE_PREFIX) {
                    return parse_move(rest);
                }
                // The email is taken from the untouched input to keep its case.
                if let Some(opponent) = strip_prefix_ignore_ascii_case(trimmed, START_PREFIX) {
                    return is_email(opponent).then(|| Self::StartWithUser {
                        opponent: opponent.to_owned(),
                    });
                }
                return None;
            }
        };
        Some(command)
    }

    /// Returns the argument-free shape of this command.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Help => CommandKind::Help,
            Self::Status => CommandKind::Status,
            Self::StartWithComputer => CommandKind::StartWithComputer,
            Self::StartWithUser { .. } => CommandKind::StartWithUser,
            Self::WithdrawInvitation => CommandKind::WithdrawInvitation,
            Self::Accept => CommandKind::Accept,
            Self::Decline => CommandKind::Decline,
            Self::Move { .. } => CommandKind::Move,
            Self::Quit => CommandKind::Quit,
            Self::ConfirmQuit => CommandKind::ConfirmQuit,
        }
    }

    /// True for commands anyone may run in any state without touching the
    /// session.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Help | Self::Status)
    }
}

impl fmt::Display for GameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help"),
            Self::Status => f.write_str("status"),
            Self::StartWithComputer => f.write_str("start game with computer"),
            Self::StartWithUser { opponent } => write!(f, "{START_PREFIX}{opponent}"),
            Self::WithdrawInvitation => f.write_str("withdraw invitation"),
            Self::Accept => f.write_str("accept"),
            Self::Decline => f.write_str("decline"),
            Self::Move { column } => write!(f, "{MOVE_PREFIX}{column}"),
            Self::Quit => f.write_str("quit"),
            Self::ConfirmQuit => f.write_str("confirm quit"),
        }
    }
}

fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn parse_move(rest: &str) -> Option<GameCommand> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) => digit
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(|column| GameCommand::Move { column }),
        _ => None,
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `local@domain.tld`: local part of word characters, `.`, `+` or `-`;
/// domain of at least two dot-separated labels of word characters or `-`.
fn is_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| is_word(c) || matches!(c, '.' | '+' | '-'));
    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels
            .iter()
            .all(|label| !label.is_empty() && label.chars().all(|c| is_word(c) || c == '-'));
    local_ok && domain_ok
}
