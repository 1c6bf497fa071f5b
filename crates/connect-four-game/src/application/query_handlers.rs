//! Read-only answers to `help` and `status`.

use crate::domain::session::{GameMode, Session, SessionState};

const STATUS_HEADER: &str = "**Connect Four Game Status**\n\
    *If you suspect users are abusing the bot, please alert the bot owner*\n\n";

/// The command reference.
#[must_use]
pub fn help_message() -> String {
    "**Connect Four Bot Help:**\n\
     *Preface all commands with @bot-name*\n\n\
     * To see the current status of the game, type\n```status```\n\
     * To start a game against the computer, type\n```start game with computer```\n\
     * To start a game against another player, type\n```start game with user@example.com```\n\
     * To accept or decline an invitation, type\n```accept``` or ```decline```\n\
     * To make your move during a game, type\n```move <column-number>```\n\
     * To quit a game at any time, type\n```quit```\n\
     * To withdraw an invitation, type\n```withdraw invitation```"
        .to_owned()
}

/// Describes what the bot is doing for `session`.
#[must_use]
pub fn status_message(session: &Session) -> String {
    let participant = |slot: usize| session.participants.get(slot).map_or("", String::as_str);

    let body = match (session.state, session.mode) {
        (SessionState::Waiting, _) => "**The bot is not running a game right now!**\n\
             Type ```start game with user@example.com``` to start a game with another user,\n\
             or type ```start game with computer``` to start a game with the computer"
            .to_owned(),
        (SessionState::Inviting, _) => format!(
            "{}'s invitation to play {} is still pending. Wait for the game to finish to play a game.",
            participant(0),
            participant(1)
        ),
        (SessionState::Playing, GameMode::VsComputer) => format!(
            "The bot is currently running a single player game for {}.",
            participant(0)
        ),
        (SessionState::Playing, GameMode::VsHuman) => format!(
            "The bot is currently running a two player game between {} and {}.",
            participant(0),
            participant(1)
        ),
    };

    format!("{STATUS_HEADER}{body}")
}
