//! Inviting-state handler: accept, decline or withdraw a pending
//! invitation.
//!
//! Who may send which command is settled by the permission table before
//! this handler runs; here only the effects are applied.

use tracing::{info, instrument};

use crate::application::outbox::{Outbox, Transition};
use crate::domain::commands::GameCommand;
use crate::domain::messages;
use crate::domain::rejection::Rejection;
use crate::domain::session::{Session, SessionState};

/// Handles a command issued while an invitation is pending.
///
/// # Errors
///
/// Returns `Rejection::PermissionDenied` for commands that do not answer an
/// invitation.
#[instrument(skip(session), fields(state = ?session.state))]
pub fn handle(session: &Session, sender: &str, command: &GameCommand) -> Result<Transition, Rejection> {
    let (challenger, opponent) = match session.participants.as_slice() {
        [challenger, opponent] => (challenger.as_str(), opponent.as_str()),
        _ => return Err(Rejection::PermissionDenied(command.to_string())),
    };
    let mut outbox = Outbox::default();

    let next = match command {
        GameCommand::Accept => {
            outbox.to_sender(messages::invitation_accepted_by_you(challenger));
            outbox.to_sender(messages::wait_turn(challenger));

            let mut game = session.clone();
            game.state = SessionState::Playing;
            game.turn = 0;

            outbox.to_opponent(messages::invitation_accepted(opponent));
            outbox.to_opponent(messages::render_board(&game.grid));
            outbox.to_opponent(messages::your_turn(game.turn));
            info!(challenger, opponent, "invitation accepted, game started");
            game
        }
        GameCommand::Decline => {
            outbox.to_sender(messages::invitation_declined_by_you(challenger));
            outbox.to_opponent(messages::invitation_declined(opponent));
            info!(challenger, opponent, "invitation declined");
            Session::default()
        }
        GameCommand::WithdrawInvitation => {
            outbox.to_sender(messages::invitation_withdrawn_by_you(opponent));
            outbox.to_opponent(messages::invitation_withdrawn(challenger));
            info!(challenger, opponent, "invitation withdrawn");
            Session::default()
        }
        other => return Err(Rejection::PermissionDenied(other.to_string())),
    };

    Ok(Transition::new(next, outbox))
}
