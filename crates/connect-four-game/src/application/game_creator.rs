//! Waiting-state handler: starts a single-player game or sends a
//! two-player invitation.

use tracing::{info, instrument};

use crate::application::outbox::{Outbox, Transition};
use crate::domain::commands::GameCommand;
use crate::domain::messages;
use crate::domain::rejection::Rejection;
use crate::domain::session::{Session, same_identity};

/// Handles a command issued while no engagement is running.
///
/// # Errors
///
/// Returns `Rejection::SelfChallenge` when the sender invites themselves,
/// and `Rejection::PermissionDenied` for commands that do not start a game.
#[instrument(skip(session), fields(state = ?session.state))]
pub fn handle(session: &Session, sender: &str, command: &GameCommand) -> Result<Transition, Rejection> {
    let mut outbox = Outbox::default();

    match command {
        GameCommand::StartWithComputer => {
            let game = Session::vs_computer(sender);
            outbox.to_sender(messages::computer_game_started());
            outbox.to_sender(messages::render_board(&game.grid));
            outbox.to_sender(messages::your_turn(game.turn));
            info!(player = sender, "started game against the computer");
            Ok(Transition::new(game, outbox))
        }
        GameCommand::StartWithUser { opponent } => {
            if same_identity(opponent, sender) {
                return Err(Rejection::SelfChallenge);
            }
            outbox.to_sender(messages::invitation_sent(opponent));
            outbox.to_opponent(messages::invitation_received(sender));
            info!(challenger = sender, opponent = %opponent, "invitation sent");
            Ok(Transition::new(Session::invitation(sender, opponent), outbox))
        }
        other => Err(Rejection::PermissionDenied(other.to_string())),
    }
}
