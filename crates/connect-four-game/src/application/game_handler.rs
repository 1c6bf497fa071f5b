//! Playing-state handler: moves, turn alternation, game end, and the
//! computer's reply in single-player games.

use connect_four_core::rng::DeterministicRng;
use tracing::{debug, info, instrument};

use crate::application::outbox::{Outbox, Transition};
use crate::domain::board::{COMPUTER_TOKEN, GameOutcome, determine_game_over, token_for_slot};
use crate::domain::commands::GameCommand;
use crate::domain::messages;
use crate::domain::rejection::Rejection;
use crate::domain::session::{COMPUTER_NAME, GameMode, Session, same_identity};
use crate::domain::strategy::{MoveStrategy, computer_move};

/// Who placed a token in a half-move.
#[derive(Debug, Clone, Copy)]
enum Mover<'a> {
    /// The sender, facing another human.
    Human { name: &'a str, opponent: &'a str },
    /// The sender, facing the computer.
    Solo,
    /// The computer, replying to the sender.
    Computer,
}

/// Handles a command issued during a game.
///
/// # Errors
///
/// Returns `Rejection::InvalidMove` if the move names a column outside the
/// board or a full column, and `Rejection::PermissionDenied` for commands
/// that have no meaning during a game.
#[instrument(skip(session, strategy, rng), fields(state = ?session.state, turn = session.turn))]
pub fn handle(
    session: &Session,
    sender: &str,
    command: &GameCommand,
    strategy: &dyn MoveStrategy,
    rng: &mut dyn DeterministicRng,
) -> Result<Transition, Rejection> {
    let opponent = session.opponent_of(sender).unwrap_or(COMPUTER_NAME);
    let mut outbox = Outbox::default();

    match command {
        GameCommand::Quit => {
            outbox.to_sender(messages::quit_confirmation());
            Ok(Transition::new(session.clone(), outbox))
        }
        GameCommand::ConfirmQuit => {
            outbox.to_sender(messages::forfeit_loss());
            if session.mode == GameMode::VsHuman {
                outbox.to_opponent(messages::forfeit_win(sender));
            }
            info!(quitter = sender, "game forfeited");
            Ok(Transition::new(Session::default(), outbox))
        }
        GameCommand::Move { column } => {
            let column = usize::from(*column)
                .checked_sub(1)
                .filter(|&c| session.grid.validate_move(c))
                .ok_or(Rejection::InvalidMove)?;
            let slot = session
                .slot_of(sender)
                .ok_or_else(|| Rejection::PermissionDenied(command.to_string()))?;

            let mover = match session.mode {
                GameMode::VsHuman => Mover::Human {
                    name: sender,
                    opponent,
                },
                GameMode::VsComputer => Mover::Solo,
            };

            let mut game = session.clone();
            let ended = play_half_move(&mut game, column, token_for_slot(slot), mover, &mut outbox)?;

            if !ended && game.mode == GameMode::VsComputer {
                let reply = computer_move(&game.grid, strategy, rng);
                debug!(column = reply, "computer replies");
                play_half_move(&mut game, reply, COMPUTER_TOKEN, Mover::Computer, &mut outbox)?;
            }

            Ok(Transition::new(game, outbox))
        }
        other => Err(Rejection::PermissionDenied(other.to_string())),
    }
}

/// Places one token, queues the resulting messages, and either ends the
/// game or passes the turn. Returns `true` if the game ended.
fn play_half_move(
    game: &mut Session,
    column: usize,
    token: i8,
    mover: Mover<'_>,
    outbox: &mut Outbox,
) -> Result<bool, Rejection> {
    game.grid = game.grid.make_move(column, token)?;
    let board = messages::render_board(&game.grid);

    match mover {
        Mover::Human { name, .. } => {
            outbox.to_sender(messages::move_confirmation(column));
            outbox.to_sender(board.clone());
            outbox.to_opponent(messages::move_alert(name, column));
            outbox.to_opponent(board);
        }
        Mover::Solo => {
            outbox.to_sender(messages::move_confirmation(column));
            outbox.to_sender(board);
        }
        Mover::Computer => {
            outbox.to_sender(messages::move_alert(COMPUTER_NAME, column));
            outbox.to_sender(board);
        }
    }

    let (player_one, player_two) = game.players();
    if let Some(outcome) = determine_game_over(&game.grid, player_one, player_two) {
        queue_game_over(&outcome, mover, outbox);
        info!(?outcome, "game over");
        *game = Session::default();
        return Ok(true);
    }

    game.turn = 1 - game.turn;
    match mover {
        Mover::Human { opponent, .. } => {
            outbox.to_sender(messages::wait_turn(opponent));
            outbox.to_opponent(messages::your_turn(game.turn));
        }
        Mover::Solo => outbox.to_sender(messages::wait_turn(COMPUTER_NAME)),
        Mover::Computer => outbox.to_sender(messages::your_turn(game.turn)),
    }
    Ok(false)
}

/// Queues end-of-game texts. The sender is always a human; the other side
/// is only messaged when it is one too.
fn queue_game_over(outcome: &GameOutcome, mover: Mover<'_>, outbox: &mut Outbox) {
    let two_humans = matches!(mover, Mover::Human { .. });

    match outcome {
        GameOutcome::Draw => {
            outbox.to_sender(messages::draw());
            if two_humans {
                outbox.to_opponent(messages::draw());
            }
        }
        GameOutcome::Winner(winner) => {
            let sender_won = match mover {
                Mover::Human { name, .. } => same_identity(winner, name),
                Mover::Solo => winner != COMPUTER_NAME,
                Mover::Computer => false,
            };
            if sender_won {
                outbox.to_sender(messages::win());
            } else {
                outbox.to_sender(messages::loss(winner));
            }
            if two_humans {
                if sender_won {
                    outbox.to_opponent(messages::loss(winner));
                } else {
                    outbox.to_opponent(messages::win());
                }
            }
        }
    }
}
