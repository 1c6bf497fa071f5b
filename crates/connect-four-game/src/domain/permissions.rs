//! Permission table: which commands each participant slot may run in each
//! session state.
//!
//! Permissions are computed fresh from `(state, slot, turn)` on every
//! request. Nothing here is stored or mutated between requests.

use super::commands::{CommandKind, GameCommand};
use super::session::{SessionState, same_identity};

const WAITING: &[CommandKind] = &[CommandKind::StartWithComputer, CommandKind::StartWithUser];
const INVITING_CHALLENGER: &[CommandKind] = &[CommandKind::WithdrawInvitation];
const INVITING_OPPONENT: &[CommandKind] = &[CommandKind::Accept, CommandKind::Decline];
const PLAYING_TO_MOVE: &[CommandKind] = &[CommandKind::Move, CommandKind::Quit, CommandKind::ConfirmQuit];
const PLAYING_WAITING: &[CommandKind] = &[CommandKind::Quit, CommandKind::ConfirmQuit];

/// True iff `text` matches the command grammar. Independent of any session.
#[must_use]
pub fn valid_command(text: &str) -> bool {
    GameCommand::parse(text).is_some()
}

/// True iff `identity` is one of `participants`, ignoring ASCII case.
#[must_use]
pub fn verify_user(identity: &str, participants: &[String]) -> bool {
    participants.iter().any(|p| same_identity(p, identity))
}

/// Commands allowed for a participant.
///
/// While waiting nobody holds a slot and the list is shared by everyone;
/// `slot` is ignored. In the other states a missing slot allows nothing.
#[must_use]
pub fn allowed_commands(state: SessionState, slot: Option<usize>, turn: u8) -> &'static [CommandKind] {
    match (state, slot) {
        (SessionState::Waiting, _) => WAITING,
        (SessionState::Inviting, Some(0)) => INVITING_CHALLENGER,
        (SessionState::Inviting, Some(1)) => INVITING_OPPONENT,
        (SessionState::Playing, Some(s)) if s == usize::from(turn) => PLAYING_TO_MOVE,
        (SessionState::Playing, Some(0 | 1)) => PLAYING_WAITING,
        _ => &[],
    }
}

/// True iff `identity` may run `command` given the session's state,
/// participants and turn.
#[must_use]
pub fn verify_command(
    identity: &str,
    command: &GameCommand,
    state: SessionState,
    participants: &[String],
    turn: u8,
) -> bool {
    let slot = participants.iter().position(|p| same_identity(p, identity));
    allowed_commands(state, slot, turn).contains(&command.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<String> {
        vec!["alice@example.com".to_owned(), "bob@example.com".to_owned()]
    }

    fn cmd(text: &str) -> GameCommand {
        GameCommand::parse(text).unwrap()
    }

    #[test]
    fn test_valid_command_matches_grammar_only() {
        assert!(valid_command("move 3"));
        assert!(valid_command("START GAME WITH bob@example.com"));
        assert!(!valid_command("move"));
        assert!(!valid_command("dance"));
    }

    #[test]
    fn test_verify_user_checks_membership() {
        assert!(verify_user("bob@example.com", &pair()));
        assert!(!verify_user("carol@example.com", &pair()));
        assert!(!verify_user("bob@example.com", &[]));
        assert!(verify_user("Bob@Example.com", &pair()));
    }

    #[test]
    fn test_waiting_allows_start_commands_for_anyone() {
        assert!(verify_command(
            "carol@example.com",
            &cmd("start game with computer"),
            SessionState::Waiting,
            &[],
            0
        ));
        assert!(verify_command(
            "carol@example.com",
            &cmd("start game with bob@example.com"),
            SessionState::Waiting,
            &[],
            0
        ));
        assert!(!verify_command(
            "carol@example.com",
            &cmd("accept"),
            SessionState::Waiting,
            &[],
            0
        ));
        assert!(!verify_command(
            "carol@example.com",
            &cmd("move 1"),
            SessionState::Waiting,
            &[],
            0
        ));
    }

    #[test]
    fn test_inviting_splits_commands_by_slot() {
        let participants = pair();
        let challenger = "alice@example.com";
        let opponent = "bob@example.com";

        assert!(verify_command(challenger, &cmd("withdraw invitation"), SessionState::Inviting, &participants, 0));
        assert!(!verify_command(challenger, &cmd("accept"), SessionState::Inviting, &participants, 0));
        assert!(verify_command(opponent, &cmd("accept"), SessionState::Inviting, &participants, 0));
        assert!(verify_command(opponent, &cmd("decline"), SessionState::Inviting, &participants, 0));
        assert!(!verify_command(opponent, &cmd("withdraw invitation"), SessionState::Inviting, &participants, 0));
    }

    #[test]
    fn test_playing_move_follows_turn() {
        let participants = pair();
        let alice = "alice@example.com";
        let bob = "bob@example.com";

        assert!(verify_command(alice, &cmd("move 1"), SessionState::Playing, &participants, 0));
        assert!(!verify_command(bob, &cmd("move 1"), SessionState::Playing, &participants, 0));
        assert!(!verify_command(alice, &cmd("move 1"), SessionState::Playing, &participants, 1));
        assert!(verify_command(bob, &cmd("move 1"), SessionState::Playing, &participants, 1));
    }

    #[test]
    fn test_playing_quit_always_allowed_for_participants() {
        let participants = pair();
        for turn in 0..=1 {
            for who in ["alice@example.com", "bob@example.com"] {
                assert!(verify_command(who, &cmd("quit"), SessionState::Playing, &participants, turn));
                assert!(verify_command(who, &cmd("confirm quit"), SessionState::Playing, &participants, turn));
            }
        }
    }

    #[test]
    fn test_results_do_not_depend_on_call_history() {
        let participants = pair();
        let bob = "bob@example.com";
        assert!(verify_command(bob, &cmd("move 2"), SessionState::Playing, &participants, 1));
        // A different session in between must not leak into the next check.
        assert!(verify_command("x@y.com", &cmd("move 2"), SessionState::Playing, &["x@y.com".to_owned()], 0));
        assert!(!verify_command(bob, &cmd("move 2"), SessionState::Playing, &participants, 0));
    }

    #[test]
    fn test_non_participant_has_no_commands_outside_waiting() {
        assert!(allowed_commands(SessionState::Playing, None, 0).is_empty());
        assert!(allowed_commands(SessionState::Inviting, None, 0).is_empty());
    }
}
