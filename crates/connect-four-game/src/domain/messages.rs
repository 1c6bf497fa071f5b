//! Message catalogue: every text the bot sends outside of rejections.

use super::board::{Board, COLUMNS};

const HEADER: &str = ":one: :two: :three: :four: :five: :six: :seven:";
const EMPTY_CELL: &str = ":heavy_large_circle:";

/// Emoji for each turn slot's token.
const TOKENS: [&str; 2] = [":blue_circle:", ":red_circle:"];

fn cell_emoji(value: i8) -> &'static str {
    match value {
        1 => TOKENS[0],
        -1 => TOKENS[1],
        _ => EMPTY_CELL,
    }
}

/// Renders the board: a header of column markers, then each row top to
/// bottom.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::from(HEADER);
    for row in board.rows() {
        out.push_str("\n\n");
        for &value in row.iter().take(COLUMNS) {
            out.push_str(cell_emoji(value));
            out.push(' ');
        }
    }
    out
}

/// Prompt sent to whoever holds the turn.
#[must_use]
pub fn your_turn(turn: u8) -> String {
    let token = TOKENS[usize::from(turn.min(1))];
    format!(
        "**It's your move!**\ntype ```move <column-number>``` to make your move\n\nYou are {token}"
    )
}

/// Prompt sent to whoever is waiting on `opponent`.
#[must_use]
pub fn wait_turn(opponent: &str) -> String {
    format!("Waiting for {opponent} to move")
}

/// Confirmation to the mover. `column` is 0-indexed.
#[must_use]
pub fn move_confirmation(column: usize) -> String {
    format!("You placed your token in column {}.", column + 1)
}

/// Alert to the side that did not move. `column` is 0-indexed.
#[must_use]
pub fn move_alert(mover: &str, column: usize) -> String {
    format!("**{mover} moved in column {}**.", column + 1)
}

/// Greeting for a new single-player game.
#[must_use]
pub fn computer_game_started() -> String {
    "**You started a new game with the computer!**".to_owned()
}

/// Confirmation to a challenger who just sent an invitation.
#[must_use]
pub fn invitation_sent(opponent: &str) -> String {
    format!(
        "You've sent an invitation to play Connect Four with {opponent}. \
         I'll let you know when they respond to the invitation"
    )
}

/// Alert to an invited identity.
#[must_use]
pub fn invitation_received(challenger: &str) -> String {
    format!(
        "**{challenger} has invited you to play a game of Connect Four.**\n\
         Type ```accept``` to accept the game invitation\n\
         Type ```decline``` to decline the game invitation."
    )
}

/// Told to the invitee after accepting.
#[must_use]
pub fn invitation_accepted_by_you(challenger: &str) -> String {
    format!("You accepted the invitation to play with {challenger}")
}

/// Told to the challenger when the invitee accepts.
#[must_use]
pub fn invitation_accepted(opponent: &str) -> String {
    format!("**{opponent} has accepted your invitation to play**")
}

/// Told to the invitee after declining.
#[must_use]
pub fn invitation_declined_by_you(challenger: &str) -> String {
    format!("You declined the invitation to play with {challenger}")
}

/// Told to the challenger when the invitee declines.
#[must_use]
pub fn invitation_declined(opponent: &str) -> String {
    format!(
        "**{opponent} has declined your invitation to play**\n\
         Invite another player by typing ```start game with user@example.com```"
    )
}

/// Told to the challenger after withdrawing.
#[must_use]
pub fn invitation_withdrawn_by_you(opponent: &str) -> String {
    format!("Your invitation to play {opponent} has been withdrawn")
}

/// Told to the invitee when the challenger withdraws.
#[must_use]
pub fn invitation_withdrawn(challenger: &str) -> String {
    format!(
        "**{challenger} has withdrawn their invitation to play you**\n\
         Type ```start game with {challenger}``` if you would like to play them."
    )
}

/// Asks for confirmation before forfeiting.
#[must_use]
pub fn quit_confirmation() -> String {
    "Are you sure you want to quit? You will forfeit the game!\n\
     Type ```confirm quit``` to forfeit."
        .to_owned()
}

/// Told to the side that forfeited.
#[must_use]
pub fn forfeit_loss() -> String {
    "**You have forfeit the game**\nSorry, but you lost :cry:".to_owned()
}

/// Told to the other side of a forfeit.
#[must_use]
pub fn forfeit_win(quitter: &str) -> String {
    format!("**{quitter} has forfeit the game**\nCongratulations, you win! :tada:")
}

/// Told to both sides of a drawn game.
#[must_use]
pub fn draw() -> String {
    "**It's a draw!**".to_owned()
}

/// Told to the winner.
#[must_use]
pub fn win() -> String {
    "**Congratulations, you win! :tada:**".to_owned()
}

/// Told to the loser.
#[must_use]
pub fn loss(winner: &str) -> String {
    format!("Sorry, but {winner} won :cry:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new());
        let lines: Vec<&str> = rendered.split("\n\n").collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], HEADER);
        for line in &lines[1..] {
            assert_eq!(line.matches(EMPTY_CELL).count(), 7);
        }
    }

    #[test]
    fn test_render_places_tokens_in_bottom_row() {
        let board = Board::new().make_move(0, 1).unwrap().make_move(6, -1).unwrap();
        let rendered = render_board(&board);
        let bottom = rendered.split("\n\n").last().unwrap();
        assert!(bottom.starts_with(":blue_circle: "));
        assert!(bottom.ends_with(":red_circle: "));
    }

    #[test]
    fn test_your_turn_names_token_for_turn() {
        assert!(your_turn(0).ends_with("You are :blue_circle:"));
        assert!(your_turn(1).ends_with("You are :red_circle:"));
    }

    #[test]
    fn test_move_texts_are_one_indexed() {
        assert_eq!(move_confirmation(0), "You placed your token in column 1.");
        assert_eq!(
            move_alert("the Computer", 6),
            "**the Computer moved in column 7**."
        );
    }
}
