//! Computer opponent move selection.

use connect_four_core::rng::DeterministicRng;
use tracing::warn;

use super::board::{Board, COMPUTER_TOKEN};

/// Picks a column for the computer.
///
/// `valid_columns` is never empty. Randomness comes only from `rng` so
/// tests can make the choice deterministic.
pub trait MoveStrategy: Send + Sync + std::fmt::Debug {
    /// Returns one of `valid_columns`.
    fn select_column(
        &self,
        board: &Board,
        valid_columns: &[usize],
        rng: &mut dyn DeterministicRng,
    ) -> usize;
}

/// Uniformly random among the valid columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn select_column(
        &self,
        _board: &Board,
        valid_columns: &[usize],
        rng: &mut dyn DeterministicRng,
    ) -> usize {
        pick(valid_columns, rng)
    }
}

/// Takes an immediate win, otherwise blocks an immediate loss, otherwise
/// plays randomly.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyStrategy;

impl MoveStrategy for GreedyStrategy {
    fn select_column(
        &self,
        board: &Board,
        valid_columns: &[usize],
        rng: &mut dyn DeterministicRng,
    ) -> usize {
        let completes_line = |token: i8| {
            valid_columns.iter().copied().find(|&column| {
                board
                    .make_move(column, token)
                    .is_ok_and(|next| next.winning_token() == Some(token))
            })
        };

        completes_line(COMPUTER_TOKEN)
            .or_else(|| completes_line(-COMPUTER_TOKEN))
            .unwrap_or_else(|| pick(valid_columns, rng))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pick(valid_columns: &[usize], rng: &mut dyn DeterministicRng) -> usize {
    let last = (valid_columns.len() - 1) as u32;
    let index = rng.next_u32_range(0, last) as usize;
    valid_columns[index.min(valid_columns.len() - 1)]
}

/// Chooses the computer's next column. The result always passes
/// `board.validate_move`.
///
/// # Panics
///
/// Panics if the board has no valid column. Callers only ask for a move on
/// a board that did not just end in a draw, so a full board here is a bug.
pub fn computer_move(
    board: &Board,
    strategy: &dyn MoveStrategy,
    rng: &mut dyn DeterministicRng,
) -> usize {
    let valid_columns = board.valid_columns();
    assert!(
        !valid_columns.is_empty(),
        "computer_move called on a board with no valid column"
    );

    let column = strategy.select_column(board, &valid_columns, rng);
    if board.validate_move(column) {
        column
    } else {
        warn!(column, ?strategy, "strategy chose an invalid column, falling back");
        valid_columns[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four_test_support::{MockRng, SequenceRng};

    #[derive(Debug)]
    struct AlwaysColumn(usize);

    impl MoveStrategy for AlwaysColumn {
        fn select_column(&self, _: &Board, _: &[usize], _: &mut dyn DeterministicRng) -> usize {
            self.0
        }
    }

    fn fill_column(mut board: Board, column: usize) -> Board {
        for i in 0..6 {
            let token = if i % 2 == 0 { 1 } else { -1 };
            board = board.make_move(column, token).unwrap();
        }
        board
    }

    #[test]
    fn test_random_strategy_uses_rng_index_into_valid_columns() {
        let board = fill_column(Board::new(), 0);
        let mut rng = SequenceRng::new(vec![2]);
        // Valid columns are 1..=6; index 2 is column 3.
        assert_eq!(computer_move(&board, &RandomStrategy, &mut rng), 3);
    }

    #[test]
    fn test_random_strategy_never_returns_full_column() {
        let board = fill_column(fill_column(Board::new(), 0), 1);
        let mut rng = MockRng;
        let column = computer_move(&board, &RandomStrategy, &mut rng);
        assert!(board.validate_move(column));
        assert_eq!(column, 2);
    }

    #[test]
    fn test_invalid_strategy_answer_falls_back_to_first_valid_column() {
        let board = fill_column(Board::new(), 0);
        let mut rng = MockRng;
        assert_eq!(computer_move(&board, &AlwaysColumn(0), &mut rng), 1);
        assert_eq!(computer_move(&board, &AlwaysColumn(42), &mut rng), 1);
    }

    #[test]
    #[should_panic(expected = "no valid column")]
    fn test_computer_move_panics_on_full_board() {
        let mut board = Board::new();
        for column in 0..7 {
            board = fill_column(board, column);
        }
        let mut rng = MockRng;
        let _ = computer_move(&board, &RandomStrategy, &mut rng);
    }

    #[test]
    fn test_greedy_takes_winning_column() {
        let mut board = Board::new();
        for _ in 0..3 {
            board = board.make_move(5, COMPUTER_TOKEN).unwrap();
        }
        board = board.make_move(0, 1).unwrap();
        let mut rng = MockRng;
        assert_eq!(computer_move(&board, &GreedyStrategy, &mut rng), 5);
    }

    #[test]
    fn test_greedy_blocks_opponent_line() {
        let mut board = Board::new();
        for column in 1..4 {
            board = board.make_move(column, 1).unwrap();
        }
        let mut rng = MockRng;
        // Either end completes the line; the lowest valid one is blocked.
        assert_eq!(computer_move(&board, &GreedyStrategy, &mut rng), 0);
    }

    #[test]
    fn test_greedy_falls_back_to_random() {
        let board = Board::new();
        let mut rng = SequenceRng::new(vec![4]);
        assert_eq!(computer_move(&board, &GreedyStrategy, &mut rng), 4);
    }
}
