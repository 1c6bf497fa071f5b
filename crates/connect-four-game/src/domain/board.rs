//! Board rules: grid state, move validation, move application, and
//! win/draw detection.
//!
//! The grid is stored row-major with row 0 at the top. A token dropped into
//! a column falls to the lowest empty row, so a column is full exactly when
//! its top cell is occupied.

use thiserror::Error;

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of equal tokens in a line needed to win.
const CONNECT: usize = 4;

/// Token sign placed by the computer opponent.
pub const COMPUTER_TOKEN: i8 = -1;

/// Raw grid rows, top row first.
pub type Grid = [[i8; COLUMNS]; ROWS];

/// Errors raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The column index is not on the board.
    #[error("column {0} is outside the board")]
    ColumnOutOfRange(usize),

    /// The column has no empty cell left.
    #[error("column {0} is full")]
    ColumnFull(usize),

    /// A token value other than -1 or 1 was supplied.
    #[error("invalid token {0}")]
    InvalidToken(i8),

    /// A persisted cell holds a value outside {-1, 0, 1}.
    #[error("cell ({row}, {column}) holds invalid value {value}")]
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// The value found.
        value: i64,
    },

    /// Persisted rows are not 6 rows of 7 cells.
    #[error("grid must be {ROWS} rows of {COLUMNS} cells")]
    InvalidShape,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// The identity owning the four-in-a-row.
    Winner(String),
    /// The board filled up with no four-in-a-row.
    Draw,
}

/// Returns the token sign owned by a participant slot: `1` for slot 0 and
/// `-1` for slot 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn token_for_slot(slot: usize) -> i8 {
    1 - 2 * (slot.min(1) as i8)
}

/// A 6×7 Connect Four board. Cells hold `0` (empty), `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw rows, rejecting cells outside {-1, 0, 1}.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidCell` for the first offending cell.
    pub fn from_rows(cells: Grid) -> Result<Self, BoardError> {
        for (row, values) in cells.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if !(-1..=1).contains(&value) {
                    return Err(BoardError::InvalidCell {
                        row,
                        column,
                        value: i64::from(value),
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Builds a board from persisted rows of arbitrary integers.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidShape` unless there are 6 rows of 7
    /// cells, and `BoardError::InvalidCell` for the first cell outside
    /// {-1, 0, 1}.
    pub fn from_values(rows: &[Vec<i64>]) -> Result<Self, BoardError> {
        if rows.len() != ROWS || rows.iter().any(|r| r.len() != COLUMNS) {
            return Err(BoardError::InvalidShape);
        }
        let mut cells = [[0; COLUMNS]; ROWS];
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                cells[row][column] = i8::try_from(value)
                    .ok()
                    .filter(|v| (-1..=1).contains(v))
                    .ok_or(BoardError::InvalidCell { row, column, value })?;
            }
        }
        Ok(Self { cells })
    }

    /// The rows as persisted, top row first.
    #[must_use]
    pub fn to_values(&self) -> Vec<Vec<i64>> {
        self.cells
            .iter()
            .map(|row| row.iter().copied().map(i64::from).collect())
            .collect()
    }

    /// Returns the raw rows, top row first.
    #[must_use]
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Returns the value at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the board.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> i8 {
        self.cells[row][column]
    }

    /// True iff `column` is on the board and its top cell is empty.
    #[must_use]
    pub fn validate_move(&self, column: usize) -> bool {
        column < COLUMNS && self.cells[0][column] == 0
    }

    /// Columns that currently accept a token, in ascending order.
    #[must_use]
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.validate_move(c)).collect()
    }

    /// Drops `token` into `column` and returns the resulting board. `self`
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidToken` unless `token` is ±1,
    /// `BoardError::ColumnOutOfRange` or `BoardError::ColumnFull` if the
    /// column cannot take a token.
    pub fn make_move(&self, column: usize, token: i8) -> Result<Self, BoardError> {
        if token != 1 && token != -1 {
            return Err(BoardError::InvalidToken(token));
        }
        if column >= COLUMNS {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        let row = (0..ROWS)
            .rev()
            .find(|&r| self.cells[r][column] == 0)
            .ok_or(BoardError::ColumnFull(column))?;

        let mut next = *self;
        next.cells[row][column] = token;
        Ok(next)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// True iff every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_cells() == ROWS * COLUMNS
    }

    /// Returns the sign of any four-in-a-row on the board.
    #[must_use]
    pub fn winning_token(&self) -> Option<i8> {
        // Right, down, down-right, down-left.
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let token = self.cells[row][column];
                if token == 0 {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    if self.line_matches(row, column, dr, dc, token) {
                        return Some(token);
                    }
                }
            }
        }
        None
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn line_matches(&self, row: usize, column: usize, dr: isize, dc: isize, token: i8) -> bool {
        (1..CONNECT as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = column as isize + dc * step;
            (0..ROWS as isize).contains(&r)
                && (0..COLUMNS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == token
        })
    }
}

/// Decides whether the game on `board` is over.
///
/// A four-in-a-row of `1` belongs to `player_one`, of `-1` to `player_two`.
/// A full board without one is a draw. Depends on the grid alone.
#[must_use]
pub fn determine_game_over(board: &Board, player_one: &str, player_two: &str) -> Option<GameOutcome> {
    match board.winning_token() {
        Some(1) => Some(GameOutcome::Winner(player_one.to_owned())),
        Some(_) => Some(GameOutcome::Winner(player_two.to_owned())),
        None if board.is_full() => Some(GameOutcome::Draw),
        None => None,
    }
}
