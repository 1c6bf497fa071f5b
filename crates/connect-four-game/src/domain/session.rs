//! The session aggregate and its persisted record.

use connect_four_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::board::Board;

/// Display identity of the computer opponent.
pub const COMPUTER_NAME: &str = "the Computer";

/// True iff `a` and `b` name the same user. Email addresses compare
/// ASCII-case-insensitively; the stored spelling is kept as typed.
#[must_use]
pub fn same_identity(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Where the engagement is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No engagement; anyone may start one.
    #[default]
    Waiting,
    /// A two-player invitation is pending.
    Inviting,
    /// A game is in progress.
    Playing,
}

/// Who the second side is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// One human against the computer.
    VsComputer,
    /// Two humans.
    #[default]
    VsHuman,
}

/// State of the single engagement held for a context.
///
/// `participants` is empty while waiting, holds the lone player of a game
/// against the computer, and holds exactly two identities otherwise. Slot 0
/// is the challenger and moves first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Lifecycle state.
    pub state: SessionState,
    /// Participant identities, in slot order.
    pub participants: Vec<String>,
    /// Game mode. Meaningless while waiting.
    pub mode: GameMode,
    /// The board. Empty while waiting.
    pub grid: Board,
    /// Slot whose move it is: 0 or 1.
    pub turn: u8,
}

impl Session {
    /// A fresh single-player game for `player`, who moves first.
    #[must_use]
    pub fn vs_computer(player: &str) -> Self {
        Self {
            state: SessionState::Playing,
            participants: vec![player.to_owned()],
            mode: GameMode::VsComputer,
            grid: Board::new(),
            turn: 0,
        }
    }

    /// A pending invitation from `challenger` to `opponent`.
    #[must_use]
    pub fn invitation(challenger: &str, opponent: &str) -> Self {
        Self {
            state: SessionState::Inviting,
            participants: vec![challenger.to_owned(), opponent.to_owned()],
            mode: GameMode::VsHuman,
            grid: Board::new(),
            turn: 0,
        }
    }

    /// Slot of `identity` within `participants`.
    #[must_use]
    pub fn slot_of(&self, identity: &str) -> Option<usize> {
        self.participants.iter().position(|p| same_identity(p, identity))
    }

    /// The other side from `identity`'s point of view: the other
    /// participant, or the computer in single-player mode.
    #[must_use]
    pub fn opponent_of(&self, identity: &str) -> Option<&str> {
        match self.mode {
            GameMode::VsComputer => Some(COMPUTER_NAME),
            GameMode::VsHuman => self
                .participants
                .iter()
                .find(|p| !same_identity(p, identity))
                .map(String::as_str),
        }
    }

    /// Identities owning tokens `1` and `-1`, in that order.
    #[must_use]
    pub fn players(&self) -> (&str, &str) {
        let first = self.participants.first().map_or("", String::as_str);
        let second = match self.mode {
            GameMode::VsComputer => COMPUTER_NAME,
            GameMode::VsHuman => self.participants.get(1).map_or("", String::as_str),
        };
        (first, second)
    }

    /// Converts to the persisted record, omitting game fields while waiting.
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        let game_fields = self.state != SessionState::Waiting;
        SessionRecord {
            state: self.state,
            participants: self.participants.clone(),
            mode: game_fields.then_some(self.mode),
            grid: game_fields.then(|| self.grid.to_values()),
            turn: game_fields.then_some(i64::from(self.turn)),
        }
    }

    /// Rebuilds a session from its persisted record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the record breaks a session
    /// invariant.
    pub fn from_record(record: SessionRecord) -> Result<Self, DomainError> {
        let SessionRecord {
            state,
            participants,
            mode,
            grid,
            turn,
        } = record;

        if state == SessionState::Waiting {
            if !participants.is_empty() {
                return Err(DomainError::Validation(
                    "waiting session must have no participants".to_owned(),
                ));
            }
            return Ok(Self::default());
        }

        let mode = mode.ok_or_else(|| {
            DomainError::Validation("active session is missing its game mode".to_owned())
        })?;

        let expected = match mode {
            GameMode::VsComputer => 1,
            GameMode::VsHuman => 2,
        };
        if participants.len() != expected {
            return Err(DomainError::Validation(format!(
                "{mode:?} session must have {expected} participant(s), found {}",
                participants.len()
            )));
        }
        if state == SessionState::Inviting && mode == GameMode::VsComputer {
            return Err(DomainError::Validation(
                "a game against the computer cannot be inviting".to_owned(),
            ));
        }

        let (grid, turn) = match (state, grid, turn) {
            (SessionState::Playing, Some(grid), Some(turn)) => (Some(grid), turn),
            (SessionState::Playing, _, _) => {
                return Err(DomainError::Validation(
                    "playing session is missing its grid or turn".to_owned(),
                ));
            }
            (_, grid, turn) => (grid, turn.unwrap_or(0)),
        };
        let grid = grid
            .map(|rows| Board::from_values(&rows))
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?
            .unwrap_or_default();
        let turn = u8::try_from(turn)
            .ok()
            .filter(|&t| t <= 1)
            .ok_or_else(|| DomainError::Validation(format!("turn must be 0 or 1, found {turn}")))?;

        Ok(Self {
            state,
            participants,
            mode,
            grid,
            turn,
        })
    }

    /// Serializes to the JSON snapshot written to the store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if serialization fails.
    pub fn to_snapshot(&self) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(self.to_record())
            .map_err(|e| DomainError::Infrastructure(format!("snapshot serialization failed: {e}")))
    }

    /// Rebuilds a session from a stored snapshot. A missing snapshot is a
    /// fresh waiting session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the JSON does not match the
    /// record layout and `DomainError::Validation` if it breaks an invariant.
    pub fn from_snapshot(snapshot: Option<serde_json::Value>) -> Result<Self, DomainError> {
        let Some(value) = snapshot else {
            return Ok(Self::default());
        };
        let record: SessionRecord = serde_json::from_value(value).map_err(|e| {
            DomainError::Infrastructure(format!("snapshot deserialization failed: {e}"))
        })?;
        Self::from_record(record)
    }
}

/// Persisted form of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Lifecycle state.
    pub state: SessionState,
    /// Participant identities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    /// Game mode; absent while waiting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    /// Board rows, top first; absent while waiting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<Vec<i64>>>,
    /// Turn slot; absent while waiting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<i64>,
}
