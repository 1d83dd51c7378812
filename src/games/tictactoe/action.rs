//! First-class move types for tic-tac-toe.
//!
//! A [`Move`] is the record of one accepted placement. A rejected
//! placement never becomes a `Move`; it is described by [`MoveError`].

use super::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Row-major board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was not applied.
///
/// None of these are fatal: the caller re-asks the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Square {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
