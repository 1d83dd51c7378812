//! States and outcomes of the game state machine.

use super::Mark;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A mark completed a line.
    Win(Mark),
    /// The board filled up without a completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            GameOutcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{} wins!", mark),
            GameOutcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

/// Current state of a game.
///
/// `Won` and `Draw` are terminal and accept no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The outcome of a terminal state, `None` while in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(GameOutcome::Win(*mark)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }
}
