//! The tic-tac-toe state machine, free of players and I/O.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::phases::GameStatus;
use super::types::{Board, CELL_COUNT, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Starts `InProgress` on an empty board with X to move. Each accepted
/// move goes through [`GameState::submit`], which either ends the game or
/// hands the turn to the other mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) active: Mark,
    pub(super) status: GameStatus,
    pub(super) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is, or the last mover once the game is over.
    pub fn active(&self) -> Mark {
        self.active
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `index` for the active mark.
    ///
    /// A rejected move leaves the state untouched and the same mark still
    /// to move.
    #[instrument(skip(self), fields(mark = %self.active))]
    pub fn submit(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.active;
        if !self.board.apply_move(index, mark) {
            let err = if index >= CELL_COUNT {
                MoveError::OutOfRange(index)
            } else {
                MoveError::Occupied(index)
            };
            debug!(%err, "Move rejected");
            return Err(err);
        }
        self.history.push(Move::new(mark, index));

        if self.board.winner() == Some(mark) {
            info!(%mark, "Game won");
            self.status = GameStatus::Won(mark);
        } else if self.board.is_full() {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.active = mark.opponent();
        }

        assert_invariants(self);
        Ok(self.status)
    }

    /// Replays a sequence of indices from a fresh game.
    ///
    /// Fails on the first move that would be rejected, including any move
    /// after the game has ended.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &index in moves {
            state.submit(index)?;
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
