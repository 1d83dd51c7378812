//! Player trait and implementations.

mod human;
mod random;

pub use human::{ConsoleInput, HumanPlayer, LineSource};
pub use random::RandomPlayer;

use crate::games::tictactoe::{Board, Mark};
use derive_more::{Display, Error};
use tracing::instrument;

/// Something that can pick moves for one mark.
///
/// The game loop only ever calls [`Player::choose_move`] on a board that
/// still has an empty square, and expects an index from
/// [`Board::available_moves`] back.
pub trait Player {
    /// Picks the index of the next move.
    ///
    /// An error means the player can no longer produce moves (for example
    /// its input stream closed) and the game is abandoned.
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError>;

    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// A player failed to produce a move.
#[derive(Debug, Clone, Display, Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PlayerError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
