//! History consistency invariant: the move list rebuilds the board.

use super::super::{Board, GameState, Mark};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces it.
///
/// Moves must alternate starting with X, each must land on an empty
/// square, and the mark to move must follow from the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut rebuilt = Board::new();
        let mut expected = Mark::X;

        for mov in state.history() {
            if mov.mark != expected || !rebuilt.apply_move(mov.index, mov.mark) {
                return false;
            }
            expected = expected.opponent();
        }

        let active_ok = match state.history().last() {
            Some(last) if state.status().is_terminal() => state.active() == last.mark,
            _ => state.active() == expected,
        };

        active_ok && rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
