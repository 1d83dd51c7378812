//! Status invariant: the state machine agrees with what is on the board.

use super::super::rules::{LINES, is_draw};
use super::super::{Cell, GameState, GameStatus, Mark};
use super::Invariant;

/// Invariant: the status matches the board, and at most one mark owns a line.
pub struct StatusConsistentInvariant;

fn holds_a_line(state: &GameState, mark: Mark) -> bool {
    let owned = Some(Cell::Marked(mark));
    LINES.iter().any(|line| line.iter().all(|&index| state.board().get(index) == owned))
}

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x_line = holds_a_line(state, Mark::X);
        let o_line = holds_a_line(state, Mark::O);
        if x_line && o_line {
            return false;
        }

        match state.status() {
            GameStatus::Won(mark) => board.winner() == Some(mark) && holds_a_line(state, mark),
            GameStatus::Draw => is_draw(board) && !x_line && !o_line,
            GameStatus::InProgress => {
                board.winner().is_none() && !board.is_full() && !x_line && !o_line
            }
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
