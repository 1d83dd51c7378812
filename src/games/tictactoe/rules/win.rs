//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Every line that wins when held by a single mark.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

fn owns_line(board: &Board, line: &[usize; 3], mark: Mark) -> bool {
    line.iter().all(|&index| board.get(index) == Some(Cell::Marked(mark)))
}

/// Whether `mark` holds a complete line passing through `index`.
///
/// Checks the row and column of `index`. Diagonals are only checked from
/// even indices, the only cells any diagonal passes through.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, index: usize, mark: Mark) -> bool {
    if index >= 9 {
        return false;
    }

    let row = index / 3 * 3;
    if owns_line(board, &[row, row + 1, row + 2], mark) {
        return true;
    }

    let col = index % 3;
    if owns_line(board, &[col, col + 3, col + 6], mark) {
        return true;
    }

    if index % 2 == 0 {
        return DIAGONALS.iter().any(|diagonal| owns_line(board, diagonal, mark));
    }

    false
}

/// Scans the whole board for a completed line.
///
/// Returns `Some(mark)` if that mark holds three in a row, `None`
/// otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for line in &LINES {
        if let Some(Cell::Marked(mark)) = board.get(line[0])
            && owns_line(board, line, mark)
        {
            return Some(mark);
        }
    }
    None
}
