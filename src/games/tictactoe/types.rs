//! Core domain types for tic-tac-toe.

use super::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's symbol on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Character used when rendering the grid.
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major: index `i` sits at row `i / 3`, column `i % 3`.
/// The only way to change a cell is [`Board::apply_move`], which also records
/// the winner the moment a line is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    winner: Option<Mark>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            winner: None,
        }
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Indices of every empty cell in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when at least one cell is empty.
    pub fn has_empty_squares(&self) -> bool {
        !self.is_full()
    }

    /// Number of empty cells.
    pub fn num_empty_squares(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Empty).count()
    }

    /// Places `mark` at `index`.
    ///
    /// Returns `false` without touching the board when `index` is out of
    /// range or the cell is already taken. On success the move is checked
    /// for a win and `winner` is set if it completed a line.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get(index) {
            Some(Cell::Empty) => {}
            Some(Cell::Marked(_)) => {
                debug!("Cell already occupied");
                return false;
            }
            None => {
                debug!("Index out of range");
                return false;
            }
        }

        self.cells[index] = Cell::Marked(mark);
        if self.check_win(index, mark) {
            debug!("Move completed a line");
            self.winner = Some(mark);
        }
        true
    }

    /// Whether `mark` owns a full line through `index`.
    ///
    /// Only the row, the column and the diagonals through `index` are
    /// inspected. A move can only complete a line it sits on.
    pub fn check_win(&self, index: usize, mark: Mark) -> bool {
        rules::completes_line(self, index, mark)
    }

    /// Renders the pre-game numbering guide.
    pub fn numbered_guide() -> String {
        let mut out = String::new();
        for row in 0..3 {
            let labels: Vec<String> = (row * 3..(row + 1) * 3).map(|i| i.to_string()).collect();
            out.push_str(&format!(" | {} | \n", labels.join(" | ")));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, " {} | ", symbols.join(" | "))?;
        }
        Ok(())
    }
}
