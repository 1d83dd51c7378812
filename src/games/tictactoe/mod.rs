mod action;
pub mod invariants;
mod phases;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use phases::{GameOutcome, GameStatus};
pub use state::GameState;
pub use types::{Board, CELL_COUNT, Cell, Mark};
