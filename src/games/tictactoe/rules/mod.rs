//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The board calls into
//! these after every accepted move, and tests use them to cross-check
//! what the board reports.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, completes_line};
