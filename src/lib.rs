//! Tic-tac-toe engine with pluggable player strategies.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation and win detection
//! - **GameState**: the turn state machine, driveable without any I/O
//! - **Players**: a console-prompted human and a random automaton
//! - **GameLoop**: seats two players on one game and reports events
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameLoop, Mark, RandomPlayer};
//!
//! # fn example() -> Result<(), tictactoe_engine::PlayError> {
//! let mut game = GameLoop::new(
//!     Box::new(RandomPlayer::with_seed(Mark::X, 1)),
//!     Box::new(RandomPlayer::with_seed(Mark::O, 2)),
//! )?;
//! let outcome = game.play()?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod orchestrator;
mod players;
mod simulate;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Cell, GameOutcome, GameState, GameStatus, Mark, Move, MoveError,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};
pub use games::tictactoe::rules::{LINES, check_winner, completes_line, is_draw, is_full};

// Crate-level exports - Players
pub use players::{ConsoleInput, HumanPlayer, LineSource, Player, PlayerError, RandomPlayer};

// Crate-level exports - Orchestration
pub use console::{ConsoleReporter, play_console};
pub use orchestrator::{GameEvent, GameLoop, GameObserver, PlayError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerKind};

// Crate-level exports - Simulation
pub use simulate::{SimulationReport, simulate};
