//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::PlayerKind;

/// Tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a person or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game on the console
    Play {
        /// Path to a TOML config file (ignored if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Who plays X
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Who plays O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Seed for the random players
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play many silent random-vs-random games and report the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
