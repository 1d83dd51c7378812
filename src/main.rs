//! Tic-tac-toe on the console.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_engine::{ConsoleInput, GameConfig, PlayerKind, play_console, simulate};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            seed,
            quiet,
        } => run_play(&config, x, o, seed, quiet),
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Play one game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    seed: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?.with_overrides(x, o, seed, quiet);
    info!(?config, "Starting game");

    play_console(&config, ConsoleInput::new(), std::io::stdout()).context("Game did not finish")?;
    Ok(())
}

/// Run a silent random-vs-random series
#[instrument]
fn run_simulate(games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let report = simulate(games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
