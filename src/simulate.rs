//! Silent random-vs-random series.

use crate::games::tictactoe::{GameOutcome, Mark};
use crate::orchestrator::{GameLoop, PlayError};
use crate::players::RandomPlayer;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of a finished series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SimulationReport {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played: {}", self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "Ties: {}", self.draws)
    }
}

/// Plays `games` games between two random players without any output.
///
/// With a seed, game `n` seeds X with `seed + 2n` and O with `seed + 2n + 1`,
/// so a series is reproducible.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<SimulationReport, PlayError> {
    let mut report = SimulationReport::default();

    for game in 0..games {
        let (player_x, player_o) = match seed {
            Some(seed) => {
                let base = seed.wrapping_add(2 * u64::from(game));
                (
                    RandomPlayer::with_seed(Mark::X, base),
                    RandomPlayer::with_seed(Mark::O, base.wrapping_add(1)),
                )
            }
            None => (RandomPlayer::new(Mark::X), RandomPlayer::new(Mark::O)),
        };

        let outcome = GameLoop::new(Box::new(player_x), Box::new(player_o))?.play()?;
        debug!(game, ?outcome, "Simulated game finished");
        report.record(outcome);
    }

    info!(
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        draws = report.draws,
        "Simulation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_add_up() {
        let report = simulate(200, Some(1)).unwrap();
        assert_eq!(*report.games(), 200);
        assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 200);
    }

    #[test]
    fn test_seeded_series_is_reproducible() {
        assert_eq!(simulate(50, Some(42)).unwrap(), simulate(50, Some(42)).unwrap());
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(simulate(0, None).unwrap(), SimulationReport::default());
    }

    #[test]
    fn test_json_shape() {
        let mut report = SimulationReport::default();
        report.record(GameOutcome::Win(Mark::X));
        report.record(GameOutcome::Draw);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"games": 2, "x_wins": 1, "o_wins": 0, "draws": 1})
        );
    }
}
