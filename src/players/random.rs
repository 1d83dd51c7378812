//! Computer player that picks uniformly among the empty squares.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Random-move player.
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the OS.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_entropy())
    }

    /// Creates a random player whose choices are reproducible.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mark: Mark, rng: StdRng) -> Self {
        info!(%mark, "Creating random player");
        Self {
            name: format!("Computer ({})", mark),
            mark,
            rng,
        }
    }

    /// Replaces the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Player for RandomPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        let index = board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| PlayerError::new("No valid moves available"))?;
        debug!(index, "Random player chose square");
        Ok(index)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
