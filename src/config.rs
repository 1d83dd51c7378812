//! Game configuration loaded from TOML and overridden from the command line.

use crate::games::tictactoe::Mark;
use crate::players::{HumanPlayer, LineSource, Player, RandomPlayer};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which strategy sits in a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Prompted on the console.
    Human,
    /// Picks a random empty square.
    Random,
}

impl PlayerKind {
    /// Builds a player of this kind for `mark`.
    ///
    /// A human reads `input` and prompts on `output`; a random player
    /// ignores both.
    #[instrument(skip(input, output))]
    pub fn build<'a, R, W>(
        self,
        mark: Mark,
        seed: Option<u64>,
        input: R,
        output: W,
    ) -> Box<dyn Player + 'a>
    where
        R: LineSource + 'a,
        W: Write + 'a,
    {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new(mark, input, output)),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(mark, seed)),
                None => Box::new(RandomPlayer::new(mark)),
            },
        }
    }
}

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player for X.
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Player for O.
    #[serde(default = "default_o")]
    o: PlayerKind,

    /// Seed for the random players; unset means a fresh game every run.
    #[serde(default)]
    seed: Option<u64>,

    /// Only print the result line.
    #[serde(default)]
    quiet: bool,
}

fn default_x() -> PlayerKind {
    PlayerKind::Human
}

fn default_o() -> PlayerKind {
    PlayerKind::Random
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
            seed: None,
            quiet: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x, o = %config.o, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        x: Option<PlayerKind>,
        o: Option<PlayerKind>,
        seed: Option<u64>,
        quiet: bool,
    ) -> Self {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(o) = o {
            self.o = o;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.quiet |= quiet;
        self
    }

    /// Seed for the player of `mark`. The two seats get distinct streams.
    pub fn seed_for(&self, mark: Mark) -> Option<u64> {
        self.seed.map(|seed| match mark {
            Mark::X => seed,
            Mark::O => seed.wrapping_add(1),
        })
    }

    /// Kind of player configured for `mark`.
    pub fn kind_for(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Builds the configured player for `mark` over the given console.
    pub fn player<'a, R, W>(&self, mark: Mark, input: R, output: W) -> Box<dyn Player + 'a>
    where
        R: LineSource + 'a,
        W: Write + 'a,
    {
        self.kind_for(mark).build(mark, self.seed_for(mark), input, output)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(*config.x(), PlayerKind::Human);
        assert_eq!(*config.o(), PlayerKind::Random);
        assert_eq!(*config.seed(), None);
        assert!(!*config.quiet());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("o = \"human\"\nseed = 9\n").unwrap();
        assert_eq!(*config.x(), PlayerKind::Human);
        assert_eq!(*config.o(), PlayerKind::Human);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(
            Some(PlayerKind::Random),
            None,
            Some(3),
            true,
        );
        assert_eq!(*config.x(), PlayerKind::Random);
        assert_eq!(*config.o(), PlayerKind::Random);
        assert_eq!(config.seed_for(Mark::X), Some(3));
        assert_eq!(config.seed_for(Mark::O), Some(4));
        assert!(*config.quiet());
    }

    #[test]
    fn test_player_kind_names() {
        assert_eq!(PlayerKind::Random.to_string(), "random");
        assert_eq!(PlayerKind::from_str("human").unwrap(), PlayerKind::Human);
    }

    #[test]
    fn test_every_kind_builds_for_both_marks() {
        for kind in PlayerKind::iter() {
            for mark in Mark::iter() {
                let player = kind.build(mark, Some(1), std::io::empty(), std::io::sink());
                assert_eq!(player.mark(), mark);
                let expected = match kind {
                    PlayerKind::Human => format!("Human ({})", mark),
                    PlayerKind::Random => format!("Computer ({})", mark),
                };
                assert_eq!(player.name(), expected);
            }
        }
    }

    #[test]
    fn test_kind_for_follows_seats() {
        let config = GameConfig::default();
        assert_eq!(config.kind_for(Mark::X), PlayerKind::Human);
        assert_eq!(config.kind_for(Mark::O), PlayerKind::Random);
    }
}
