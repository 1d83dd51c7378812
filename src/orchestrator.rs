//! Game orchestration between players.

use crate::games::tictactoe::{Board, GameOutcome, GameState, GameStatus, Mark, MoveError};
use crate::players::{Player, PlayerError};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Notifications emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The first turn is about to be played.
    GameStarted,
    /// The active player picked a square the board refused.
    MoveRejected {
        /// Mark of the player that picked it.
        mark: Mark,
        /// The refused index.
        index: usize,
        /// Why it was refused.
        error: MoveError,
    },
    /// A move was accepted.
    MoveMade {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        index: usize,
        /// Board after the move.
        board: Board,
    },
    /// The game reached a terminal state.
    GameOver {
        /// How it ended.
        outcome: GameOutcome,
    },
    /// A player stopped producing moves.
    Aborted {
        /// Mark of the player that failed.
        mark: Mark,
        /// What went wrong.
        reason: String,
    },
}

/// Receives [`GameEvent`]s from a [`GameLoop`].
pub trait GameObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Why a game could not be played to the end.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// A player was seated on the wrong side.
    #[display("{} plays {} but was seated as {}", name, actual, expected)]
    WrongMark {
        /// Player's display name.
        name: String,
        /// Mark of the seat.
        expected: Mark,
        /// Mark the player actually places.
        actual: Mark,
    },
    /// A player failed, so the game was abandoned.
    #[display("Game aborted: {}", _0)]
    #[from]
    Aborted(#[error(source)] PlayerError),
}

/// Plays one game between two players.
///
/// X always moves first. A rejected move is retried by the same player;
/// it never changes whose turn it is.
pub struct GameLoop<'a> {
    state: GameState,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
    observers: Vec<Box<dyn GameObserver + 'a>>,
    started: bool,
}

impl<'a> GameLoop<'a> {
    /// Seats two players. Each must place the mark of its seat.
    #[instrument(skip_all, fields(x = %player_x.name(), o = %player_o.name()))]
    pub fn new(
        player_x: Box<dyn Player + 'a>,
        player_o: Box<dyn Player + 'a>,
    ) -> Result<Self, PlayError> {
        for (player, expected) in [(&player_x, Mark::X), (&player_o, Mark::O)] {
            if player.mark() != expected {
                return Err(PlayError::WrongMark {
                    name: player.name().to_string(),
                    expected,
                    actual: player.mark(),
                });
            }
        }

        info!("Players seated");
        Ok(Self {
            state: GameState::new(),
            player_x,
            player_o,
            observers: Vec::new(),
            started: false,
        })
    }

    /// Registers an observer for every subsequent event.
    pub fn observe(&mut self, observer: impl GameObserver + 'a) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    /// Plays a single turn for the active player.
    ///
    /// Keeps asking the same player until a move is accepted. Returns the
    /// status afterwards; on a finished game this is a no-op.
    #[instrument(skip(self), fields(mark = %self.state.active()))]
    pub fn play_turn(&mut self) -> Result<GameStatus, PlayError> {
        if self.state.status().is_terminal() {
            return Ok(self.state.status());
        }
        if !self.started {
            self.started = true;
            self.emit(GameEvent::GameStarted);
        }

        let mark = self.state.active();
        loop {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), "Waiting for move");

            let index = match player.choose_move(self.state.board()) {
                Ok(index) => index,
                Err(err) => {
                    warn!(error = %err, "Player failed, aborting game");
                    self.emit(GameEvent::Aborted {
                        mark,
                        reason: err.message.clone(),
                    });
                    return Err(err.into());
                }
            };

            match self.state.submit(index) {
                Ok(status) => {
                    let board = self.state.board().clone();
                    self.emit(GameEvent::MoveMade { mark, index, board });
                    if let Some(outcome) = status.outcome() {
                        info!(?outcome, "Game over");
                        self.emit(GameEvent::GameOver { outcome });
                    }
                    return Ok(status);
                }
                Err(error) => {
                    warn!(index, %error, "Move rejected, asking again");
                    self.emit(GameEvent::MoveRejected { mark, index, error });
                }
            }
        }
    }

    /// Plays turns until the game ends.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<GameOutcome, PlayError> {
        info!("Starting game");
        loop {
            if let Some(outcome) = self.play_turn()?.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Consumes the loop, returning the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
