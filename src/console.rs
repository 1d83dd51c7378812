//! Console play: rendering a game in progress and wiring a configured game
//! to a text input and output.

use crate::config::GameConfig;
use crate::games::tictactoe::{Board, GameOutcome, Mark};
use crate::orchestrator::{GameEvent, GameLoop, GameObserver, PlayError};
use crate::players::LineSource;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::{info, instrument, warn};

/// Plays one configured game over `input` and `output`.
///
/// Both human seats read from the same input and prompt on the same output
/// the reporter writes to. In quiet mode only the result line is reported.
#[instrument(skip_all, fields(x = %config.x(), o = %config.o(), quiet = *config.quiet()))]
pub fn play_console<R: LineSource, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
) -> Result<GameOutcome, PlayError> {
    let input = Shared::new(input);
    let output = Shared::new(output);

    let mut game = GameLoop::new(
        config.player(Mark::X, input.clone(), output.clone()),
        config.player(Mark::O, input, output.clone()),
    )?;
    game.observe(if *config.quiet() {
        ConsoleReporter::quiet(output)
    } else {
        ConsoleReporter::new(output)
    });

    let outcome = game.play()?;
    info!(%outcome, "Console game finished");
    Ok(outcome)
}

/// One reader or writer handed to several seats of the same game.
struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    fn new(inner: T) -> Self {
        Self(Rc::new(RefCell::new(inner)))
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: LineSource> LineSource for Shared<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        LineSource::read_line(&mut *self.0.borrow_mut(), buf)
    }
}

impl<T: Write> Write for Shared<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Writes the board and announcements as a game is played.
///
/// Shows the numbering guide before the first move, the board after every
/// accepted move, and a closing line with the result.
pub struct ConsoleReporter<W> {
    output: W,
    quiet: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `output`.
    pub fn new(output: W) -> Self {
        Self {
            output,
            quiet: false,
        }
    }

    /// Creates a reporter that only writes the result line.
    pub fn quiet(output: W) -> Self {
        Self {
            output,
            quiet: true,
        }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        if self.quiet && !matches!(event, GameEvent::GameOver { .. }) {
            return Ok(());
        }
        match event {
            GameEvent::GameStarted => {
                write!(self.output, "{}", Board::numbered_guide())?;
                writeln!(self.output)?;
            }
            GameEvent::MoveRejected { index, error, .. } => {
                writeln!(self.output, "Square {} refused: {}", index, error)?;
            }
            GameEvent::MoveMade { mark, index, board } => {
                writeln!(self.output, "{} makes a move to square {}", mark, index)?;
                write!(self.output, "{}", board)?;
                writeln!(self.output)?;
            }
            GameEvent::GameOver { outcome } => {
                writeln!(self.output, "{}", outcome)?;
            }
            GameEvent::Aborted { mark, reason } => {
                writeln!(self.output, "Game aborted: {} stopped playing ({})", mark, reason)?;
            }
        }
        self.output.flush()
    }
}

impl<W: Write> GameObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(error) = self.render(event) {
            warn!(%error, "Failed to write game output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(events: &[GameEvent]) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        for event in events {
            reporter.on_event(event);
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_start_shows_numbering() {
        assert_eq!(
            rendered(&[GameEvent::GameStarted]),
            " | 0 | 1 | 2 | \n | 3 | 4 | 5 | \n | 6 | 7 | 8 | \n\n"
        );
    }

    #[test]
    fn test_move_shows_board() {
        let mut board = Board::new();
        board.apply_move(4, Mark::X);
        let out = rendered(&[GameEvent::MoveMade { mark: Mark::X, index: 4, board }]);
        assert_eq!(
            out,
            "X makes a move to square 4\n   |   |   | \n   | X |   | \n   |   |   | \n\n"
        );
    }

    #[test]
    fn test_quiet_reporter_only_shows_result() {
        let mut board = Board::new();
        board.apply_move(4, Mark::X);
        let mut reporter = ConsoleReporter::quiet(Vec::new());
        for event in [
            GameEvent::GameStarted,
            GameEvent::MoveMade { mark: Mark::X, index: 4, board },
            GameEvent::GameOver { outcome: GameOutcome::Draw },
        ] {
            reporter.on_event(&event);
        }
        assert_eq!(String::from_utf8(reporter.into_inner()).unwrap(), "It's a tie!\n");
    }

    #[test]
    fn test_shared_output_interleaves_writers() {
        let output = Shared::new(Vec::new());
        let mut first = output.clone();
        let mut second = output.clone();
        write!(first, "a").unwrap();
        write!(second, "b").unwrap();
        write!(first, "c").unwrap();
        assert_eq!(*output.0.borrow(), b"abc");
    }

    #[test]
    fn test_outcome_lines() {
        assert_eq!(
            rendered(&[GameEvent::GameOver { outcome: GameOutcome::Win(Mark::O) }]),
            "O wins!\n"
        );
        assert_eq!(
            rendered(&[GameEvent::GameOver { outcome: GameOutcome::Draw }]),
            "It's a tie!\n"
        );
    }
}
