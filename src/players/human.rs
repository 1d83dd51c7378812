//! Human player that reads moves from a line-oriented text source.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Cell, Mark, MoveError};
use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::{debug, info, instrument, warn};

/// Source of typed lines for a [`HumanPlayer`].
///
/// Every [`BufRead`] is one. [`ConsoleInput`] reads stdin without holding
/// its lock between reads, so several players can share the console.
pub trait LineSource {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<T: BufRead> LineSource for T {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read.
#[derive(Debug)]
pub struct ConsoleInput(Stdin);

impl ConsoleInput {
    /// Wraps the process-wide stdin handle.
    pub fn new() -> Self {
        Self(io::stdin())
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for ConsoleInput {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Human player typing square numbers.
///
/// Input and output are injected so the prompt loop can be driven from
/// memory in tests; [`HumanPlayer::stdio`] wires it to the console.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl HumanPlayer<ConsoleInput, Stdout> {
    /// Creates a human player reading stdin and prompting on stdout.
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, ConsoleInput::new(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player over the given input and output.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        info!(%mark, "Creating human player");
        Self {
            name: format!("Human ({})", mark),
            mark,
            input,
            output,
        }
    }

    /// Replaces the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Consumes the player, returning its input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Why a typed line was not accepted.
#[derive(Debug, derive_more::Display)]
enum RejectedInput {
    #[display("'{}' is not a square number", _0)]
    NotANumber(String),
    #[display("{}", _0)]
    Illegal(MoveError),
}

fn parse_move(text: &str, board: &Board) -> Result<usize, RejectedInput> {
    let index: usize = text
        .parse()
        .map_err(|_| RejectedInput::NotANumber(text.to_string()))?;
    match board.get(index) {
        Some(Cell::Empty) => Ok(index),
        Some(Cell::Marked(_)) => Err(RejectedInput::Illegal(MoveError::Occupied(index))),
        None => Err(RejectedInput::Illegal(MoveError::OutOfRange(index))),
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        if !board.has_empty_squares() {
            return Err(PlayerError::new("No valid moves available"));
        }

        loop {
            write!(self.output, "{}'s turn. Choose a move (0-8): ", self.mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed while waiting for a move");
                return Err(PlayerError::new("Input closed"));
            }

            match parse_move(line.trim(), board) {
                Ok(index) => {
                    debug!(index, "Human chose square");
                    return Ok(index);
                }
                Err(reason) => {
                    debug!(%reason, "Rejected input");
                    writeln!(self.output, "Invalid square: {}. Try again.", reason)?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
