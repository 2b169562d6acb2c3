//! Line-oriented presenter for the round engine.
//!
//! The console holds no game rules. It turns typed lines into engine calls
//! and redraws from engine queries after each one.

use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tictactoe_rounds::{EngineSnapshot, GameEngine, MoveOutcome, MoveRejection, OpeningPolicy};
use tracing::{debug, instrument};

const HELP: &str = "Commands:
  <row> <column>   place your marker (0-2 each, also `row,column`)
  new              start the next round
  restart          reset scores and start from round 1
  board            redraw the board
  help             show this message
  quit             leave the game";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a marker.
    Move {
        /// Row, 0-2.
        row: usize,
        /// Column, 0-2.
        column: usize,
    },
    /// Start the next round.
    NewRound,
    /// Reset scores and start from round 1.
    Restart,
    /// Redraw.
    Board,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// Input that is neither a command nor a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}; type `help` for commands", input)]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let command = match trimmed.to_lowercase().as_str() {
            "new" | "n" => Some(ConsoleCommand::NewRound),
            "restart" | "r" => Some(ConsoleCommand::Restart),
            "board" | "b" => Some(ConsoleCommand::Board),
            "help" | "h" | "?" => Some(ConsoleCommand::Help),
            "quit" | "q" | "exit" => Some(ConsoleCommand::Quit),
            _ => parse_coordinates(trimmed),
        };
        command.ok_or_else(|| ParseCommandError {
            input: trimmed.to_string(),
        })
    }
}

fn parse_coordinates(s: &str) -> Option<ConsoleCommand> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(ConsoleCommand::Move { row, column })
}

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print the snapshot as JSON instead of the grid.
    pub json: bool,
    /// List free cells under the board.
    pub show_hints: bool,
}

/// Terminal presenter wrapping one engine.
#[derive(Debug)]
pub struct Console<W: Write> {
    engine: GameEngine,
    out: W,
    options: ConsoleOptions,
}

impl<W: Write> Console<W> {
    /// Creates a console writing to `out`.
    pub fn new(engine: GameEngine, out: W, options: ConsoleOptions) -> Self {
        Self {
            engine,
            out,
            options,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        if !self.options.json {
            writeln!(self.out, "{}", HELP)?;
        }
        self.render()?;
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.prompt()?;
                continue;
            }
            let flow = match line.parse::<ConsoleCommand>() {
                Ok(command) => self.handle(command)?,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    /// Applies one command to the engine and prints the result.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: ConsoleCommand) -> io::Result<Flow> {
        match command {
            ConsoleCommand::Move { row, column } => match self.engine.submit_move(row, column) {
                Ok(outcome) => {
                    self.report(&outcome)?;
                }
                Err(rejection) => {
                    self.reject(rejection)?;
                }
            },
            ConsoleCommand::NewRound => {
                if self.engine.new_round() {
                    self.render()?;
                } else {
                    writeln!(
                        self.out,
                        "No rounds left; type `restart` to play again."
                    )?;
                }
            }
            ConsoleCommand::Restart => {
                self.engine.restart_game();
                self.render()?;
            }
            ConsoleCommand::Board => self.render()?,
            ConsoleCommand::Help => writeln!(self.out, "{}", HELP)?,
            ConsoleCommand::Quit => {
                writeln!(self.out, "{}", self.engine.snapshot().score_string())?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, outcome: &MoveOutcome) -> io::Result<()> {
        debug!(?outcome, "Reporting move");
        if !self.options.json {
            writeln!(self.out, "{} played {}", outcome.mover(), outcome.position())?;
        }
        self.render()?;
        if outcome.round_ended() && !outcome.game_ended() && !self.options.json {
            writeln!(self.out, "Type `new` for the next round.")?;
        }
        Ok(())
    }

    fn reject(&mut self, rejection: MoveRejection) -> io::Result<()> {
        writeln!(self.out, "Rejected: {}", rejection)
    }

    fn render(&mut self) -> io::Result<()> {
        let snapshot = self.engine.snapshot();
        if self.options.json {
            let json = serde_json::to_string(&snapshot).map_err(io::Error::other)?;
            return writeln!(self.out, "{}", json);
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", snapshot.board().display())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", snapshot.status_string())?;
        writeln!(self.out, "{}", snapshot.score_string())?;
        if self.options.show_hints && self.engine.is_ongoing() {
            let free: Vec<String> = self
                .engine
                .valid_moves()
                .iter()
                .map(|p| format!("{},{}", p.row(), p.column()))
                .collect();
            writeln!(self.out, "Free: {}", free.join(" "))?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.options.json {
            return Ok(());
        }
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

/// Why a scripted replay stopped.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// A token was not a move or command.
    #[display("Step {}: {}", step, error)]
    Parse {
        /// 1-based token index.
        step: usize,
        /// Parse failure.
        error: ParseCommandError,
    },
    /// The engine rejected a move.
    #[display("Step {}: move rejected: {}", step, rejection)]
    Rejected {
        /// 1-based token index.
        step: usize,
        /// Engine's reason.
        rejection: MoveRejection,
    },
}

impl std::error::Error for ReplayError {}

/// Applies a whitespace-separated script of `row,column` moves and commands.
///
/// Stops at the first bad token or rejected move. `quit` ends the script
/// early; `board` and `help` are ignored.
///
/// # Errors
///
/// Returns the failing step as a [`ReplayError`].
#[instrument]
pub fn replay(script: &str, opening: OpeningPolicy) -> Result<EngineSnapshot, ReplayError> {
    let mut engine = GameEngine::with_opening(opening);

    for (i, token) in script.split_whitespace().enumerate() {
        let step = i + 1;
        let command = token
            .parse::<ConsoleCommand>()
            .map_err(|error| ReplayError::Parse { step, error })?;
        match command {
            ConsoleCommand::Move { row, column } => {
                engine
                    .submit_move(row, column)
                    .map_err(|rejection| ReplayError::Rejected { step, rejection })?;
            }
            ConsoleCommand::NewRound => {
                engine.new_round();
            }
            ConsoleCommand::Restart => engine.restart_game(),
            ConsoleCommand::Board | ConsoleCommand::Help => {}
            ConsoleCommand::Quit => break,
        }
    }

    Ok(engine.snapshot())
}
