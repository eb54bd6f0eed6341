//! Line-driven game loop standing in for the window.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use plateau_core::Position;
use plateau_game::{GameSession, InputEvent, Key, SessionConfig};

use crate::command::{Command, SessionOption, parse_command};
use crate::console::{ConsoleAudio, ConsoleRenderer};
use crate::error::CliError;

const HELP: &str = "\
commands:
  board                         print the board
  turn                          print the side to move
  moves <square>                legal destinations of a piece
  move <from> <to>              play a move
  press|release <x> <y> [btn]   mouse button event in window pixels
  motion <x> <y>                pointer motion in window pixels
  key <name>                    key press (r restarts)
  setoption name <size|window|duration|easing> value <v>
  restart                       start over, applying pending options
  quit";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A game played over text commands.
///
/// Options set with `setoption` are staged and only take effect at the next
/// restart, so the game in progress is never resized under the players.
pub struct Shell<W> {
    session: GameSession<ConsoleRenderer, ConsoleAudio>,
    pending: SessionConfig,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell with the default configuration writing to `out`.
    pub fn new(out: W) -> Result<Self, CliError> {
        Self::with_config(SessionConfig::default(), out)
    }

    /// Create a shell with an explicit configuration.
    pub fn with_config(config: SessionConfig, out: W) -> Result<Self, CliError> {
        let session = GameSession::new(config.clone(), ConsoleRenderer::default(), ConsoleAudio)?;
        Ok(Self {
            session,
            pending: config,
            out,
        })
    }

    /// Return the running session.
    pub fn session(&self) -> &GameSession<ConsoleRenderer, ConsoleAudio> {
        &self.session
    }

    /// Return the configuration the next restart will use.
    pub fn pending_config(&self) -> &SessionConfig {
        &self.pending
    }

    /// Read commands until `quit` or end of input.
    pub fn run<I: BufRead>(&mut self, input: I) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            debug!(command = %line, "received");

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(self.out, "error {e}")?;
                    self.out.flush()?;
                    continue;
                }
            };

            let flow = match self.execute(command) {
                Ok(flow) => flow,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(self.out, "error {e}")?;
                    Flow::Continue
                }
            };
            self.out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }

        info!("plateau shutting down");
        Ok(())
    }

    /// Run one parsed command.
    fn execute(&mut self, command: Command) -> Result<Flow, CliError> {
        match command {
            Command::Board => self.handle_board()?,
            Command::Turn => writeln!(self.out, "turn {}", self.session.turn())?,
            Command::Moves(square) => self.handle_moves(square)?,
            Command::Move { from, to } => self.handle_move(from, to)?,
            Command::Input(InputEvent::Key(Key::Char('r' | 'R'))) | Command::Restart => {
                self.handle_restart()?
            }
            Command::Input(event) => self.handle_input(event)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(ref s) if s.is_empty() => {}
            Command::Unknown(s) => {
                debug!(command = %s, "ignoring unknown command");
                writeln!(self.out, "unknown command {s}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_board(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "{}", self.session.board().pretty())?;
        Ok(())
    }

    fn handle_moves(&mut self, square: Position) -> Result<(), CliError> {
        let id = self
            .session
            .board()
            .piece_at(square)
            .ok_or_else(|| CliError::EmptySquare {
                square: square.to_string(),
            })?;

        write!(self.out, "moves")?;
        for dest in self.session.legal_moves(id).sorted() {
            write!(self.out, " {dest}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn handle_move(&mut self, from: Position, to: Position) -> Result<(), CliError> {
        let id = self
            .session
            .board()
            .piece_at(from)
            .ok_or_else(|| CliError::EmptySquare {
                square: from.to_string(),
            })?;

        let outcome = self.session.try_move(id, to);
        writeln!(self.out, "move {outcome}")?;
        Ok(())
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<(), CliError> {
        if let Some(outcome) = self.session.handle_event(event) {
            writeln!(self.out, "move {outcome}")?;
        }
        Ok(())
    }

    fn handle_restart(&mut self) -> Result<(), CliError> {
        if &self.pending != self.session.config() {
            if let Err(e) = self.session.reconfigure(self.pending.clone()) {
                self.pending = self.session.config().clone();
                return Err(e.into());
            }
        } else {
            self.session.restart();
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::BoardSize(size) => self.pending.board_size = size,
            SessionOption::WindowSize(px) => self.pending.window_size = px,
            SessionOption::MoveDuration(duration) => self.pending.move_duration = duration,
            SessionOption::Easing(easing) => self.pending.easing = easing,
        }
        info!(?option, "option staged for next restart");
    }
}
