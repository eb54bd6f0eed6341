//! Text command parsing.

use std::time::Duration;

use plateau_core::Position;
use plateau_game::{Easing, InputEvent, Key, MouseButton, ScreenPos};

use crate::error::CliError;

/// A session setting changed through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `size` -- cells along one edge.
    BoardSize(u8),
    /// `window` -- window width in pixels.
    WindowSize(u32),
    /// `duration` -- sprite glide time in milliseconds.
    MoveDuration(Duration),
    /// `easing` -- sprite glide curve by name.
    Easing(Easing),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `board` -- print the grid.
    Board,
    /// `turn` -- print the side to move.
    Turn,
    /// `moves <square>` -- list legal destinations.
    Moves(Position),
    /// `move <from> <to>` -- play a move for the side on turn.
    Move {
        /// Square of the piece to move.
        from: Position,
        /// Destination square.
        to: Position,
    },
    /// `press`, `release`, `motion` or `key` -- a raw window event.
    Input(InputEvent),
    /// `setoption name <name> value <value>` -- stage an option.
    SetOption(SessionOption),
    /// `restart` -- start over with staged options.
    Restart,
    /// `help` -- list commands.
    Help,
    /// `quit` or `exit` -- stop reading input.
    Quit,
    /// Unrecognized command (ignored silently when empty).
    Unknown(String),
}

/// Parse a single line of input.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "board" => Ok(Command::Board),
        "turn" => Ok(Command::Turn),
        "moves" => {
            let square = arg(&tokens, 1, "moves", "square")?;
            Ok(Command::Moves(parse_square(square)?))
        }
        "move" => {
            let from = parse_square(arg(&tokens, 1, "move", "origin square")?)?;
            let to = parse_square(arg(&tokens, 2, "move", "destination square")?)?;
            Ok(Command::Move { from, to })
        }
        "press" => {
            let (at, button) = parse_click(&tokens, "press")?;
            Ok(Command::Input(InputEvent::Press { button, at }))
        }
        "release" => {
            let (at, button) = parse_click(&tokens, "release")?;
            Ok(Command::Input(InputEvent::Release { button, at }))
        }
        "motion" => {
            let at = parse_screen_pos(&tokens, "motion")?;
            Ok(Command::Input(InputEvent::Motion { at }))
        }
        "key" => {
            let name = arg(&tokens, 1, "key", "key name")?;
            Ok(Command::Input(InputEvent::Key(parse_key(name))))
        }
        "setoption" => parse_setoption(&tokens),
        "restart" => Ok(Command::Restart),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn arg<'a>(
    tokens: &[&'a str],
    index: usize,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CliError> {
    tokens
        .get(index)
        .copied()
        .ok_or(CliError::MissingArgument { command, what })
}

fn parse_square(token: &str) -> Result<Position, CliError> {
    Position::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        square: token.to_string(),
    })
}

fn parse_coordinate(token: &str) -> Result<f32, CliError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CliError::InvalidCoordinate {
            value: token.to_string(),
        })
}

fn parse_screen_pos(tokens: &[&str], command: &'static str) -> Result<ScreenPos, CliError> {
    let x = parse_coordinate(arg(tokens, 1, command, "x coordinate")?)?;
    let y = parse_coordinate(arg(tokens, 2, command, "y coordinate")?)?;
    Ok(ScreenPos::new(x, y))
}

/// `<x> <y> [left|middle|right]`, left by default.
fn parse_click(tokens: &[&str], command: &'static str) -> Result<(ScreenPos, MouseButton), CliError> {
    let at = parse_screen_pos(tokens, command)?;
    let button = match tokens.get(3).copied() {
        None | Some("left") => MouseButton::Left,
        Some("middle") => MouseButton::Middle,
        Some("right") => MouseButton::Right,
        Some(other) => {
            return Err(CliError::InvalidButton {
                button: other.to_string(),
            });
        }
    };
    Ok((at, button))
}

fn parse_key(name: &str) -> Key {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Key::Char(c),
        _ => match name {
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            _ => Key::Other,
        },
    }
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, CliError> {
    let name_idx = tokens
        .iter()
        .position(|&t| t == "name")
        .ok_or(CliError::MissingArgument {
            command: "setoption",
            what: "name",
        })?;
    let value_idx = tokens
        .iter()
        .position(|&t| t == "value")
        .ok_or(CliError::MissingArgument {
            command: "setoption",
            what: "value",
        })?;

    let name = tokens
        .get(name_idx + 1..value_idx)
        .map(|words| words.join(" "))
        .unwrap_or_default();
    let value = tokens[value_idx + 1..].join(" ");

    let invalid = || CliError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "size" => SessionOption::BoardSize(value.parse().map_err(|_| invalid())?),
        "window" => SessionOption::WindowSize(value.parse().map_err(|_| invalid())?),
        "duration" => {
            let millis: u64 = value.parse().map_err(|_| invalid())?;
            SessionOption::MoveDuration(Duration::from_millis(millis))
        }
        "easing" => SessionOption::Easing(Easing::from_name(&value).ok_or_else(invalid)?),
        _ => return Err(CliError::UnknownOption { name: name.clone() }),
    };
    Ok(Command::SetOption(option))
}
