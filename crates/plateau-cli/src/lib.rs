//! Text front end for plateau: a line protocol driving a game session.

pub mod command;
pub mod console;
pub mod error;
pub mod shell;

pub use command::{Command, SessionOption, parse_command};
pub use console::{ConsoleAudio, ConsoleRenderer};
pub use error::CliError;
pub use shell::Shell;
