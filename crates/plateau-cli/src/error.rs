//! Text protocol errors.

use plateau_game::ConfigError;

/// Errors that can occur while reading or executing a command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command is missing one of its arguments.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        what: &'static str,
    },

    /// A square could not be parsed as algebraic notation.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The offending token.
        square: String,
    },

    /// A pixel coordinate is not a number.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The offending token.
        value: String,
    },

    /// A mouse button name is not recognized.
    #[error("invalid mouse button: {button}")]
    InvalidButton {
        /// The offending token.
        button: String,
    },

    /// `setoption` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `setoption` value could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The offending value.
        value: String,
    },

    /// The square named by a command holds no piece.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty square, in algebraic notation.
        square: String,
    },

    /// The requested configuration was refused.
    #[error("configuration rejected: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
