//! Front-end protocol errors.

use isola_core::{BoardError, MoveParseError};
use isola_engine::ConfigError;

/// Errors that can occur while parsing or executing a command line.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// `position` without a width and height.
    #[error("malformed position command: expected `position <width> <height> ...`")]
    MalformedPosition,

    /// A keyword that needs a value was the last token.
    #[error("missing value for {param}")]
    MissingValue {
        /// The keyword missing its value.
        param: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid {param} value: {value}")]
    InvalidNumber {
        /// The keyword or argument being parsed.
        param: String,
        /// The raw token.
        value: String,
    },

    /// A `true`/`false` option value was anything else.
    #[error("invalid boolean: {value}")]
    InvalidBool {
        /// The raw token.
        value: String,
    },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// A move token was not `row,col`.
    #[error(transparent)]
    Move(#[from] MoveParseError),

    /// The board rejected a size, a blocked cell, or a move.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A method or heuristic name was not recognised.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
