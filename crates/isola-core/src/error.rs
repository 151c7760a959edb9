//! Error types for move parsing and board construction.

use crate::cell::Cell;
use crate::player::Player;

/// Errors that occur when parsing a move string such as `"3,4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The string has no `,` separating row and column.
    #[error("expected \"row,col\", found \"{input}\"")]
    MissingComma {
        /// The full input string.
        input: String,
    },
    /// A coordinate is not a valid integer.
    #[error("invalid coordinate \"{part}\" in \"{input}\"")]
    InvalidCoordinate {
        /// The full input string.
        input: String,
        /// The component that failed to parse.
        part: String,
    },
}

/// Errors from constructing or mutating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Width or height outside `1..=MAX_DIMENSION`.
    #[error("invalid board size {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A cell lies outside the grid.
    #[error("cell {cell} is off the board")]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// Two players were placed on the same cell.
    #[error("both players placed on {cell}")]
    SharedLocation {
        /// The shared cell.
        cell: Cell,
    },
    /// The move is not in the active player's legal moves.
    #[error("illegal move {mv} for player {player}")]
    IllegalMove {
        /// The rejected move.
        mv: Cell,
        /// The player who tried to make it.
        player: Player,
    },
}
