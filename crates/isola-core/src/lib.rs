//! Core isolation types: grid cells, players, the game-state capability, and a concrete board.

mod board;
mod cell;
mod error;
mod player;
mod state;

pub use board::{Board, DEFAULT_SIZE, MAX_DIMENSION};
pub use cell::{Cell, KNIGHT_OFFSETS, Move};
pub use error::{BoardError, MoveParseError};
pub use player::Player;
pub use state::{CellSet, GameState};
