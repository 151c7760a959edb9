//! Grid coordinates and the knight-jump neighbourhood.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;

/// Knight offsets in the fixed order every traversal iterates them.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A `(row, col)` coordinate on the grid.
///
/// Coordinates are signed so that knight offsets can step off the board;
/// bounds are enforced by set membership or by [`Board`](crate::Board), not here.
///
/// Ordering is lexicographic on `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: i32,
    col: i32,
}

/// A move is the destination cell of the player to move.
pub type Move = Cell;

impl Cell {
    /// The "no legal move" sentinel, `(-1, -1)`.
    pub const NULL: Cell = Cell { row: -1, col: -1 };

    /// Create a cell from a row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Row index.
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Column index.
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Whether this is [`Cell::NULL`].
    #[inline]
    pub const fn is_null(self) -> bool {
        self.row == -1 && self.col == -1
    }

    /// Translate by a `(row, col)` delta.
    #[inline]
    pub const fn offset(self, (dr, dc): (i32, i32)) -> Cell {
        Cell::new(self.row + dr, self.col + dc)
    }

    /// The eight knight-jump neighbours, unfiltered, in [`KNIGHT_OFFSETS`] order.
    pub fn knight_neighbors(self) -> [Cell; 8] {
        KNIGHT_OFFSETS.map(|delta| self.offset(delta))
    }

    /// Whether `other` is exactly one knight jump away.
    pub fn is_knight_jump(self, other: Cell) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }

    /// Euclidean distance between two cells.
    pub fn distance(self, other: Cell) -> f64 {
        f64::from(self.row - other.row).hypot(f64::from(self.col - other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "none")
        } else {
            write!(f, "{},{}", self.row, self.col)
        }
    }
}

impl FromStr for Cell {
    type Err = MoveParseError;

    /// Parse `"r,c"` (or `"none"` for [`Cell::NULL`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "none" {
            return Ok(Cell::NULL);
        }
        let (row, col) = s.split_once(',').ok_or_else(|| MoveParseError::MissingComma {
            input: s.to_string(),
        })?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| MoveParseError::InvalidCoordinate {
                    input: s.to_string(),
                    part: part.trim().to_string(),
                })
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}
