//! The isolation board: blocked cells, player locations, and side to move.

use std::fmt;

use tracing::trace;

use crate::cell::{Cell, Move};
use crate::error::BoardError;
use crate::player::Player;
use crate::state::{CellSet, GameState};

/// Largest supported width or height.
pub const MAX_DIMENSION: usize = 32;

/// Default board edge used by the front end.
pub const DEFAULT_SIZE: usize = 7;

/// Complete isolation position.
///
/// Every cell a player has ever stood on is blocked, including each
/// player's current cell, so blank cells are exactly the unblocked ones.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major blocked flags, `height * width` long.
    blocked: Vec<bool>,
    /// Location of each player, indexed by [`Player::index()`].
    locations: [Option<Cell>; Player::COUNT],
    /// Which player moves next.
    active: Player,
    /// Number of moves applied so far.
    move_count: u32,
}

impl Board {
    /// An empty board with neither player placed and [`Player::One`] to move.
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None; Player::COUNT],
            active: Player::One,
            move_count: 0,
        })
    }

    /// A board with `blocked` cells pre-filled, players at `locations`, and
    /// `active` to move.
    ///
    /// Player locations are blocked as well.
    pub fn with_blocked(
        width: usize,
        height: usize,
        blocked: &[Cell],
        locations: [Option<Cell>; Player::COUNT],
        active: Player,
    ) -> Result<Board, BoardError> {
        let mut board = Board::new(width, height)?;
        for &cell in blocked {
            let idx = board.index_of(cell).ok_or(BoardError::OutOfBounds { cell })?;
            board.blocked[idx] = true;
        }
        if let [Some(a), Some(b)] = locations
            && a == b
        {
            return Err(BoardError::SharedLocation { cell: a });
        }
        for player in Player::ALL {
            if let Some(cell) = locations[player.index()] {
                let idx = board.index_of(cell).ok_or(BoardError::OutOfBounds { cell })?;
                board.blocked[idx] = true;
            }
        }
        board.locations = locations;
        board.active = active;
        Ok(board)
    }

    /// Whether `cell` is on the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.height as i32).contains(&cell.row()) && (0..self.width as i32).contains(&cell.col())
    }

    /// Whether `cell` is on the grid and unblocked.
    #[inline]
    pub fn is_blank(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|idx| !self.blocked[idx])
    }

    /// Number of moves applied since the board was built.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Apply `mv` for the active player after checking it is legal.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        let player = self.active;
        if !self.legal_moves(player).contains(&mv) {
            return Err(BoardError::IllegalMove { mv, player });
        }
        self.push_move(mv);
        trace!(%mv, %player, move_count = self.move_count, "move applied");
        Ok(())
    }

    fn push_move(&mut self, mv: Move) {
        if let Some(idx) = self.index_of(mv) {
            self.blocked[idx] = true;
        }
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.flip();
        self.move_count += 1;
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row() as usize * self.width + cell.col() as usize)
    }

    fn blank_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.is_blank(cell))
    }
}

impl GameState for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn player_location(&self, player: Player) -> Option<Cell> {
        self.locations[player.index()]
    }

    fn blank_spaces(&self) -> CellSet {
        self.blank_cells().collect()
    }

    fn blank_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            // Opening placement: any blank cell.
            None => self.blank_cells().collect(),
            Some(loc) => loc
                .knight_neighbors()
                .into_iter()
                .filter(|&cell| self.is_blank(cell))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Board {
        debug_assert!(
            self.legal_moves(self.active).contains(&mv),
            "forecast of illegal move {mv}"
        );
        let mut next = self.clone();
        next.push_move(mv);
        next
    }

    fn utility(&self, player: Player) -> f64 {
        if !self.legal_moves(self.active).is_empty() {
            0.0
        } else if player == self.active {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Cell::new(row, col);
                let ch = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "to move: {}", self.active)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("locations", &self.locations)
            .field("active", &self.active)
            .field("move_count", &self.move_count)
            .finish()
    }
}
