//! The game-state capability consumed by search and evaluation.

use std::collections::HashSet;

use crate::cell::{Cell, Move};
use crate::player::Player;

/// A set of unblocked cells.
pub type CellSet = HashSet<Cell>;

/// An immutable snapshot of an isolation game.
///
/// Implementations must never mutate `self` in [`forecast_move`](GameState::forecast_move):
/// states form an immutable lineage and search relies on sibling branches
/// seeing the same parent.
pub trait GameState: Sized {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// The other player.
    fn opponent(&self, player: Player) -> Player {
        player.flip()
    }

    /// Current location of `player`, or `None` before their first move.
    fn player_location(&self, player: Player) -> Option<Cell>;

    /// Every cell that is neither blocked nor occupied.
    fn blank_spaces(&self) -> CellSet;

    /// Number of blank cells.
    fn blank_count(&self) -> usize {
        self.blank_spaces().len()
    }

    /// Legal moves for `player`, in a stable order.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// The state after the active player makes `mv`. The active player flips.
    fn forecast_move(&self, mv: Move) -> Self;

    /// Terminal utility from `player`'s perspective.
    ///
    /// Zero while the active player still has a move, `+inf` for the winner
    /// and `-inf` for the loser once they do not.
    fn utility(&self, player: Player) -> f64;

    /// Whether the game has ended.
    fn is_over(&self) -> bool {
        self.legal_moves(self.active_player()).is_empty()
    }
}
