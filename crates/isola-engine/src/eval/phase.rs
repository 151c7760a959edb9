//! Game phase from the fraction of the board still blank, and the
//! phase-dependent scorers built on it.
//!
//! Exhaustive traversals are only affordable once the board is sparse, so the
//! expensive scorers are reserved for later phases.
//!
//! | Remaining fraction | [`variable_heuristic_score`] uses |
//! |--------------------|-----------------------------------|
//! | > 0.3              | random                            |
//! | (0.2, 0.3]         | reachable space                   |
//! | <= 0.2             | longest path                      |

use isola_core::{GameState, Player};

use crate::error::Timeout;
use crate::eval::mobility::improved_score;
use crate::eval::random_score;
use crate::eval::space::{longest_path_score, reachable_space_score};
use crate::time::Deadline;

/// Above this fraction [`variable_heuristic_score`] plays randomly.
pub const OPENING_REMAINING: f64 = 0.3;

/// Above this fraction (and up to [`OPENING_REMAINING`]) it counts reachable space.
pub const MIDGAME_REMAINING: f64 = 0.2;

/// Below this fraction [`improved_reachable_space_score`] switches to reachable space.
pub const IMPROVED_CUTOFF_REMAINING: f64 = 2.0 / 3.0;

/// Fraction of all cells that are still blank, in `0.0..=1.0`.
pub fn remaining_fraction<G: GameState>(game: &G) -> f64 {
    game.blank_count() as f64 / (game.width() * game.height()) as f64
}

/// Random noise early, reachable space mid-game, longest path at the end.
pub fn variable_heuristic_score<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let remaining = remaining_fraction(game);
    if remaining > OPENING_REMAINING {
        random_score(game, player, deadline)
    } else if remaining > MIDGAME_REMAINING {
        reachable_space_score(game, player, deadline)
    } else {
        longest_path_score(game, player, deadline)
    }
}

/// Improved score early, reachable space once a third of the board is gone.
pub fn improved_reachable_space_score<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    if remaining_fraction(game) < IMPROVED_CUTOFF_REMAINING {
        reachable_space_score(game, player, deadline)
    } else {
        improved_score(game, player, deadline)
    }
}
