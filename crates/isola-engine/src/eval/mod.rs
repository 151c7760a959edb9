//! Static evaluation of non-terminal positions.
//!
//! Every scorer shares one signature, `(game, player, deadline) -> Result<f64, Timeout>`,
//! where a higher value is better for `player`. Scorers that run graph
//! traversals propagate [`Timeout`]; none of them catch it.

pub mod mobility;
pub mod phase;
pub mod space;

use std::fmt;
use std::str::FromStr;

use isola_core::{GameState, Player};
use rand::Rng;

use crate::error::{ConfigError, Timeout};
use crate::time::Deadline;

pub use mobility::{imp_score_w_neg_dist, imp_score_w_neg_legal_moves_int, improved_score};
pub use phase::{improved_reachable_space_score, remaining_fraction, variable_heuristic_score};
pub use space::{longest_path_score, reachable_space_score};

/// A static evaluation function over states of type `G`.
///
/// Implemented by [`Heuristic`] and by any closure or function with the
/// scorer signature.
pub trait Evaluate<G: GameState> {
    /// Score `game` from `player`'s point of view.
    fn evaluate(&self, game: &G, player: Player, deadline: &Deadline) -> Result<f64, Timeout>;
}

impl<G, F> Evaluate<G> for F
where
    G: GameState,
    F: Fn(&G, Player, &Deadline) -> Result<f64, Timeout>,
{
    fn evaluate(&self, game: &G, player: Player, deadline: &Deadline) -> Result<f64, Timeout> {
        self(game, player, deadline)
    }
}

/// Built-in scorers, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Terminal utility if decided, else [`Heuristic::Variable`].
    #[default]
    Custom,
    /// Own move count minus opponent move count.
    Improved,
    /// Own reachable cells minus opponent reachable cells.
    ReachableSpace,
    /// Own longest path minus opponent longest path.
    LongestPath,
    /// Improved score minus the distance between players.
    ImprovedNegDistance,
    /// Improved score minus the number of shared move targets.
    ImprovedNegSharedMoves,
    /// Uniform noise in (0, 1].
    Random,
    /// Phase-dependent choice between random, reachable space and longest path.
    Variable,
    /// Reachable space once a third of the board is gone, improved before.
    ImprovedReachableSpace,
}

impl Heuristic {
    /// All heuristics in declaration order.
    pub const ALL: [Heuristic; 9] = [
        Heuristic::Custom,
        Heuristic::Improved,
        Heuristic::ReachableSpace,
        Heuristic::LongestPath,
        Heuristic::ImprovedNegDistance,
        Heuristic::ImprovedNegSharedMoves,
        Heuristic::Random,
        Heuristic::Variable,
        Heuristic::ImprovedReachableSpace,
    ];

    /// The name used by [`FromStr`] and [`fmt::Display`].
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::Custom => "custom",
            Heuristic::Improved => "improved",
            Heuristic::ReachableSpace => "reachable_space",
            Heuristic::LongestPath => "longest_path",
            Heuristic::ImprovedNegDistance => "imp_neg_dist",
            Heuristic::ImprovedNegSharedMoves => "imp_neg_legal_moves_int",
            Heuristic::Random => "random",
            Heuristic::Variable => "variable",
            Heuristic::ImprovedReachableSpace => "improved_reachable_space",
        }
    }
}

impl<G: GameState> Evaluate<G> for Heuristic {
    fn evaluate(&self, game: &G, player: Player, deadline: &Deadline) -> Result<f64, Timeout> {
        match self {
            Heuristic::Custom => custom_score(game, player, deadline),
            Heuristic::Improved => improved_score(game, player, deadline),
            Heuristic::ReachableSpace => reachable_space_score(game, player, deadline),
            Heuristic::LongestPath => longest_path_score(game, player, deadline),
            Heuristic::ImprovedNegDistance => imp_score_w_neg_dist(game, player, deadline),
            Heuristic::ImprovedNegSharedMoves => {
                imp_score_w_neg_legal_moves_int(game, player, deadline)
            }
            Heuristic::Random => random_score(game, player, deadline),
            Heuristic::Variable => variable_heuristic_score(game, player, deadline),
            Heuristic::ImprovedReachableSpace => {
                improved_reachable_space_score(game, player, deadline)
            }
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == lower)
            .ok_or_else(|| ConfigError::UnknownHeuristic {
                value: s.to_string(),
            })
    }
}

/// Terminal utility when the game is decided, otherwise [`variable_heuristic_score`].
pub fn custom_score<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let utility = game.utility(player);
    if utility != 0.0 {
        return Ok(utility);
    }
    variable_heuristic_score(game, player, deadline)
}

/// Uniform random value in (0, 1]. A deliberately weak baseline.
pub fn random_score<G: GameState>(
    _game: &G,
    _player: Player,
    _deadline: &Deadline,
) -> Result<f64, Timeout> {
    // random() is in [0, 1)
    Ok(1.0 - rand::rng().random::<f64>())
}
