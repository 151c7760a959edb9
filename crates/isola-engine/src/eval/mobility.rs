//! Mobility scorers: cheap, O(branching factor) functions of immediate moves.

use std::collections::HashSet;

use isola_core::{GameState, Player};
use tracing::trace;

use crate::error::Timeout;
use crate::time::Deadline;

/// Own legal-move count minus opponent legal-move count.
pub fn improved_score<G: GameState>(
    game: &G,
    player: Player,
    _deadline: &Deadline,
) -> Result<f64, Timeout> {
    let own = game.legal_moves(player).len();
    let opp = game.legal_moves(game.opponent(player)).len();
    Ok(own as f64 - opp as f64)
}

/// [`improved_score`] minus the Euclidean distance between the players.
///
/// Rewards closing in on the opponent. Distance is zero while either player
/// is unplaced.
pub fn imp_score_w_neg_dist<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let improved = improved_score(game, player, deadline)?;
    let opponent = game.opponent(player);
    let dist = match (game.player_location(player), game.player_location(opponent)) {
        (Some(own), Some(opp)) => own.distance(opp),
        _ => 0.0,
    };
    Ok(improved - dist)
}

/// [`improved_score`] minus the number of cells both players could move to.
pub fn imp_score_w_neg_legal_moves_int<G: GameState>(
    game: &G,
    player: Player,
    _deadline: &Deadline,
) -> Result<f64, Timeout> {
    let own = game.legal_moves(player);
    let opp = game.legal_moves(game.opponent(player));
    let opp_set: HashSet<_> = opp.iter().copied().collect();
    let shared = own.iter().filter(|mv| opp_set.contains(mv)).count();
    trace!(own = own.len(), opp = opp.len(), shared, "shared move targets");
    Ok(own.len() as f64 - opp.len() as f64 - shared as f64)
}
