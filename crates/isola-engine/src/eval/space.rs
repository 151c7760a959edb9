//! Territory scorers built on the exhaustive traversals.
//!
//! Both run one traversal per player over independent copies of the blank
//! set, seeded with that player's own cell. They are expensive and meant for
//! late, sparse positions.

use std::time::Instant;

use isola_core::{CellSet, GameState, Player};
use tracing::trace;

use crate::error::Timeout;
use crate::time::Deadline;
use crate::traverse::{flood_fill, longest_path};

/// Number of blank cells `player` can reach.
///
/// An unplaced player can reach every blank cell.
fn open_space<G: GameState>(
    game: &G,
    player: Player,
    blank: &CellSet,
    deadline: &Deadline,
) -> Result<usize, Timeout> {
    let Some(loc) = game.player_location(player) else {
        return Ok(blank.len());
    };
    let mut unreachable = blank.clone();
    unreachable.insert(loc);
    flood_fill(loc, &mut unreachable, deadline)?;
    // loc itself was removed by the fill, so what remains is a subset of blank
    Ok(blank.len() - unreachable.len())
}

/// Length of the longest knight path from `player`'s cell, counting the cell itself.
///
/// An unplaced player is credited with every blank cell.
fn path_length<G: GameState>(
    game: &G,
    player: Player,
    blank: &CellSet,
    deadline: &Deadline,
) -> Result<usize, Timeout> {
    let Some(loc) = game.player_location(player) else {
        return Ok(blank.len());
    };
    let mut own = blank.clone();
    own.insert(loc);
    Ok(longest_path(loc, Vec::new(), own, deadline)?.len())
}

/// Own reachable blank cells minus opponent reachable blank cells.
pub fn reachable_space_score<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let started = Instant::now();
    let blank = game.blank_spaces();
    let own = open_space(game, player, &blank, deadline)?;
    let opp = open_space(game, game.opponent(player), &blank, deadline)?;
    trace!(
        own,
        opp,
        elapsed = ?started.elapsed(),
        "reachable space scored"
    );
    Ok(own as f64 - opp as f64)
}

/// Own longest path minus opponent longest path.
///
/// Approximates who survives longer; paths may cross, so it is not a
/// guaranteed predictor of the winner.
pub fn longest_path_score<G: GameState>(
    game: &G,
    player: Player,
    deadline: &Deadline,
) -> Result<f64, Timeout> {
    let started = Instant::now();
    let blank = game.blank_spaces();
    let own = path_length(game, player, &blank, deadline)?;
    let opp = path_length(game, game.opponent(player), &blank, deadline)?;
    trace!(
        own,
        opp,
        elapsed = ?started.elapsed(),
        "longest path scored"
    );
    Ok(own as f64 - opp as f64)
}
