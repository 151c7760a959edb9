//! Exhaustive knight-graph traversals over the set of blank cells.
//!
//! Both traversals poll the [`Deadline`] on entry to every recursive call and
//! propagate [`Timeout`] to the caller. Neither catches it.

use isola_core::{Cell, CellSet};

use crate::error::Timeout;
use crate::time::Deadline;

/// The eight knight-jump neighbours of `cell`, without bounds or occupancy
/// filtering. Callers filter by membership in their blank set.
#[inline]
pub fn possible_moves(cell: Cell) -> [Cell; 8] {
    cell.knight_neighbors()
}

/// Remove from `blank` every cell knight-reachable from `start` through cells of `blank`.
///
/// `start` is itself removed when present; if it is absent nothing happens.
/// On success `blank` holds exactly the cells unreachable from `start`.
pub fn flood_fill(start: Cell, blank: &mut CellSet, deadline: &Deadline) -> Result<(), Timeout> {
    deadline.check()?;

    if !blank.remove(&start) {
        return Ok(());
    }
    for next in possible_moves(start) {
        flood_fill(next, blank, deadline)?;
    }
    Ok(())
}

/// Longest simple knight path that continues `path` from `start` through `blank`.
///
/// Returns `path` unchanged when `start` is not in `blank`. Otherwise the
/// result is `path` followed by `start` and the longest continuation found.
/// Each branch explores its own copy of `path` and `blank`, so siblings never
/// see each other's visits. Among equally long paths the first one found in
/// [`possible_moves`] order wins.
///
/// Exponential in the number of reachable cells; bounded only by the shrinking
/// blank set and the deadline.
pub fn longest_path(
    start: Cell,
    mut path: Vec<Cell>,
    mut blank: CellSet,
    deadline: &Deadline,
) -> Result<Vec<Cell>, Timeout> {
    deadline.check()?;

    if !blank.remove(&start) {
        return Ok(path);
    }
    path.push(start);

    let mut longest: Option<Vec<Cell>> = None;
    for next in possible_moves(start) {
        if !blank.contains(&next) {
            continue;
        }
        let candidate = longest_path(next, path.clone(), blank.clone(), deadline)?;
        if longest.as_ref().is_none_or(|best| candidate.len() > best.len()) {
            longest = Some(candidate);
        }
    }
    Ok(longest.unwrap_or(path))
}
