//! Cumulative per-agent search counters.

use std::fmt;

/// Totals accumulated over every [`Agent::get_move`](crate::Agent::get_move) call.
///
/// Never reset automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sum of the deepest completed search depth per move.
    pub total_depth: u64,
    /// Number of moves made.
    pub total_moves: u64,
    /// Sum of the number of legal moves at each root.
    pub total_branch: u64,
    /// Moves whose search reached the end of the game tree.
    pub total_end_of_tree: u64,
    /// Search nodes visited, including interrupted iterations.
    pub total_nodes: u64,
}

impl SearchStats {
    /// Record one decision.
    pub fn record(&mut self, depth: u32, branching: usize, end_of_tree: bool, nodes: u64) {
        self.total_depth += u64::from(depth);
        self.total_moves += 1;
        self.total_branch += branching as u64;
        if end_of_tree {
            self.total_end_of_tree += 1;
        }
        self.total_nodes += nodes;
    }

    /// Mean completed depth per move, or 0 before the first move.
    pub fn avg_depth(&self) -> f64 {
        ratio(self.total_depth, self.total_moves)
    }

    /// Mean number of legal moves at the root, or 0 before the first move.
    pub fn avg_branching(&self) -> f64 {
        ratio(self.total_branch, self.total_moves)
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn ratio(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moves {} avgdepth {:.2} avgbranch {:.2} endoftree {} nodes {}",
            self.total_moves,
            self.avg_depth(),
            self.avg_branching(),
            self.total_end_of_tree,
            self.total_nodes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_are_zero_before_first_move() {
        let stats = SearchStats::default();
        assert_eq!(stats.avg_depth(), 0.0);
        assert_eq!(stats.avg_branching(), 0.0);
    }

    #[test]
    fn record_accumulates() {
        let mut stats = SearchStats::default();
        stats.record(4, 6, false, 100);
        stats.record(2, 2, true, 20);
        assert_eq!(stats.total_moves, 2);
        assert_eq!(stats.total_depth, 6);
        assert_eq!(stats.total_branch, 8);
        assert_eq!(stats.total_end_of_tree, 1);
        assert_eq!(stats.total_nodes, 120);
        assert_eq!(stats.avg_depth(), 3.0);
        assert_eq!(stats.avg_branching(), 4.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = SearchStats::default();
        stats.record(3, 5, true, 9);
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn display_format() {
        let mut stats = SearchStats::default();
        stats.record(3, 4, true, 50);
        assert_eq!(
            stats.to_string(),
            "moves 1 avgdepth 3.00 avgbranch 4.00 endoftree 1 nodes 50"
        );
    }
}
