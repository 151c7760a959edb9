//! Depth-limited game-tree search: plain minimax and alpha-beta.
//!
//! The searching player is the maximizer at the root and every leaf is scored
//! from that player's point of view. Both searches poll the deadline on entry
//! to every node and propagate [`Timeout`] unchanged.

pub mod alphabeta;
pub mod minimax;

use std::fmt;
use std::str::FromStr;

use isola_core::{GameState, Move, Player};

use crate::error::{ConfigError, Timeout};
use crate::eval::Evaluate;
use crate::time::Deadline;

/// A node's score and the move that achieves it.
pub type Scored = (f64, Move);

/// Which tree search the agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Exhaustive minimax, no pruning.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Minimax => write!(f, "minimax"),
            Method::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Method::Minimax),
            "alphabeta" => Ok(Method::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// What [`Searcher::enter`] found at a node.
enum Node {
    /// Depth exhausted or game over: the node's final value.
    Leaf(Scored),
    /// Children to expand, in legal-move order. Never empty.
    Interior(Vec<Move>),
}

/// Running best child at one node.
///
/// Ties keep the earliest child in legal-move order, for both max and min.
struct Best {
    maximizing: bool,
    scored: Option<Scored>,
}

impl Best {
    fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            scored: None,
        }
    }

    fn offer(&mut self, score: f64, mv: Move) {
        let replace = match self.scored {
            None => true,
            Some((best, _)) if self.maximizing => score > best,
            Some((best, _)) => score < best,
        };
        if replace {
            self.scored = Some((score, mv));
        }
    }

    fn into_scored(self) -> Scored {
        // max of nothing is -inf, min of nothing is +inf
        self.scored.unwrap_or(if self.maximizing {
            (f64::NEG_INFINITY, Move::NULL)
        } else {
            (f64::INFINITY, Move::NULL)
        })
    }
}

/// Per-iteration search state threaded through the recursion.
pub struct Searcher<'a, E> {
    /// Leaf evaluator.
    evaluator: &'a E,
    /// The root (maximizing) player.
    player: Player,
    /// Turn deadline.
    deadline: &'a Deadline,
    /// Nodes entered, including leaves.
    nodes: u64,
    /// Whether any non-terminal node was cut off at depth zero.
    horizon_reached: bool,
}

impl<'a, E> Searcher<'a, E> {
    /// Search on behalf of `player`, scoring leaves with `evaluator`.
    pub fn new(evaluator: &'a E, player: Player, deadline: &'a Deadline) -> Self {
        Self {
            evaluator,
            player,
            deadline,
            nodes: 0,
            horizon_reached: false,
        }
    }

    /// Nodes entered so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Whether the depth limit cut off any undecided position.
    ///
    /// `false` after a completed search means the whole game tree below the
    /// root was explored and deeper searches cannot see anything new.
    pub fn horizon_reached(&self) -> bool {
        self.horizon_reached
    }

    /// Run `method` from the root `game` to `depth` plies.
    pub fn search<G>(&mut self, method: Method, game: &G, depth: u32) -> Result<Scored, Timeout>
    where
        G: GameState,
        E: Evaluate<G>,
    {
        match method {
            Method::Minimax => self.minimax(game, depth, true),
            Method::AlphaBeta => {
                self.alphabeta(game, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Shared node prologue: deadline check, move generation, leaf test.
    fn enter<G>(&mut self, game: &G, depth: u32) -> Result<Node, Timeout>
    where
        G: GameState,
        E: Evaluate<G>,
    {
        self.deadline.check()?;
        self.nodes += 1;

        let moves = game.legal_moves(game.active_player());
        let decided = game.utility(self.player) != 0.0;
        if depth == 0 || decided || moves.is_empty() {
            if !decided && !moves.is_empty() {
                self.horizon_reached = true;
            }
            let score = self.evaluator.evaluate(game, self.player, self.deadline)?;
            // The move at a leaf only matters when the root itself is a leaf.
            let mv = moves.first().copied().unwrap_or(Move::NULL);
            return Ok(Node::Leaf((score, mv)));
        }
        Ok(Node::Interior(moves))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use isola_core::{Board, Cell};

    use super::*;
    use crate::eval::Heuristic;
    use crate::time::Clock;

    /// One to move at (2,0) on 3x3; jumping to (1,2) leaves Two stuck at (0,0).
    pub(super) fn win_in_one() -> Board {
        Board::with_blocked(
            3,
            3,
            &[Cell::new(2, 1)],
            [Some(Cell::new(2, 0)), Some(Cell::new(0, 0))],
            Player::One,
        )
        .unwrap()
    }

    /// A handful of mid-game 5x5 and 6x6 positions.
    pub(super) fn positions() -> Vec<Board> {
        let lines: [(usize, &[(i32, i32)]); 3] = [
            (5, &[(0, 0), (4, 4), (1, 2), (2, 3)]),
            (6, &[(2, 2), (0, 1), (0, 3), (1, 3)]),
            (6, &[(1, 1), (3, 2), (2, 3)]),
        ];
        lines
            .iter()
            .map(|&(size, line)| {
                let mut board = Board::new(size, size).unwrap();
                for &(r, c) in line {
                    board.apply_move(Cell::new(r, c)).unwrap();
                }
                board
            })
            .collect()
    }

    fn searcher<'a>(h: &'a Heuristic, deadline: &'a Deadline) -> Searcher<'a, Heuristic> {
        Searcher::new(h, Player::One, deadline)
    }

    #[test]
    fn method_parse_and_display() {
        assert_eq!("minimax".parse::<Method>().unwrap(), Method::Minimax);
        assert_eq!("AlphaBeta".parse::<Method>().unwrap(), Method::AlphaBeta);
        assert_eq!(format!("{}", Method::AlphaBeta), "alphabeta");
        assert!("negamax".parse::<Method>().is_err());
    }

    #[test]
    fn best_keeps_first_on_ties() {
        let mut best = Best::new(true);
        best.offer(1.0, Cell::new(0, 0));
        best.offer(1.0, Cell::new(5, 5));
        assert_eq!(best.into_scored(), (1.0, Cell::new(0, 0)));

        let mut best = Best::new(false);
        best.offer(f64::NEG_INFINITY, Cell::new(1, 1));
        best.offer(f64::NEG_INFINITY, Cell::new(0, 0));
        assert_eq!(best.into_scored(), (f64::NEG_INFINITY, Cell::new(1, 1)));
    }

    #[test]
    fn best_keeps_a_move_when_every_child_loses() {
        let mut best = Best::new(true);
        best.offer(f64::NEG_INFINITY, Cell::new(3, 3));
        assert_eq!(best.into_scored().1, Cell::new(3, 3));
    }

    #[test]
    fn finds_win_in_one_with_both_methods() {
        let board = win_in_one();
        let h = Heuristic::Custom;
        let deadline = Deadline::unlimited();
        for method in [Method::Minimax, Method::AlphaBeta] {
            let (score, mv) = searcher(&h, &deadline).search(method, &board, 1).unwrap();
            assert_eq!(mv, Cell::new(1, 2), "{method}");
            assert_eq!(score, f64::INFINITY, "{method}");
        }
    }

    #[test]
    fn decided_root_is_a_leaf() {
        let board = Board::with_blocked(
            3,
            3,
            &[],
            [Some(Cell::new(0, 0)), Some(Cell::new(1, 1))],
            Player::Two,
        )
        .unwrap();
        let h = Heuristic::Custom;
        let deadline = Deadline::unlimited();
        let mut s = Searcher::new(&h, Player::Two, &deadline);
        let (score, mv) = s.search(Method::Minimax, &board, 3).unwrap();
        assert_eq!(score, f64::NEG_INFINITY);
        assert!(mv.is_null());
        assert_eq!(s.nodes(), 1);
        assert!(!s.horizon_reached());
    }

    #[test]
    fn depth_zero_returns_first_legal_move() {
        let board = win_in_one();
        let h = Heuristic::Improved;
        let deadline = Deadline::unlimited();
        let mut s = searcher(&h, &deadline);
        let (_, mv) = s.search(Method::AlphaBeta, &board, 0).unwrap();
        assert_eq!(mv, board.legal_moves(Player::One)[0]);
        assert!(s.horizon_reached());
    }

    #[test]
    fn exhausted_tree_does_not_reach_horizon() {
        // Tiny endgame: the whole tree is shallower than the search depth.
        let board = win_in_one();
        let h = Heuristic::Improved;
        let deadline = Deadline::unlimited();
        let mut s = searcher(&h, &deadline);
        s.search(Method::Minimax, &board, 12).unwrap();
        assert!(!s.horizon_reached());
    }

    #[test]
    fn expired_deadline_propagates() {
        let board = win_in_one();
        let h = Heuristic::Improved;
        let deadline = Deadline::new(Clock::expired(), Duration::from_millis(5));
        for method in [Method::Minimax, Method::AlphaBeta] {
            assert_eq!(searcher(&h, &deadline).search(method, &board, 2), Err(Timeout));
        }
    }

    #[test]
    fn alphabeta_matches_minimax_scores() {
        let h = Heuristic::Improved;
        let deadline = Deadline::unlimited();
        for board in positions() {
            let root = board.active_player();
            for depth in 1..=4 {
                let mm = Searcher::new(&h, root, &deadline)
                    .search(Method::Minimax, &board, depth)
                    .unwrap();
                let ab = Searcher::new(&h, root, &deadline)
                    .search(Method::AlphaBeta, &board, depth)
                    .unwrap();
                assert_eq!(mm.0, ab.0, "depth {depth} on\n{board}");
            }
        }
    }

    #[test]
    fn alphabeta_visits_no_more_nodes_than_minimax() {
        let h = Heuristic::Improved;
        let deadline = Deadline::unlimited();
        for board in positions() {
            let root = board.active_player();
            let mut mm = Searcher::new(&h, root, &deadline);
            mm.search(Method::Minimax, &board, 3).unwrap();
            let mut ab = Searcher::new(&h, root, &deadline);
            ab.search(Method::AlphaBeta, &board, 3).unwrap();
            assert!(ab.nodes() <= mm.nodes());
        }
    }
}
