//! The move selector: iterative deepening over a configured search.

use isola_core::{GameState, Move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::error::Timeout;
use crate::eval::{Evaluate, Heuristic};
use crate::search::Searcher;
use crate::stats::SearchStats;
use crate::time::{Clock, Deadline};

/// A game-playing agent.
///
/// `E` scores leaf positions. [`Agent::new`] uses the configured
/// [`Heuristic`]; [`Agent::with_evaluator`] accepts any [`Evaluate`]
/// implementation, closures included.
pub struct Agent<E = Heuristic> {
    config: AgentConfig,
    evaluator: E,
    stats: SearchStats,
    rng: StdRng,
}

impl Agent<Heuristic> {
    /// Create an agent scoring leaves with `config.heuristic`.
    pub fn new(config: AgentConfig) -> Self {
        let heuristic = config.heuristic;
        Self::with_evaluator(config, heuristic)
    }
}

impl<E> Agent<E> {
    /// Create an agent with a custom leaf evaluator.
    pub fn with_evaluator(config: AgentConfig, evaluator: E) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
            rng,
        }
    }

    /// The configuration this agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Counters accumulated over every decision so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Mutable counters, for resetting or carrying them over to a new agent.
    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Choose a move for the player to move in `game`.
    ///
    /// Starts from a random legal move (or [`Move::NULL`] when `legal_moves`
    /// is empty), then searches with the configured method: once at
    /// `search_depth`, or at depth 1, 2, 3, ... when iterative. Each completed
    /// iteration replaces the answer. Deepening stops on a decisive score, on
    /// an iteration that explored the whole remaining game tree, or when
    /// `clock` drops below the configured threshold; in the last case the
    /// interrupted iteration is discarded.
    pub fn get_move<G>(&mut self, game: &G, legal_moves: &[Move], clock: Clock) -> Move
    where
        G: GameState,
        E: Evaluate<G>,
    {
        let mut best_move = legal_moves.choose(&mut self.rng).copied().unwrap_or(Move::NULL);

        let deadline = Deadline::new(clock, self.config.timeout);
        let player = game.active_player();
        let depths = if self.config.iterative {
            1..=u32::MAX
        } else {
            self.config.search_depth..=self.config.search_depth
        };

        let mut completed_depth = 0;
        let mut end_of_tree = false;
        let mut nodes = 0;

        for depth in depths {
            let mut searcher = Searcher::new(&self.evaluator, player, &deadline);
            let outcome = searcher.search(self.config.method, game, depth);
            nodes += searcher.nodes();

            match outcome {
                Ok((score, mv)) => {
                    best_move = mv;
                    completed_depth = depth;
                    debug!(depth, score, best = %mv, nodes = searcher.nodes(), "iteration complete");

                    if score.is_infinite() {
                        end_of_tree = true;
                        debug!(depth, score, "outcome decided");
                        break;
                    }
                    if !searcher.horizon_reached() {
                        debug!(depth, score, "game tree exhausted");
                        break;
                    }
                }
                Err(Timeout) => {
                    debug!(depth, completed_depth, "search timed out");
                    break;
                }
            }
        }

        self.stats
            .record(completed_depth, legal_moves.len(), end_of_tree, nodes);

        info!(
            player = %player,
            method = %self.config.method,
            depth = completed_depth,
            nodes,
            end_of_tree,
            elapsed = ?clock.elapsed(),
            best = %best_move,
            "move chosen"
        );
        best_move
    }
}
