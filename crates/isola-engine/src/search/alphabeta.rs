//! Minimax with alpha-beta pruning.

use isola_core::GameState;
use tracing::trace;

use crate::error::Timeout;
use crate::eval::Evaluate;
use crate::search::{Best, Node, Scored, Searcher};

impl<E> Searcher<'_, E> {
    /// Alpha-beta search to `depth` plies from `game`.
    ///
    /// `alpha` is the best score the maximizer can already guarantee and
    /// `beta` the best the minimizer can. After each child the bound for the
    /// side to move is tightened; once `beta <= alpha` the remaining siblings
    /// cannot affect the result and are skipped. The returned pair is the
    /// max/min over the children actually examined.
    pub fn alphabeta<G>(
        &mut self,
        game: &G,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<Scored, Timeout>
    where
        G: GameState,
        E: Evaluate<G>,
    {
        let moves = match self.enter(game, depth)? {
            Node::Leaf(scored) => return Ok(scored),
            Node::Interior(moves) => moves,
        };

        let mut best = Best::new(maximizing);
        for mv in moves {
            let child = game.forecast_move(mv);
            let (score, _) = self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?;
            best.offer(score, mv);

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                trace!(alpha, beta, depth, "alpha-beta cutoff");
                break;
            }
        }
        Ok(best.into_scored())
    }
}
