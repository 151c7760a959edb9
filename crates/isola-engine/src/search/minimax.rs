//! Plain depth-limited minimax.

use isola_core::GameState;

use crate::error::Timeout;
use crate::eval::Evaluate;
use crate::search::{Best, Node, Scored, Searcher};

impl<E> Searcher<'_, E> {
    /// Minimax to `depth` plies from `game`.
    ///
    /// Every child is searched; the result is the maximum child score on
    /// maximizing layers and the minimum on minimizing layers, paired with the
    /// move that leads to it.
    pub fn minimax<G>(&mut self, game: &G, depth: u32, maximizing: bool) -> Result<Scored, Timeout>
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
            let (score, _) = self.minimax(&game.forecast_move(mv), depth - 1, !maximizing)?;
            best.offer(score, mv);
        }
        Ok(best.into_scored())
    }
}
