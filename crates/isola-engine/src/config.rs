//! Agent configuration.

use std::time::Duration;

use crate::eval::Heuristic;
use crate::search::Method;

/// Default fixed search depth.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default abort threshold: stop once less than this is left on the clock.
pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(10);

/// How an [`Agent`](crate::Agent) searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /// Depth of a fixed-depth search. Ignored when `iterative` is set.
    pub search_depth: u32,
    /// Leaf scorer used by [`Agent::new`](crate::Agent::new).
    pub heuristic: Heuristic,
    /// Iterative deepening from depth 1 with no ceiling.
    pub iterative: bool,
    /// Tree search algorithm.
    pub method: Method,
    /// Abort threshold on the remaining time.
    pub timeout: Duration,
    /// Seed for the fallback move picker. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            heuristic: Heuristic::default(),
            iterative: true,
            method: Method::default(),
            timeout: DEFAULT_THRESHOLD,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.heuristic, Heuristic::Custom);
        assert!(config.iterative);
        assert_eq!(config.method, Method::Minimax);
        assert_eq!(config.timeout, Duration::from_millis(10));
        assert_eq!(config.seed, None);
    }
}
