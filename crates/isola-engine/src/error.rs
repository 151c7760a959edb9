//! Engine errors.

/// The turn deadline has been reached; the current search must unwind.
///
/// Raised by every recursive search and traversal frame and caught only by
/// [`Agent::get_move`](crate::Agent::get_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search deadline exceeded")]
pub struct Timeout;

/// Errors from parsing agent configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The search method is not `minimax` or `alphabeta`.
    #[error("unknown search method: {value}")]
    UnknownMethod {
        /// The rejected value.
        value: String,
    },
    /// The heuristic name does not match any built-in scorer.
    #[error("unknown heuristic: {value}")]
    UnknownHeuristic {
        /// The rejected value.
        value: String,
    },
}
