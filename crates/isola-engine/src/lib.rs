//! Search and evaluation for isola.

pub mod agent;
pub mod config;
pub mod error;
pub mod eval;
pub mod search;
pub mod stats;
pub mod time;
pub mod traverse;

pub use agent::Agent;
pub use config::AgentConfig;
pub use error::{ConfigError, Timeout};
pub use eval::{Evaluate, Heuristic, custom_score};
pub use search::{Method, Scored, Searcher};
pub use stats::SearchStats;
pub use time::{Clock, Deadline};
pub use traverse::{flood_fill, longest_path, possible_moves};
