//! Text protocol front end for isola.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, EngineOption, GoParams, parse_command};
pub use engine::IsolaEngine;
pub use error::ProtocolError;
