//! Command-line protocol parsing.

use std::time::Duration;

use isola_core::{Board, Cell, DEFAULT_SIZE, Move, Player};
use isola_engine::{Heuristic, Method};

use crate::error::ProtocolError;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Time budget for this move. `None` uses the engine default.
    pub movetime: Option<Duration>,
}

/// An option settable with `setoption name <Name> value <v>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Fixed search depth.
    Depth(u32),
    /// Iterative deepening on or off.
    Iterative(bool),
    /// Search algorithm.
    Method(Method),
    /// Leaf evaluator.
    Heuristic(Heuristic),
    /// Abort threshold on the remaining time.
    Threshold(Duration),
    /// Fallback move seed; `None` seeds from the OS.
    Seed(Option<u64>),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `newgame [<width> <height>]` -- fresh empty board.
    NewGame {
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },
    /// `position` -- set up a board with optional blocked cells and moves.
    Position(Board),
    /// `play <r,c>` -- apply a move for the player to move.
    Play(Move),
    /// `setoption` -- reconfigure the agent.
    SetOption(EngineOption),
    /// `go` -- choose a move for the player to move.
    Go(GoParams),
    /// `stats` -- print cumulative search statistics.
    Stats,
    /// `d` -- print the board.
    Display,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "newgame" => parse_newgame(args),
        "position" => parse_position(args),
        "play" => {
            let token = args.first().ok_or_else(|| missing("play"))?;
            Ok(Command::Play(token.parse()?))
        }
        "setoption" => parse_setoption(args),
        "go" => parse_go(args),
        "stats" => Ok(Command::Stats),
        "d" => Ok(Command::Display),
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

fn parse_newgame(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let (width, height) = match tokens {
        [] => (DEFAULT_SIZE, DEFAULT_SIZE),
        [w, h, ..] => (parse_number(w, "width")?, parse_number(h, "height")?),
        [_] => return Err(missing("height")),
    };
    Ok(Command::NewGame { width, height })
}

/// Parse the `position` command arguments.
///
/// `position <width> <height> [blocked r,c ...] [moves r,c ...]`. Blocked
/// cells are applied first with neither player placed and player one to
/// move; the moves are then replayed and each one is checked for legality.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let [w, h, rest @ ..] = tokens else {
        return Err(ProtocolError::MalformedPosition);
    };
    let width = parse_number(w, "width")?;
    let height = parse_number(h, "height")?;

    let mut blocked: Vec<Cell> = Vec::new();
    let mut moves: Vec<Move> = Vec::new();
    // None until the first `blocked` or `moves` keyword
    let mut in_moves: Option<bool> = None;
    for &token in rest {
        match token {
            "blocked" => in_moves = Some(false),
            "moves" => in_moves = Some(true),
            _ => match in_moves {
                Some(false) => blocked.push(token.parse()?),
                Some(true) => moves.push(token.parse()?),
                None => return Err(ProtocolError::MalformedPosition),
            },
        }
    }

    let mut board = Board::with_blocked(width, height, &blocked, [None, None], Player::One)?;
    for mv in moves {
        board.apply_move(mv)?;
    }
    Ok(Command::Position(board))
}

/// Parse `setoption name <Name> value <v>`. Names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let name_at = tokens
        .iter()
        .position(|&t| t == "name")
        .ok_or_else(|| missing("name"))?;
    let value_at = tokens
        .iter()
        .position(|&t| t == "value")
        .ok_or_else(|| missing("value"))?;
    let name = tokens
        .get(name_at + 1..value_at)
        .map(|words| words.join(" "))
        .unwrap_or_default();
    let value = tokens.get(value_at + 1).ok_or_else(|| missing(&name))?;

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => EngineOption::Depth(parse_number(value, "Depth")?),
        "iterative" => EngineOption::Iterative(parse_bool(value)?),
        "method" => EngineOption::Method(value.parse()?),
        "heuristic" => EngineOption::Heuristic(value.parse()?),
        "threshold" => EngineOption::Threshold(Duration::from_millis(parse_number(value, "Threshold")?)),
        "seed" if value.eq_ignore_ascii_case("none") => EngineOption::Seed(None),
        "seed" => EngineOption::Seed(Some(parse_number(value, "Seed")?)),
        _ => return Err(ProtocolError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

/// Parse the `go` command arguments. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "movetime" => {
                let value = tokens.get(i + 1).ok_or_else(|| missing("movetime"))?;
                params.movetime = Some(Duration::from_millis(parse_number(value, "movetime")?));
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

fn missing(param: &str) -> ProtocolError {
    ProtocolError::MissingValue {
        param: param.to_string(),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, param: &str) -> Result<T, ProtocolError> {
    value.parse().map_err(|_| ProtocolError::InvalidNumber {
        param: param.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(value: &str) -> Result<bool, ProtocolError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ProtocolError::InvalidBool {
            value: value.to_string(),
        }),
    }
}
