//! Line-oriented engine loop: one command per input line, replies on output.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use isola_core::{Board, DEFAULT_SIZE, GameState};
use isola_engine::{Agent, AgentConfig, Clock};

use crate::command::{Command, EngineOption, GoParams, parse_command};
use crate::error::ProtocolError;

/// Budget for `go` without `movetime`.
pub const DEFAULT_MOVETIME: Duration = Duration::from_millis(150);

/// The text front end, holding the current board and the agent.
pub struct IsolaEngine {
    board: Board,
    config: AgentConfig,
    agent: Agent,
}

impl IsolaEngine {
    /// Create an engine on an empty default-size board with a default agent.
    pub fn new() -> Result<Self, ProtocolError> {
        let config = AgentConfig::default();
        Ok(Self {
            board: Board::new(DEFAULT_SIZE, DEFAULT_SIZE)?,
            config,
            agent: Agent::new(config),
        })
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), ProtocolError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the loop over arbitrary input and output.
    ///
    /// Malformed commands are logged and skipped; only I/O failures end the
    /// loop with an error.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => warn!(error = %e, line = %trimmed, "command rejected"),
            }
            out.flush()?;
        }

        info!("isola shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::NewGame { width, height } => match Board::new(width, height) {
                Ok(board) => self.board = board,
                Err(e) => warn!(error = %e, "newgame rejected"),
            },
            Command::Position(board) => self.board = board,
            Command::Play(mv) => {
                if let Err(e) = self.board.apply_move(mv) {
                    warn!(error = %e, "play rejected");
                }
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Go(params) => self.handle_go(params, out)?,
            Command::Stats => writeln!(out, "stats {}", self.agent.stats())?,
            Command::Display => writeln!(out, "{}", self.board)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    /// Apply `option` and rebuild the agent, keeping its statistics.
    fn handle_setoption(&mut self, option: EngineOption) {
        match option {
            EngineOption::Depth(depth) => self.config.search_depth = depth,
            EngineOption::Iterative(on) => self.config.iterative = on,
            EngineOption::Method(method) => self.config.method = method,
            EngineOption::Heuristic(heuristic) => self.config.heuristic = heuristic,
            EngineOption::Threshold(threshold) => self.config.timeout = threshold,
            EngineOption::Seed(seed) => self.config.seed = seed,
        }
        let stats = *self.agent.stats();
        self.agent = Agent::new(self.config);
        *self.agent.stats_mut() = stats;
        debug!(?option, "agent reconfigured");
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> io::Result<()> {
        let budget = params.movetime.unwrap_or(DEFAULT_MOVETIME);
        let legal = self.board.legal_moves(self.board.active_player());

        let before = *self.agent.stats();
        let clock = Clock::new(budget);
        let best = self.agent.get_move(&self.board, &legal, clock);
        let after = *self.agent.stats();

        writeln!(
            out,
            "info depth {} nodes {} time {} legal {}",
            after.total_depth - before.total_depth,
            after.total_nodes - before.total_nodes,
            clock.elapsed().as_millis(),
            legal.len()
        )?;
        writeln!(out, "bestmove {best}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        IsolaEngine::new()
            .unwrap()
            .run_with(Cursor::new(script), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn bestmoves(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter_map(|l| l.strip_prefix("bestmove "))
            .collect()
    }

    #[test]
    fn isready_replies_readyok() {
        assert_eq!(run_script("isready\n"), "readyok\n");
    }

    #[test]
    fn quit_stops_processing() {
        assert_eq!(run_script("quit\nisready\n"), "");
    }

    #[test]
    fn malformed_commands_are_skipped() {
        let out = run_script("position\nplay 9;9\nsetoption name Hash value 1\nfoo\nisready\n");
        assert_eq!(out, "readyok\n");
    }

    #[test]
    fn go_on_fresh_board_returns_legal_placement() {
        let out = run_script("setoption name Seed value 1\nnewgame 4 4\ngo movetime 100\n");
        let moves = bestmoves(&out);
        assert_eq!(moves.len(), 1);
        let mv: isola_core::Move = moves[0].parse().unwrap();
        assert!(Board::new(4, 4).unwrap().is_blank(mv));
        assert!(out.lines().next().unwrap().starts_with("info depth "));
    }

    #[test]
    fn go_for_stuck_player_returns_none() {
        // One ends on (1,2) with both of its jumps, (0,0) and (2,0), blocked.
        let out = run_script(
            "position 3 3 blocked 2,0 moves 0,0 2,1 1,2 0,2\ngo movetime 100\n",
        );
        assert_eq!(bestmoves(&out), vec!["none"]);
    }

    #[test]
    fn play_then_display() {
        let out = run_script("newgame 3 3\nplay 1,1\nd\n");
        assert_eq!(out, ". . .\n. 1 .\n. . .\nto move: 2\n");
    }

    #[test]
    fn stats_survive_setoption() {
        let out = run_script(
            "newgame 4 4\nsetoption name Depth value 1\nsetoption name Iterative value false\n\
             go movetime 200\nsetoption name Method value alphabeta\nstats\n",
        );
        let stats = out.lines().find(|l| l.starts_with("stats ")).unwrap();
        assert!(stats.starts_with("stats moves 1 avgdepth 1.00 avgbranch 16.00"), "{stats}");
    }
}
