//! Integration tests: full games between agents and end-to-end properties
//! of the public engine API.

use std::time::Duration;

use isola_core::{Board, Cell, CellSet, GameState, Player};
use isola_engine::eval::{custom_score, improved_score};
use isola_engine::{
    Agent, AgentConfig, Clock, Deadline, Heuristic, Method, Searcher, flood_fill, longest_path,
};

/// Play a game to completion and return the loser.
fn play_out(board: &mut Board, agents: &mut [Agent; 2], budget: Duration) -> Player {
    loop {
        let active = board.active_player();
        let legal = board.legal_moves(active);
        let mv = agents[active.index()].get_move(&*board, &legal, Clock::new(budget));
        if legal.is_empty() {
            assert!(mv.is_null());
            assert_eq!(board.utility(active), f64::NEG_INFINITY);
            assert_eq!(board.utility(!active), f64::INFINITY);
            return active;
        }
        assert!(legal.contains(&mv), "{mv} is not legal for {active} on\n{board}");
        board.apply_move(mv).unwrap();
    }
}

fn config(method: Method, heuristic: Heuristic, seed: u64) -> AgentConfig {
    AgentConfig {
        method,
        heuristic,
        seed: Some(seed),
        timeout: Duration::from_millis(5),
        ..AgentConfig::default()
    }
}

#[test]
fn self_play_games_finish_with_legal_moves() {
    for (i, (method, heuristic)) in [
        (Method::AlphaBeta, Heuristic::Custom),
        (Method::Minimax, Heuristic::Improved),
        (Method::AlphaBeta, Heuristic::ImprovedReachableSpace),
    ]
    .into_iter()
    .enumerate()
    {
        let seed = i as u64;
        let mut agents = [
            Agent::new(config(method, heuristic, seed)),
            Agent::new(config(method, Heuristic::Improved, seed + 100)),
        ];
        let mut board = Board::new(5, 5).unwrap();
        play_out(&mut board, &mut agents, Duration::from_millis(40));

        let moves = agents[0].stats().total_moves + agents[1].stats().total_moves;
        // every placed move plus the final NULL
        assert_eq!(moves, u64::from(board.move_count()) + 1);
    }
}

#[test]
fn every_heuristic_plays_a_legal_opening() {
    let board = Board::new(6, 6)
        .unwrap()
        .forecast_move(Cell::new(2, 2))
        .forecast_move(Cell::new(3, 4));
    let legal = board.legal_moves(Player::One);
    for heuristic in Heuristic::ALL {
        let mut agent = Agent::new(AgentConfig {
            heuristic,
            search_depth: 2,
            iterative: false,
            seed: Some(11),
            ..AgentConfig::default()
        });
        let mv = agent.get_move(&board, &legal, Clock::new(Duration::from_millis(500)));
        assert!(legal.contains(&mv), "{heuristic} chose {mv}");
    }
}

#[test]
fn minimax_and_alphabeta_agree_in_self_play_positions() {
    let mut board = Board::new(5, 5).unwrap();
    for mv in [Cell::new(0, 0), Cell::new(4, 4), Cell::new(2, 1), Cell::new(2, 3)] {
        board.apply_move(mv).unwrap();
    }
    let deadline = Deadline::unlimited();
    let h = Heuristic::Improved;
    for depth in 1..=4 {
        let (mm, _) = Searcher::new(&h, Player::One, &deadline)
            .search(Method::Minimax, &board, depth)
            .unwrap();
        let (ab, _) = Searcher::new(&h, Player::One, &deadline)
            .search(Method::AlphaBeta, &board, depth)
            .unwrap();
        assert_eq!(mm, ab, "depth {depth}");
    }
}

#[test]
fn custom_score_is_utility_once_decided() {
    // Two at (0,0) on 3x3 is stuck: (1,2) blocked, (2,1) holds One.
    let board = Board::with_blocked(
        3,
        3,
        &[Cell::new(1, 2)],
        [Some(Cell::new(2, 1)), Some(Cell::new(0, 0))],
        Player::Two,
    )
    .unwrap();
    let deadline = Deadline::unlimited();
    for player in Player::ALL {
        assert_eq!(
            custom_score(&board, player, &deadline).unwrap(),
            board.utility(player)
        );
    }
}

#[test]
fn improved_score_is_zero_when_symmetric() {
    let board = Board::with_blocked(
        5,
        5,
        &[],
        [Some(Cell::new(0, 0)), Some(Cell::new(4, 4))],
        Player::One,
    )
    .unwrap();
    let deadline = Deadline::unlimited();
    assert_eq!(improved_score(&board, Player::One, &deadline).unwrap(), 0.0);
    assert_eq!(improved_score(&board, Player::Two, &deadline).unwrap(), 0.0);
}

#[test]
fn traversals_on_a_live_board() {
    let mut board = Board::new(5, 5).unwrap();
    for mv in [Cell::new(2, 2), Cell::new(0, 0), Cell::new(4, 3)] {
        board.apply_move(mv).unwrap();
    }
    let start = board.player_location(Player::One).unwrap();
    let deadline = Deadline::unlimited();

    let mut blank: CellSet = board.blank_spaces();
    blank.insert(start);
    let original = blank.clone();
    flood_fill(start, &mut blank, &deadline).unwrap();
    assert!(!blank.contains(&start));
    for cell in &blank {
        assert!(original.contains(cell));
        assert!(cell.knight_neighbors().iter().all(|n| blank.contains(n) || !original.contains(n)));
    }

    let path = longest_path(start, Vec::new(), original.clone(), &deadline).unwrap();
    assert_eq!(path[0], start);
    for pair in path.windows(2) {
        assert!(pair[0].is_knight_jump(pair[1]));
    }
    let unique: CellSet = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len());
}
