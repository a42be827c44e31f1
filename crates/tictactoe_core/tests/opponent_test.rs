//! Tests for opponent move selection.

use tictactoe_core::{
    Board, Cell, GameEngine, Opponent, OpponentStrategy, Player, Policy, self_play,
};

fn board(s: &str) -> Board {
    s.parse().expect("Valid board")
}

#[test]
fn test_heuristic_completes_own_line() {
    let b = Board::from_cells([
        Cell::X,
        Cell::X,
        Cell::Empty,
        Cell::O,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
    ]);

    for seed in 0..32 {
        let mut bot = Opponent::seeded(Policy::Heuristic, seed);
        assert_eq!(bot.select_move(&b, Player::X), Some(2));
    }
}

#[test]
fn test_heuristic_blocks_opponent() {
    let b = board("OO..X....");

    for seed in 0..32 {
        let mut bot = Opponent::seeded(Policy::Heuristic, seed);
        assert_eq!(bot.select_move(&b, Player::X), Some(2));
    }
}

#[test]
fn test_win_block_blocks_opponent() {
    let b = board("OO..X....");
    let mut bot = Opponent::seeded(Policy::WinBlock, 5);
    assert_eq!(bot.select_move(&b, Player::X), Some(2));
}

#[test]
fn test_random_ignores_threats() {
    // O threatens 2, but a random bot should not always find it.
    let b = board("OO..X....");
    let picks: Vec<_> = (0..64)
        .map(|seed| Opponent::seeded(Policy::Random, seed).select_move(&b, Player::X))
        .collect();

    assert!(picks.iter().all(|p| matches!(p, Some(2 | 3 | 5 | 6 | 7 | 8))));
    assert!(picks.iter().any(|p| *p != Some(2)));
}

#[test]
fn test_heuristic_corner_choice_is_uniform_enough() {
    let b = board("....X....");
    let mut seen = [false; 9];
    for seed in 0..64 {
        let pos = Opponent::seeded(Policy::Heuristic, seed)
            .select_move(&b, Player::O)
            .expect("A move exists");
        seen[pos] = true;
    }
    assert!(seen[0] && seen[2] && seen[6] && seen[8]);
    assert!(!seen[1] && !seen[3] && !seen[5] && !seen[7]);
}

#[test]
fn test_choices_are_always_legal_for_engine() {
    let mut engine = GameEngine::new();
    let mut bot = Opponent::seeded(Policy::Heuristic, 99);
    while !engine.is_over() {
        let me = engine.current_player();
        let pos = bot.select_move(engine.board(), me).expect("A move exists");
        engine.make_move(pos).expect("Opponent picks legal cells");
    }
}

#[test]
fn test_self_play_terminates() {
    for seed in 0..50 {
        let mut random = Opponent::seeded(Policy::Random, seed);
        let mut heuristic = Opponent::seeded(Policy::Heuristic, seed + 1000);
        let engine = self_play(&mut random, &mut heuristic).expect("Legal play");
        assert!(engine.is_over());
        assert!(engine.history().len() >= 5);
    }
}

#[test]
fn test_boxed_strategy_dispatch() {
    let mut bot: Box<dyn OpponentStrategy> = Box::new(Opponent::seeded(Policy::Heuristic, 0));
    assert_eq!(bot.select_move(&board("XX.O....."), Player::X), Some(2));
}
