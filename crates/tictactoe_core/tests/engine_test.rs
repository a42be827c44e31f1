//! Tests for the game engine lifecycle and terminal detection.

use tictactoe_core::{Cell, GameEngine, GameStatus, MoveError, Player};

#[test]
fn test_x_wins_top_row() {
    let mut engine = GameEngine::new();
    for pos in [0, 3, 1, 4] {
        engine.make_move(pos).expect("Valid move");
        assert!(!engine.is_over());
    }

    let outcome = engine.make_move(2).expect("Winning move");

    assert_eq!(outcome.status, GameStatus::Won(Player::X));
    assert!(engine.is_over());
    assert_eq!(engine.winner(), Some(Player::X));
    assert_eq!(engine.winning_line(), Some([0, 1, 2]));
}

#[test]
fn test_full_board_draw() {
    // X:0,1,5,6,8  O:2,3,4,7
    let engine = GameEngine::replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("Valid replay");

    assert!(engine.is_over());
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.winning_line(), None);
    assert!(engine.board().is_full());
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    // X completes the 0-4-8 diagonal with the ninth mark.
    let engine = GameEngine::replay(&[0, 1, 2, 5, 3, 6, 4, 7, 8]).expect("Valid replay");

    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(engine.winning_line(), Some([0, 4, 8]));
}

#[test]
fn test_o_can_win() {
    let engine = GameEngine::replay(&[0, 4, 1, 2, 8, 6]).expect("Valid replay");

    assert_eq!(engine.winner(), Some(Player::O));
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.winning_line(), Some([2, 4, 6]));
}

#[test]
fn test_winning_line_none_while_in_progress() {
    let engine = GameEngine::replay(&[0, 3, 1]).expect("Valid replay");
    assert!(!engine.is_over());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut engine = GameEngine::replay(&[4, 0]).expect("Valid replay");
    let before = engine.state().clone();

    assert_eq!(engine.make_move(4), Err(MoveError::Occupied(4)));
    assert_eq!(engine.make_move(0), Err(MoveError::Occupied(0)));
    assert_eq!(engine.make_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(engine.make_move(usize::MAX), Err(MoveError::OutOfBounds(usize::MAX)));

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");
    assert!(engine.is_over());

    engine.reset();

    assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(engine.current_player(), Player::X);
    assert!(!engine.is_over());
    assert_eq!(engine.winner(), None);
    assert!(engine.history().is_empty());

    // Idempotent.
    engine.reset();
    assert_eq!(engine.state(), GameEngine::new().state());
}

#[test]
fn test_history_records_movers() {
    let engine = GameEngine::replay(&[4, 0, 8]).expect("Valid replay");
    let movers: Vec<_> = engine.history().iter().map(|m| (m.player, m.position)).collect();
    assert_eq!(movers, vec![(Player::X, 4), (Player::O, 0), (Player::X, 8)]);
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    assert_eq!(
        MoveError::OutOfBounds(12).to_string(),
        "Position 12 is out of bounds (must be 0-8)"
    );
    assert_eq!(MoveError::Occupied(3).to_string(), "Square 3 is already occupied");
}

#[test]
fn test_state_serializes() {
    let engine = GameEngine::replay(&[4, 0]).expect("Valid replay");
    let json = serde_json::to_string(engine.state()).expect("Serialize");
    let back: tictactoe_core::GameState = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(&back, engine.state());
}
