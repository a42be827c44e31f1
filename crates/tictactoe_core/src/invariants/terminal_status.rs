//! Terminal status: the recorded status matches what the board shows.

use super::Invariant;
use crate::rules::{check_winner, completes_line, is_full};
use crate::{GameState, GameStatus};

/// Invariant: the game is over iff a line is complete or the board is full,
/// and a recorded winner owns a complete line.
pub struct TerminalStatusInvariant;

impl Invariant<GameState> for TerminalStatusInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            GameStatus::Won(player) => completes_line(board, player),
            GameStatus::Draw => check_winner(board).is_none() && is_full(board),
        }
    }

    fn description() -> &'static str {
        "Game is over iff a line is complete or the board is full"
    }
}
