//! History consistency: the move log explains the board and the turn.

use super::Invariant;
use crate::{Cell, GameState, Player};

/// Invariant: history alternates X, O, X, ..., every logged move still
/// holds its mover's mark, no other cell is marked, and `current_player`
/// is the next mover (or the last mover once the game is over).
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let board = state.board();

        let alternates = history.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mv.player == expected
        });
        if !alternates {
            return false;
        }

        let marks_match = history
            .iter()
            .all(|mv| board.get(mv.position) == Some(Cell::from(mv.player)));
        let filled = board.cells().len() - board.count(Cell::Empty);
        if !marks_match || filled != history.len() {
            return false;
        }

        let expected = match (state.status().is_over(), history.last()) {
            (true, Some(last)) => last.player,
            (_, Some(last)) => last.player.opponent(),
            (_, None) => Player::X,
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "History alternates from X and accounts for every mark"
    }
}
