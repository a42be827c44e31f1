//! Mark balance: X moves first, so X leads O by zero or one mark.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: `#X - #O` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Cell::X);
        let o = state.board().count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}
