//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move is accepted; postconditions confirm
//! the engine kept its invariants after applying it.

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::state::GameState;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is over.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a cell.
pub struct InBounds;

impl InBounds {
    /// Rejects indices outside 0-8.
    pub fn check(pos: usize) -> Result<(), MoveError> {
        if pos >= crate::Board::SIZE {
            Err(MoveError::OutOfBounds(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied cells.
    pub fn check(state: &GameState, pos: usize) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::Occupied(pos))
        }
    }
}

/// Composite precondition, checked in order: not over, in bounds, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for placing at `pos`.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, pos: usize) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        InBounds::check(pos)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(())
    }
}

/// Contract for placing a mark at a board index.
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, pos: &usize) -> Result<(), MoveError> {
        LegalMove::check(state, *pos)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Accepted move was not recorded".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
