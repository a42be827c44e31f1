//! Aggregate game state owned by the engine.

use super::action::Move;
use super::types::{Board, Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the last mover once the game is over.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Accepted moves in play order.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark (unchecked - use
    /// [`GameEngine::make_move`](crate::GameEngine::make_move) for validation).
    pub(crate) fn place(&mut self, pos: usize) -> Move {
        let mv = Move::new(self.current_player, pos);
        self.board.set(pos, Cell::from(mv.player));
        self.history.push(mv);
        mv
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
