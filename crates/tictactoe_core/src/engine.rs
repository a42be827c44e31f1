//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] owns one [`GameState`] and is the only way to mutate it.
//! The state machine has two phases: in progress, and over (won or drawn).
//! Only [`GameEngine::reset`] leaves the over phase.

use super::action::{Move, MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::lines::Line;
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Replays a sequence of board indices from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; moves before it are discarded along
    /// with the engine.
    #[instrument]
    pub fn replay(positions: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &pos in positions {
            engine.make_move(pos)?;
        }
        Ok(engine)
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
    }

    /// Places the current player's mark at `pos` (0-8).
    ///
    /// After placing, a line completed by the mover wins; otherwise a full
    /// board draws; otherwise the turn passes. A winning move leaves
    /// [`current_player`](Self::current_player) on the winner.
    ///
    /// # Errors
    ///
    /// Rejects without touching state when the game is over, `pos` is out
    /// of bounds, or the cell is occupied (checked in that order).
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: usize) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(&self.state, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mv = self.state.place(pos);

        let status = if rules::completes_line(self.state.board(), mv.player) {
            GameStatus::Won(mv.player)
        } else if rules::is_full(self.state.board()) {
            GameStatus::Draw
        } else {
            self.state.advance_turn();
            GameStatus::InProgress
        };
        self.state.set_status(status);

        #[cfg(debug_assertions)]
        debug_assert_eq!(MoveContract::post(&before, &self.state), Ok(()));

        debug!(%mv, %status, "Move accepted");
        Ok(MoveOutcome { mv, status })
    }

    /// Places a mark at a named position.
    ///
    /// # Errors
    ///
    /// Same as [`make_move`](Self::make_move).
    pub fn make_move_at(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.make_move(pos.to_index())
    }

    /// Returns the first winning line (in fixed scan order) owned by the
    /// winner. `None` while in progress or after a draw.
    pub fn winning_line(&self) -> Option<Line> {
        self.winner()
            .and_then(|winner| rules::winning_line(self.state.board(), winner))
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move (the winner, once won).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status().is_over()
    }

    /// Returns the winner. `None` covers both "ongoing" and "draw";
    /// use [`is_over`](Self::is_over) to tell them apart.
    pub fn winner(&self) -> Option<Player> {
        self.state.status().winner()
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the indices still open for play; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board().empty_indices()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.is_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_move_toggles_player() {
        let mut engine = GameEngine::new();
        let outcome = engine.make_move(4).unwrap();
        assert_eq!(outcome.mv, Move::new(Player::X, 4));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(engine.board().get(4), Some(Cell::X));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_win_keeps_player_of_record() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4]).unwrap();
        let outcome = engine.make_move(2).unwrap();
        assert!(outcome.is_terminal());
        assert_eq!(engine.winner(), Some(Player::X));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        let before = engine.state().clone();
        assert_eq!(engine.make_move(8), Err(MoveError::GameOver));
        assert_eq!(engine.state(), &before);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_make_move_at_position() {
        let mut engine = GameEngine::new();
        engine.make_move_at(Position::Center).unwrap();
        assert_eq!(engine.board().get(4), Some(Cell::X));
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(GameEngine::replay(&[4, 4]).unwrap_err(), MoveError::Occupied(4));
    }
}
