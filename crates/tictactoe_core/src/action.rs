//! Moves as first-class domain values.
//!
//! An accepted move is recorded in the engine's history; a rejected one is
//! reported as a [`MoveError`] and leaves the game untouched.

use super::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8) where the mark was placed.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board index of this move.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mv: Move,
    /// Game status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }
}

/// Reasons a move is rejected.
///
/// These are ordinary, expected outcomes of caller input rather than faults.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The move was attempted out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A postcondition check failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
