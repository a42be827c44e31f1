//! Tic-tac-toe rule engine and automated opponents.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns a 3x3 [`Board`], enforces turn order and
//!   detects wins and draws.
//! - **Opponent**: [`Opponent`] picks moves for a side using a [`Policy`]
//!   and an injected random source.
//! - **Session**: [`Session`] drives human-vs-computer turn taking and
//!   notifies [`GameObserver`]s such as the [`Scoreboard`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, Opponent, OpponentStrategy, Player, Policy};
//!
//! let mut engine = GameEngine::new();
//! engine.make_move(0).unwrap();
//!
//! let mut bot = Opponent::seeded(Policy::Heuristic, 42);
//! let reply = bot.select_move(engine.board(), Player::O).unwrap();
//! assert_eq!(reply, 4);
//! engine.make_move(reply).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod lines;
mod opponent;
mod position;
mod session;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use engine::GameEngine;
pub use lines::{CENTER, CORNERS, LINES, Line};
pub use opponent::{Opponent, OpponentStrategy, Policy, finishing_move};
pub use position::Position;
pub use session::{GameObserver, Mode, Scoreboard, Session, Turn, self_play};
pub use state::GameState;
pub use types::{Board, BoardParseError, Cell, GameStatus, Player};
