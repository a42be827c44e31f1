//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so the opponent and the invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, completes_line, winning_line};
