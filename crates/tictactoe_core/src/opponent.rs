//! Automated opponents.
//!
//! An [`OpponentStrategy`] reads a board snapshot and picks an empty cell.
//! It never mutates game state; the caller applies the chosen index through
//! [`GameEngine::make_move`](crate::GameEngine::make_move).

use crate::lines::{CENTER, CORNERS, LINES};
use crate::types::{Board, Cell, Player};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Anything that can choose a move for `me` on a board.
pub trait OpponentStrategy {
    /// Picks an empty cell index (0-8).
    ///
    /// Returns `None` only when the board has no empty cell; callers are
    /// expected to check [`GameEngine::is_over`](crate::GameEngine::is_over)
    /// first.
    fn select_move(&mut self, board: &Board, me: Player) -> Option<usize>;
}

impl<S: OpponentStrategy + ?Sized> OpponentStrategy for Box<S> {
    fn select_move(&mut self, board: &Board, me: Player) -> Option<usize> {
        (**self).select_move(board, me)
    }
}

/// Move-selection policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Policy {
    /// Win, block, center, random corner, random empty.
    #[default]
    Heuristic,
    /// Win, block, random empty.
    WinBlock,
    /// Uniform over empty cells.
    Random,
}

/// Opponent driven by a [`Policy`] and an injected random source.
#[derive(Debug, Clone)]
pub struct Opponent<R> {
    policy: Policy,
    rng: R,
}

impl<R: Rng> Opponent<R> {
    /// Creates an opponent using the given random source.
    pub fn new(policy: Policy, rng: R) -> Self {
        Self { policy, rng }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Opponent<ChaCha8Rng> {
    /// Creates a deterministic opponent: same seed, same choices.
    pub fn seeded(policy: Policy, seed: u64) -> Self {
        Self::new(policy, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from OS entropy.
    pub fn from_entropy(policy: Policy) -> Self {
        Self::new(policy, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> OpponentStrategy for Opponent<R> {
    #[instrument(skip(self, board), fields(policy = %self.policy))]
    fn select_move(&mut self, board: &Board, me: Player) -> Option<usize> {
        let choice = match self.policy {
            Policy::Heuristic => finishing_move(board, me)
                .or_else(|| finishing_move(board, me.opponent()))
                .or_else(|| board.is_empty(CENTER).then_some(CENTER))
                .or_else(|| {
                    let corners: Vec<usize> = CORNERS
                        .iter()
                        .copied()
                        .filter(|&i| board.is_empty(i))
                        .collect();
                    corners.choose(&mut self.rng).copied()
                })
                .or_else(|| random_empty(board, &mut self.rng)),
            Policy::WinBlock => finishing_move(board, me)
                .or_else(|| finishing_move(board, me.opponent()))
                .or_else(|| random_empty(board, &mut self.rng)),
            Policy::Random => random_empty(board, &mut self.rng),
        };

        debug!(?choice, "Opponent chose move");
        choice
    }
}

/// Finds the empty cell that would complete a line for `player`.
///
/// Scans lines in fixed order and returns the empty index of the first line
/// holding two of `player`'s marks and one empty cell.
pub fn finishing_move(board: &Board, player: Player) -> Option<usize> {
    let mark = Cell::from(player);
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == Some(mark)).count();
        let mut empty = line.iter().copied().filter(|&i| board.is_empty(i));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

fn random_empty<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_indices().choose(rng).copied()
}
