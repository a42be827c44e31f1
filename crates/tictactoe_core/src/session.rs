//! Turn-taking driver between a caller and an automated opponent.
//!
//! A [`Session`] applies the caller's move, then, when the mode asks for it
//! and the game is still running, asks its opponent for a reply. Display
//! state (scores, highlights, status text) is derived by [`GameObserver`]s.

use crate::action::{MoveError, MoveOutcome};
use crate::engine::GameEngine;
use crate::opponent::OpponentStrategy;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the second seat.
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
pub enum Mode {
    /// Two people share the board.
    VsHuman,
    /// The session's opponent answers every move.
    #[default]
    VsComputer,
}

/// Receives state-transition notifications from a [`Session`].
pub trait GameObserver {
    /// Called after every accepted move, human or automated.
    fn on_move(&mut self, _engine: &GameEngine, _outcome: &MoveOutcome) {}

    /// Called after the game is reset.
    fn on_reset(&mut self, _engine: &GameEngine) {}
}

/// Win/draw tally across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Records a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears all counters.
    pub fn reset_scores(&mut self) {
        *self = Self::default();
    }
}

impl GameObserver for Scoreboard {
    fn on_move(&mut self, _engine: &GameEngine, outcome: &MoveOutcome) {
        self.record(outcome.status);
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

/// Outcome of one [`Session::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The caller's move.
    pub human: MoveOutcome,
    /// The opponent's reply, if one was made.
    pub reply: Option<MoveOutcome>,
}

/// A game plus the opponent and observers around it.
pub struct Session<S> {
    engine: GameEngine,
    opponent: S,
    mode: Mode,
    computer: Player,
    scoreboard: Scoreboard,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<S: OpponentStrategy> Session<S> {
    /// Creates a session. If the computer owns X in
    /// [`Mode::VsComputer`] it opens immediately.
    #[instrument(skip(opponent))]
    pub fn new(opponent: S, mode: Mode, computer: Player) -> Self {
        let mut session = Self {
            engine: GameEngine::new(),
            opponent,
            mode,
            computer,
            scoreboard: Scoreboard::default(),
            observers: Vec::new(),
        };
        session.computer_turn();
        session
    }

    /// Registers an observer for future transitions.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Applies the caller's move, then the opponent's reply when due.
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection, or [`MoveError::WrongPlayer`] naming
    /// the caller's mark when the computer is still on move. Nothing changes on error.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, position: usize) -> Result<Turn, MoveError> {
        if self.computer_to_move() {
            return Err(MoveError::WrongPlayer(self.computer.opponent()));
        }

        let human = self.engine.make_move(position)?;
        self.notify_move(&human);

        let reply = self.computer_turn();
        Ok(Turn { human, reply })
    }

    /// Resets the board, keeping scores.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.scoreboard.on_reset(&self.engine);
        for observer in &mut self.observers {
            observer.on_reset(&self.engine);
        }
        info!("New game started");
        self.computer_turn();
    }

    /// Switches mode; a change restarts the game.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.new_game();
        }
    }

    /// Clears the score tally.
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset_scores();
    }

    /// Returns the engine for read-only queries.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the running score tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    fn computer_to_move(&self) -> bool {
        self.mode == Mode::VsComputer
            && !self.engine.is_over()
            && self.engine.current_player() == self.computer
    }

    fn computer_turn(&mut self) -> Option<MoveOutcome> {
        if !self.computer_to_move() {
            return None;
        }

        let pos = self
            .opponent
            .select_move(self.engine.board(), self.computer)?;
        match self.engine.make_move(pos) {
            Ok(outcome) => {
                self.notify_move(&outcome);
                Some(outcome)
            }
            Err(e) => {
                debug!(error = %e, pos, "Opponent chose an illegal move");
                None
            }
        }
    }

    fn notify_move(&mut self, outcome: &MoveOutcome) {
        self.scoreboard.on_move(&self.engine, outcome);
        for observer in &mut self.observers {
            observer.on_move(&self.engine, outcome);
        }
    }
}

/// Plays one game between two strategies from a fresh board.
///
/// # Errors
///
/// Fails if either strategy picks an illegal cell.
#[instrument(skip(x, o))]
pub fn self_play<X, O>(x: &mut X, o: &mut O) -> Result<GameEngine, MoveError>
where
    X: OpponentStrategy + ?Sized,
    O: OpponentStrategy + ?Sized,
{
    let mut engine = GameEngine::new();
    while !engine.is_over() {
        let me = engine.current_player();
        let choice = match me {
            Player::X => x.select_move(engine.board(), me),
            Player::O => o.select_move(engine.board(), me),
        };
        let Some(pos) = choice else {
            break;
        };
        engine.make_move(pos)?;
    }
    debug!(status = %engine.status(), moves = engine.history().len(), "Self-play finished");
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Opponent, Policy};

    /// Always picks the lowest empty index.
    struct FirstEmpty;

    impl OpponentStrategy for FirstEmpty {
        fn select_move(&mut self, board: &Board, _me: Player) -> Option<usize> {
            board.empty_indices().first().copied()
        }
    }

    #[test]
    fn test_scoreboard_records_terminal_only() {
        let mut score = Scoreboard::default();
        score.record(GameStatus::InProgress);
        score.record(GameStatus::Won(Player::X));
        score.record(GameStatus::Draw);
        assert_eq!(
            score,
            Scoreboard {
                x_wins: 1,
                o_wins: 0,
                draws: 1
            }
        );
        assert_eq!(score.to_string(), "Score X:1 O:0 D:1");
    }

    #[test]
    fn test_vs_computer_replies() {
        let mut session = Session::new(FirstEmpty, Mode::VsComputer, Player::O);
        let turn = session.play(4).unwrap();
        assert_eq!(turn.reply.map(|r| r.mv.position), Some(0));
        assert_eq!(session.engine().current_player(), Player::X);
    }

    #[test]
    fn test_vs_human_never_replies() {
        let mut session = Session::new(FirstEmpty, Mode::VsHuman, Player::O);
        let turn = session.play(4).unwrap();
        assert_eq!(turn.reply, None);
        assert_eq!(session.engine().current_player(), Player::O);
    }

    #[test]
    fn test_computer_opens_as_x() {
        let session = Session::new(FirstEmpty, Mode::VsComputer, Player::X);
        assert_eq!(session.engine().history().len(), 1);
        assert_eq!(session.engine().current_player(), Player::O);
    }

    #[test]
    fn test_self_play_finishes() {
        let mut x = Opponent::seeded(Policy::Heuristic, 1);
        let mut o = Opponent::seeded(Policy::Random, 2);
        let engine = self_play(&mut x, &mut o).unwrap();
        assert!(engine.is_over());
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::VsComputer.to_string(), "vs-computer");
        assert_eq!("vs-human".parse::<Mode>().unwrap(), Mode::VsHuman);
    }
}
