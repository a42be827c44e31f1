//! Command implementations. Each returns data; printing is left to `main`.

use crate::config::TicTacToeConfig;
use anyhow::{Context, Result, anyhow};
use tictactoe_core::{
    Board, Cell, GameEngine, Opponent, OpponentStrategy, Player, Policy, Position, Scoreboard,
    Session, self_play,
};
use tracing::{debug, info, instrument};

/// Parses a move list of indices or labels separated by commas or spaces.
///
/// Numbers are passed through unchecked so the engine reports
/// out-of-range indices itself.
pub fn parse_moves(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<usize>() {
            Ok(index) => Ok(index),
            Err(_) => Position::from_label_or_number(token)
                .map(Position::to_index)
                .ok_or_else(|| anyhow!("Unknown position: {:?}", token)),
        })
        .collect()
}

/// Applies every move to a fresh engine.
#[instrument]
pub fn replay(moves: &str) -> Result<GameEngine> {
    let positions = parse_moves(moves)?;
    let mut engine = GameEngine::new();
    for (i, pos) in positions.into_iter().enumerate() {
        engine
            .make_move(pos)
            .with_context(|| format!("Move {} (position {}) rejected", i + 1, pos))?;
    }
    Ok(engine)
}

/// Plays the caller's moves through a [`Session`], letting the computer
/// answer according to `config`. Stops early once the game is over.
#[instrument(skip(config))]
pub fn play(moves: &str, config: &TicTacToeConfig) -> Result<GameEngine> {
    let positions = parse_moves(moves)?;
    let computer = *config.computer_mark();
    let opponent = opponent(config.policy_for(computer), *config.seed());
    let mut session = Session::new(opponent, *config.mode(), computer);

    for (i, pos) in positions.into_iter().enumerate() {
        if session.engine().is_over() {
            debug!(remaining_from = i + 1, "Game over, ignoring remaining moves");
            break;
        }
        let turn = session
            .play(pos)
            .with_context(|| format!("Move {} (position {}) rejected", i + 1, pos))?;
        if let Some(reply) = turn.reply {
            info!(reply = %reply.mv, "Computer replied");
        }
    }
    Ok(session.engine().clone())
}

/// Asks an opponent for a move. The side defaults to whoever is due by
/// mark count.
#[instrument(skip(config))]
pub fn suggest(
    board: &Board,
    mark: Option<Player>,
    policy: Option<Policy>,
    config: &TicTacToeConfig,
) -> Result<usize> {
    let mark = mark.unwrap_or_else(|| side_to_move(board));
    let policy = policy.unwrap_or_else(|| config.policy_for(mark));
    opponent(policy, *config.seed())
        .select_move(board, mark)
        .ok_or_else(|| anyhow!("No empty cell left on the board"))
}

/// Plays `games` games between two policies and tallies the results.
#[instrument(skip(config))]
pub fn simulate(
    games: u32,
    x_policy: Policy,
    o_policy: Policy,
    config: &TicTacToeConfig,
) -> Result<Scoreboard> {
    let seed = *config.seed();
    let mut x = opponent(x_policy, seed.map(|s| side_seed(s, Player::X)));
    let mut o = opponent(o_policy, seed.map(|s| side_seed(s, Player::O)));

    let mut scoreboard = Scoreboard::default();
    for _ in 0..games {
        let engine = self_play(&mut x, &mut o)?;
        scoreboard.record(engine.status());
    }
    info!(%scoreboard, games, "Simulation finished");
    Ok(scoreboard)
}

/// Renders board, status and winning line for printing.
pub fn summary(engine: &GameEngine) -> String {
    let mut out = format!("{}\n\n", engine.board());
    if engine.is_over() {
        out.push_str(&engine.status().to_string());
    } else {
        out.push_str(&format!("Turn: {}", engine.current_player()));
    }
    if let Some(line) = engine.winning_line() {
        out.push_str(&format!("\nWinning line: {:?}", line));
    }
    out
}

fn side_to_move(board: &Board) -> Player {
    if board.count(Cell::X) > board.count(Cell::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Gives each side its own stream from one seed.
fn side_seed(seed: u64, mark: Player) -> u64 {
    match mark {
        Player::X => seed,
        Player::O => seed.wrapping_add(0x9E37_79B9_7F4A_7C15),
    }
}

fn opponent(policy: Policy, seed: Option<u64>) -> impl OpponentStrategy {
    match seed {
        Some(seed) => Opponent::seeded(policy, seed),
        None => Opponent::from_entropy(policy),
    }
}
