//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, Mode, Player, Policy};

/// Tic-tac-toe engine driver
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Replay, play and simulate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a move list with no automated opponent
    Replay {
        /// Board indices (0-8) or position labels, separated by commas or spaces
        moves: String,
    },

    /// Play your moves against the computer
    Play {
        /// Your moves, in order; the computer answers each one
        moves: String,

        /// Override the configured mode
        #[arg(long)]
        mode: Option<Mode>,

        /// Mark the computer plays
        #[arg(long)]
        computer: Option<Player>,

        /// Random seed for the computer
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Ask the opponent for a move on a board
    Suggest {
        /// Nine cells of X, O or '.', row-major (e.g. "XX.O.....")
        #[arg(long)]
        board: Board,

        /// Side to move; inferred from mark counts when omitted
        #[arg(long)]
        mark: Option<Player>,

        /// Override the configured policy
        #[arg(long)]
        policy: Option<Policy>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two policies against each other
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Policy for X (overrides config)
        #[arg(long)]
        x_policy: Option<Policy>,

        /// Policy for O (overrides config)
        #[arg(long)]
        o_policy: Option<Policy>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}
