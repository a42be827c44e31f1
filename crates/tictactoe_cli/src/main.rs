//! tictactoe - replay, play and simulate games from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::commands;
use tictactoe_cli::{Cli, Command, TicTacToeConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TicTacToeConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(config.log_level().as_str());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Replay { moves } => {
            let engine = commands::replay(&moves)?;
            println!("{}", commands::summary(&engine));
        }
        Command::Play {
            moves,
            mode,
            computer,
            seed,
        } => {
            let config = config
                .with_mode(mode)
                .with_computer_mark(computer)
                .with_seed(seed);
            info!(mode = %config.mode(), computer = %config.computer_mark(), "Starting game");
            let engine = commands::play(&moves, &config)?;
            println!("{}", commands::summary(&engine));
        }
        Command::Suggest {
            board,
            mark,
            policy,
            seed,
        } => {
            let config = config.with_seed(seed);
            let pos = commands::suggest(&board, mark, policy, &config)?;
            println!("{}", pos);
        }
        Command::Simulate {
            games,
            x_policy,
            o_policy,
            seed,
        } => {
            let config = config.with_seed(seed);
            let x_policy = x_policy.unwrap_or(*config.x_policy());
            let o_policy = o_policy.unwrap_or(*config.o_policy());
            let scoreboard = commands::simulate(games, x_policy, o_policy, &config)?;
            println!("{} ({} vs {}, {} games)", scoreboard, x_policy, o_policy, games);
        }
    }

    Ok(())
}
