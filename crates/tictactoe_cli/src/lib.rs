//! Command-line driver for the tic-tac-toe engine.
//!
//! The binary is a thin caller: it loads [`TicTacToeConfig`], parses
//! [`Cli`] and hands off to the functions in [`commands`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;

pub mod commands;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TicTacToeConfig};
