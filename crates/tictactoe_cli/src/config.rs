//! TOML configuration for the command-line driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Mode, Player, Policy};
use tracing::{debug, info, instrument};

/// Settings shared by every command. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicTacToeConfig {
    /// Whether `play` gets computer replies.
    #[serde(default)]
    mode: Mode,

    /// Mark the computer plays in `play`.
    #[serde(default = "default_computer_mark")]
    computer_mark: Player,

    /// Policy used when the computer plays X.
    #[serde(default)]
    x_policy: Policy,

    /// Policy used when the computer plays O.
    #[serde(default)]
    o_policy: Policy,

    /// Random seed; `None` draws from OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_computer_mark() -> Player {
    Player::O
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer_mark: default_computer_mark(),
            x_policy: Policy::default(),
            o_policy: Policy::default(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl TicTacToeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the configured policy for the given mark.
    pub fn policy_for(&self, mark: Player) -> Policy {
        match mark {
            Player::X => self.x_policy,
            Player::O => self.o_policy,
        }
    }

    /// Applies a seed override from the command line.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Applies a mode override from the command line.
    pub fn with_mode(mut self, mode: Option<Mode>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }

    /// Applies a computer-mark override from the command line.
    pub fn with_computer_mark(mut self, mark: Option<Player>) -> Self {
        if let Some(mark) = mark {
            self.computer_mark = mark;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
