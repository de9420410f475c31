//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Player, SolverConfig};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "arena.toml";

/// Which seat opens each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    #[default]
    Human,
    /// The solver moves first.
    Solver,
}

/// Configuration for a terminal match against the solver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ArenaConfig {
    /// Name shown for the human seat.
    #[serde(default = "default_human_name")]
    #[setters(into)]
    human_name: String,

    /// Which seat opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before the solver answers, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Solver settings; its mark decides the human's mark too.
    #[serde(default)]
    solver: SolverConfig,
}

fn default_human_name() -> String {
    "You".to_string()
}

fn default_think_delay_ms() -> u64 {
    600
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            first_player: FirstPlayer::default(),
            think_delay_ms: default_think_delay_ms(),
            solver: SolverConfig::default(),
        }
    }
}

impl ArenaConfig {
    /// The mark the human plays.
    pub fn human_mark(&self) -> Player {
        self.solver.mark().opponent()
    }

    /// The mark that opens each game.
    pub fn opening_mark(&self) -> Player {
        match self.first_player {
            FirstPlayer::Human => self.human_mark(),
            FirstPlayer::Solver => *self.solver.mark(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            human_mark = %config.human_mark(),
            first_player = %config.first_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads an explicit config file, or [`DEFAULT_CONFIG_PATH`] when it
    /// exists, or the defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
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
