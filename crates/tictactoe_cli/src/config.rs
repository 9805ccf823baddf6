//! Configuration file and merged run settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_engine::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Contents of the TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for the computer's random moves; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Who controls O.
    #[serde(default)]
    mode: GameMode,
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            mode: GameMode::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists,
    /// else the defaults.
    ///
    /// Only an explicitly requested file must exist.
    #[instrument]
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Merges command-line flags over the file values.
    #[instrument(skip(self))]
    pub fn settings(
        &self,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
        two_player: bool,
    ) -> Settings {
        let mode = if two_player {
            GameMode::TwoPlayer
        } else {
            self.mode
        };
        Settings::new(
            mode,
            difficulty.unwrap_or(self.difficulty),
            seed.or(self.seed),
            Duration::from_millis(self.think_delay_ms),
        )
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Settings {
    /// Who controls O.
    mode: GameMode,
    /// Computer strength.
    difficulty: Difficulty,
    /// Seed for the computer's random moves.
    seed: Option<u64>,
    /// Pause before the computer answers.
    think_delay: Duration,
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
