//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start with the AI opponent switched on.
    #[serde(default)]
    ai_enabled: bool,

    /// Mark the AI plays.
    #[serde(default = "default_ai_player")]
    ai_player: Player,

    /// Pause before the AI moves, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_ai_player() -> Player {
    Player::O
}

fn default_ai_delay_ms() -> u64 {
    400
}

fn default_log_file() -> PathBuf {
    PathBuf::from("oxo.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_enabled: false,
            ai_player: default_ai_player(),
            ai_delay_ms: default_ai_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            ai_enabled = config.ai_enabled,
            ai_player = %config.ai_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, ai: bool, ai_player: Option<Player>) -> Self {
        if ai {
            self.ai_enabled = true;
        }
        if let Some(player) = ai_player {
            self.ai_player = player;
        }
        self
    }

    /// Pause before the AI moves.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
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
