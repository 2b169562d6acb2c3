//! Console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_rounds::OpeningPolicy;
use tracing::{debug, info, instrument};

/// Settings for the console presenter, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Who opens each round.
    #[serde(default)]
    opening: OpeningPolicy,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the list of free cells under the board.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            opening: OpeningPolicy::default(),
            log_filter: default_log_filter(),
            show_hints: default_show_hints(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(opening = %config.opening, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the opening policy when one is given.
    pub fn with_opening(mut self, opening: Option<OpeningPolicy>) -> Self {
        if let Some(opening) = opening {
            self.opening = opening;
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
