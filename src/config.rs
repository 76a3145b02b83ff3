//! Hub configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::Difficulty;

/// Tunable delays, budgets and starting tiers.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct HubConfig {
    /// Timer tick period in milliseconds.
    tick_interval_ms: u64,

    /// Delay before a matching memory pair settles.
    match_delay_ms: u64,

    /// Delay before a mismatched memory pair turns back over.
    mismatch_delay_ms: u64,

    /// How long a memory hint keeps the cards face up.
    peek_duration_ms: u64,

    /// How long a notification stays on screen.
    notification_ttl_ms: u64,

    /// Sudoku hints per puzzle.
    logic_hints: u32,

    /// Seed for puzzle selection and shuffling. Entropy when unset.
    seed: Option<u64>,

    /// Starting sudoku tier.
    logic_difficulty: Difficulty,

    /// Starting memory tier.
    cards_difficulty: Difficulty,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
            peek_duration_ms: 3000,
            notification_ttl_ms: 4000,
            logic_hints: 3,
            seed: None,
            logic_difficulty: Difficulty::Easy,
            cards_difficulty: Difficulty::Easy,
        }
    }
}

impl HubConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Timer tick period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Matching pair settle delay.
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Mismatched pair settle delay.
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Memory hint duration.
    pub fn peek_duration(&self) -> Duration {
        Duration::from_millis(self.peek_duration_ms)
    }

    /// Notification lifetime.
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
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
