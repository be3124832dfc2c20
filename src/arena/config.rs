//! Arena configuration.
//!
//! Defaults live in code; a TOML file may override any subset:
//!
//! ```toml
//! max_moves = 2000
//! max_invalid_moves = 5
//! bot_timeout_ms = 2500
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Limits and seeds for arena games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Submissions allowed per game before it is abandoned undecided.
    pub max_moves: usize,

    /// Consecutive illegal submissions after which a side forfeits.
    pub max_invalid_moves: usize,

    /// Time a bot process gets to answer one request.
    pub bot_timeout_ms: u64,

    /// Seed for random move sources (forked per game).
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_moves: 1000,
            max_invalid_moves: 10,
            bot_timeout_ms: 10_000,
            seed: 0,
        }
    }
}

impl ArenaConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading arena config");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file {}: {}", path.display(), e)))?;

        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "Arena config loaded");
        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that would end every game before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_moves == 0 {
            return Err(ConfigError::new("max_moves must be at least 1"));
        }
        if self.max_invalid_moves == 0 {
            return Err(ConfigError::new("max_invalid_moves must be at least 1"));
        }
        Ok(())
    }

    /// Set the per-game submission limit.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the consecutive illegal submission limit.
    pub fn with_max_invalid_moves(mut self, max: usize) -> Self {
        self.max_invalid_moves = max;
        self
    }

    /// Set the bot answer timeout.
    pub fn with_bot_timeout_ms(mut self, millis: u64) -> Self {
        self.bot_timeout_ms = millis;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The bot timeout as a `Duration`.
    #[must_use]
    pub fn bot_timeout(&self) -> Duration {
        Duration::from_millis(self.bot_timeout_ms)
    }
}
