//! TOML configuration shared by the binaries.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```toml
//! [search]
//! depth = 3
//! move_time_ms = 2000
//! order_moves = true
//!
//! [eval]
//! material = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0]
//! mobility = 0.2
//!
//! [matches]
//! games = 10
//! max_turns = 200
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::{
    eval::EvalWeights,
    time_control::{SearchLimits, DEFAULT_DEPTH},
};

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArimaaConfig {
    pub search: SearchSettings,
    pub eval: EvalWeights,
    pub matches: MatchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Plies searched per action.
    pub depth: u8,
    /// Time budget per action in milliseconds, None for depth-only search.
    pub move_time_ms: Option<u64>,
    /// Search likely captures first.
    pub order_moves: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            move_time_ms: None,
            order_moves: false,
        }
    }
}

impl SearchSettings {
    /// Fresh limits for one search.
    pub fn to_limits(&self) -> SearchLimits {
        let limits = match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        };
        limits.with_move_ordering(self.order_moves)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Games per match; engines swap colours every game.
    pub games: u32,
    /// Turn cap after which a game is scored as a draw.
    pub max_turns: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            games: 10,
            max_turns: 200,
        }
    }
}

impl ArimaaConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: ArimaaConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Invalid("search.depth must be at least 1".into()));
        }
        if self.matches.max_turns == 0 {
            return Err(ConfigError::Invalid("matches.max_turns must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
