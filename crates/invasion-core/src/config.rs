//! Configuration loading for the invasion simulator.
//!
//! Settings can be loaded from a TOML file; every field has a default, so an
//! empty file is a valid configuration. Command line flags take precedence
//! over the file.
//!
//! ```toml
//! [simulation]
//! aliens = 15
//! max_turns = 10000
//! seed = 42
//!
//! [output]
//! json = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::simulation::DEFAULT_MAX_TURNS;

/// Number of aliens spawned when nothing else is configured.
pub const DEFAULT_ALIENS: usize = 15;

/// Complete simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvasionConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl InvasionConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.max_turns == 0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.max_turns",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl FromStr for InvasionConfig {
    type Err = ConfigError;

    /// Parses and validates configuration from a TOML string.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: InvasionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Simulation run settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of aliens to spawn
    pub aliens: usize,
    /// Turn ceiling
    pub max_turns: u32,
    /// Seed for the random source; a random seed is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            aliens: DEFAULT_ALIENS,
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print a JSON snapshot of the run instead of the text map
    pub json: bool,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
