//! Configuration loading
//!
//! Settings come from, in order of precedence:
//! 1. An explicit `--config <path>` file
//! 2. `./jung.toml` in the current directory
//! 3. Built-in defaults
//!
//! Every field is optional in the file; missing ones fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "jung.toml";

/// Default location of the task file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/jung.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JungConfig {
    /// Path to the task file
    pub data_file: PathBuf,
    /// Longest accepted command line, in characters
    pub max_input_length: usize,
    /// Longest accepted task description, in characters
    pub max_description_length: usize,
    /// Validation applied to event start and end times
    pub event: EventPolicy,
}

impl Default for JungConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_input_length: 500,
            max_description_length: 200,
            event: EventPolicy::default(),
        }
    }
}

/// Ordering rules for event start/end times
///
/// Both checks are off by default, in which case any pair of valid
/// date-times is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPolicy {
    /// Reject events whose start is not strictly before their end
    pub require_start_before_end: bool,
    /// Reject events shorter than this many minutes (0 disables)
    pub min_duration_minutes: u32,
}

impl JungConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: JungConfig =
            toml::from_str(content).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Resolve the configuration using the discovery order above
    ///
    /// # Arguments
    /// * `explicit` - Path given on the command line, if any
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from {}", path.display());
            return Self::from_toml_file(path);
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            info!("Loading configuration from {}", local.display());
            return Self::from_toml_file(&local);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}
