/*!
 * Application configuration.
 *
 * Loads, validates and saves the JSON settings file, and turns it into the
 * separator policy used by the verifier.
 */

use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::PolicyError;
use crate::verifier::policy::{LocalizationMode, PolicySide, SeparatorPolicy, SeparatorSpec};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Separators of the source language
    #[serde(default = "default_side")]
    pub source: PolicySide,

    /// Separators of the target language
    #[serde(default = "default_side")]
    pub target: PolicySide,

    /// Whether numbers may or must be reformatted for the target language
    #[serde(default)]
    pub localization: LocalizationMode,

    /// Recognise Arabic-Indic and Devanagari digits
    #[serde(default)]
    pub alternate_script_digits: bool,

    /// Batch processing settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Batch processing configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchConfig {
    /// Maximum number of segment pairs verified at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_side() -> PolicySide {
    // Comma-grouped thousands, period decimals
    PolicySide::new(SeparatorSpec::new(true, false), SeparatorSpec::new(false, true))
}

fn default_max_concurrent() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.batch.max_concurrent == 0 {
            return Err(anyhow!("batch.max_concurrent must be at least 1"));
        }

        self.to_policy()
            .context("Invalid separator configuration")?;

        Ok(())
    }

    /// Build the immutable separator policy described by this configuration
    pub fn to_policy(&self) -> Result<SeparatorPolicy, PolicyError> {
        SeparatorPolicy::new(
            self.source.clone(),
            self.target.clone(),
            self.localization,
            self.alternate_script_digits,
        )
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_side(),
            target: default_side(),
            localization: LocalizationMode::default(),
            alternate_script_digits: false,
            batch: BatchConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
