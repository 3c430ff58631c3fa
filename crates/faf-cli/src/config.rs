//! CLI configuration
//!
//! Optional JSON file passed with `--config`; flags on the command line
//! override whatever it sets.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default document scored when no file is given
pub const DEFAULT_FAF_FILE: &str = "project.faf";

/// How `faf score` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Main CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Document scored when `faf score` is run without a path
    pub default_file: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Fail with a non-zero exit when the score is below this
    pub min_score: Option<u8>,

    /// List missing slots in text output
    pub show_missing: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FAF_FILE),
            format: OutputFormat::Text,
            min_score: None,
            show_missing: true,
        }
    }
}

impl CliConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the minimum passing score
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = Some(min_score.min(100));
        self
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.min_score = config.min_score.map(|min| min.min(100));
        Ok(config)
    }
}
