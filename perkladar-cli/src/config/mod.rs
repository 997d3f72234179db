//! CLI settings file
//!
//! Optional `perkladar.toml` supplying defaults for the data options and
//! output preferences. Command-line flags always take precedence.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "perkladar.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Data sources
    #[serde(default)]
    pub data: DataConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Retrieval context configuration
    #[serde(default)]
    pub context: ContextConfig,
}

/// Default data sources
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Lexicon JSON file
    pub lexicon: Option<PathBuf>,

    /// Inflection table JSON file
    pub inflection: Option<PathBuf>,

    /// Engine configuration TOML file
    pub config: Option<PathBuf>,

    /// Reject lexicon categories missing from the inflection table
    pub strict: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Retrieval context configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Maximum number of dictionary hits
    pub limit: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            limit: perkladar_core::DEFAULT_CONTEXT_LIMIT,
        }
    }
}

impl CliConfig {
    /// Parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Explicit settings file, else `perkladar.toml` if present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = Path::new(DEFAULT_SETTINGS_FILE);
        if implicit.is_file() {
            log::info!("Using settings from {DEFAULT_SETTINGS_FILE}");
            return Self::load(implicit);
        }
        Ok(Self::default())
    }
}
