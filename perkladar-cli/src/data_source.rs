//! Data source management for CLI
//!
//! Decides where the lexicon, inflection table and engine configuration
//! come from (flag, settings file or embedded default) and loads them into
//! a [`Translator`].

use anyhow::{Context, Result};
use perkladar_core::{sample, InflectionTable, Lexicon, Translator, TranslatorConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::commands::DataArgs;
use crate::config::CliConfig;
use crate::error::CliError;

/// Origin of one data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Compiled-in sample data or configuration
    Embedded,
    /// External file
    File(PathBuf),
}

impl DataSource {
    fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => DataSource::File(path.to_path_buf()),
            None => DataSource::Embedded,
        }
    }

    /// Get the display name for the data source
    pub fn display_name(&self) -> String {
        match self {
            DataSource::Embedded => "embedded".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }

    fn open(path: &Path) -> Result<BufReader<File>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match self {
            DataSource::Embedded => sample::lexicon().context("Failed to parse embedded lexicon"),
            DataSource::File(path) => Lexicon::from_json_reader(Self::open(path)?)
                .with_context(|| format!("Failed to load lexicon from {}", path.display())),
        }
    }

    pub fn load_inflection_table(&self) -> Result<InflectionTable> {
        match self {
            DataSource::Embedded => {
                sample::inflection_table().context("Failed to parse embedded inflection table")
            }
            DataSource::File(path) => InflectionTable::from_json_reader(Self::open(path)?)
                .with_context(|| {
                    format!("Failed to load inflection table from {}", path.display())
                }),
        }
    }

    pub fn load_config(&self) -> Result<TranslatorConfig> {
        match self {
            DataSource::Embedded => Ok(TranslatorConfig::embedded().clone()),
            DataSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                TranslatorConfig::from_file(path).map_err(|e| {
                    CliError::ConfigError(format!("{}: {e}", path.display())).into()
                })
            }
        }
    }
}

/// Resolved sources for one invocation
#[derive(Debug, Clone)]
pub struct DataSources {
    pub lexicon: DataSource,
    pub inflection: DataSource,
    pub config: DataSource,
    pub strict: bool,
}

impl DataSources {
    /// Command-line flags first, then the settings file
    pub fn resolve(args: &DataArgs, settings: &CliConfig) -> Self {
        let pick = |flag: &Option<PathBuf>, setting: &Option<PathBuf>| {
            DataSource::from_option(flag.as_deref().or(setting.as_deref()))
        };

        Self {
            lexicon: pick(&args.lexicon, &settings.data.lexicon),
            inflection: pick(&args.inflection, &settings.data.inflection),
            config: pick(&args.config, &settings.data.config),
            strict: args.strict || settings.data.strict,
        }
    }

    /// Load every source and build a translator
    pub fn load_translator(&self) -> Result<Translator> {
        log::info!(
            "Loading lexicon: {}, inflection: {}, config: {}",
            self.lexicon.display_name(),
            self.inflection.display_name(),
            self.config.display_name()
        );

        let translator = Translator::builder()
            .config(self.config.load_config()?)
            .lexicon(self.lexicon.load_lexicon()?)
            .inflection_table(self.inflection.load_inflection_table()?)
            .strict(self.strict)
            .build()
            .map_err(|e| CliError::DataError(e.to_string()))?;
        Ok(translator)
    }
}
