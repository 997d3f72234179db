//! CLI command implementations

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod context;
pub mod generate_config;
pub mod list;
pub mod lookup;
pub mod translate;
pub mod validate;

use crate::config::CliConfig;
use crate::data_source::DataSources;

/// Polish to Proto-Slavic morphological reconstruction
#[derive(Debug, Parser)]
#[command(name = "perkladar", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Data and logging options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Lexicon JSON file (default: embedded sample lexicon)
    #[arg(long, value_name = "FILE", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Inflection table JSON file (default: embedded sample table)
    #[arg(long, value_name = "FILE", global = true)]
    pub inflection: Option<PathBuf>,

    /// Engine configuration TOML file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Fail when a lexicon category has no inflection pattern
    #[arg(long, global = true)]
    pub strict: bool,

    /// CLI settings file (default: ./perkladar.toml if present)
    #[arg(long, value_name = "FILE", global = true, env = "PERKLADAR_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Suppress progress output and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl DataArgs {
    /// Settings file contents, or defaults
    pub fn settings(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.settings.as_deref())
    }

    /// Resolve data sources against `settings`
    pub fn sources(&self, settings: &CliConfig) -> DataSources {
        DataSources::resolve(self, settings)
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate Polish text into reconstructed Proto-Slavic
    Translate(translate::TranslateArgs),

    /// Resolve and decline a single word
    Lookup(lookup::LookupArgs),

    /// Build the dictionary context payload for a text
    Context(context::ContextArgs),

    /// Validate lexicon, inflection and configuration files
    Validate(validate::ValidateArgs),

    /// Generate an engine configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List grammatical cases and numbers
    Cases,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, data: &DataArgs) -> Result<()> {
        match self {
            Commands::Translate(args) => args.execute(data),
            Commands::Lookup(args) => args.execute(data),
            Commands::Context(args) => args.execute(data),
            Commands::Validate(args) => args.execute(data),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}
