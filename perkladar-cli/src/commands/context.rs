//! Context command implementation

use anyhow::{Context as _, Result};
use clap::Args;

use super::DataArgs;

/// Arguments for the context command
#[derive(Debug, Args)]
pub struct ContextArgs {
    /// Text whose dictionary entries should be collected
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Maximum number of dictionary hits (default: from settings, else 600)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl ContextArgs {
    /// Execute the context command
    pub fn execute(&self, data: &DataArgs) -> Result<()> {
        let settings = data.settings()?;
        let translator = data.sources(&settings).load_translator()?;

        let text = self.text.join(" ");
        let limit = self.limit.unwrap_or(settings.context.limit);
        let payload = translator.context_payload(&text, limit);
        log::info!(
            "{} dictionary hits for {} bytes of text",
            payload.dictionary_hits.len(),
            text.len()
        );

        let json = if self.compact || !settings.output.pretty_json {
            payload.to_json()
        } else {
            payload.to_json_pretty()
        }
        .context("Failed to serialize context payload")?;

        println!("{json}");
        Ok(())
    }
}
