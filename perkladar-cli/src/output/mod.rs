//! Output formatting module

use anyhow::Result;
use perkladar_core::Annotated;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one translated line per input line
    Text,
    /// JSON array of translations with their sources
    Json,
    /// Markdown table of source and translation
    Markdown,
}

/// One translated input line
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    /// File path, `<stdin>` or `<text>`
    pub source: String,
    /// 1-based line number within the source
    pub line: usize,
    pub input: String,
    pub output: String,
    /// Per-token resolution, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Annotated>>,
}

impl Translation {
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single translated line
    fn format_translation(&mut self, translation: &Translation) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
