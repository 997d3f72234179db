//! Translate command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use perkladar_core::Translator;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::DataArgs;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter, Translation};
use crate::progress::ProgressReporter;

/// Arguments for the translate command
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Text to translate (reads stdin when neither text nor input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from settings, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show how every token was resolved
    #[arg(short, long)]
    pub explain: bool,
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Document {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl Document {
    fn label(&self) -> String {
        match self {
            Document::Inline(_) => "<text>".to_string(),
            Document::File(path) => path.display().to_string(),
            Document::Stdin => "<stdin>".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Document::Inline(text) => Ok(text.clone()),
            Document::File(path) => FileReader::read_text(path),
            Document::Stdin => FileReader::read_stdin(),
        }
    }
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self, data: &DataArgs) -> Result<()> {
        log::info!("Starting translation");

        let settings = data.settings()?;
        let translator = data.sources(&settings).load_translator()?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&settings.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    settings.output.default_format
                ))
            })?,
        };

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, settings.output.pretty_json);

        let documents = self.documents()?;
        let mut progress = ProgressReporter::new(data.quiet || documents.len() < 2);
        progress.init_files(documents.len() as u64);

        for document in &documents {
            let label = document.label();
            let content = document.read()?;
            self.translate_document(&translator, &label, &content, formatter.as_mut())?;
            progress.file_completed(&label);
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Translated {} document(s)", documents.len());
        Ok(())
    }

    fn documents(&self) -> Result<Vec<Document>> {
        if !self.text.is_empty() {
            return Ok(vec![Document::Inline(self.text.join(" "))]);
        }
        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to translate", files.len());
            return Ok(files.into_iter().map(Document::File).collect());
        }
        Ok(vec![Document::Stdin])
    }

    fn translate_document(
        &self,
        translator: &Translator,
        label: &str,
        content: &str,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let lines: Vec<&str> = content.lines().collect();
        let outputs = translator.translate_batch(&lines);

        for (index, (input, output)) in lines.iter().zip(outputs).enumerate() {
            formatter.format_translation(&Translation {
                source: label.to_string(),
                line: index + 1,
                input: input.to_string(),
                output,
                tokens: self.explain.then(|| translator.annotate(input)),
            })?;
        }
        Ok(())
    }
}
