//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::fmt::Write as _;

use super::DataArgs;
use crate::data_source::DataSources;
use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Show every skipped record, not only the first ten
    #[arg(long)]
    pub all: bool,
}

const SHOWN_DIAGNOSTICS: usize = 10;

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, data: &DataArgs) -> Result<()> {
        let settings = data.settings()?;
        let sources = data.sources(&settings);
        let (report, problems) = self.check(&sources);
        print!("{report}");

        if problems > 0 {
            return Err(CliError::DataError(format!(
                "validation failed with {problems} problem(s)"
            ))
            .into());
        }
        Ok(())
    }

    /// Human-readable report plus the number of failures
    ///
    /// Load errors always fail. Skipped records and category mismatches
    /// fail only in strict mode.
    pub fn check(&self, sources: &DataSources) -> (String, usize) {
        let mut report = String::new();
        let mut problems = 0;

        let config = match sources.config.load_config() {
            Ok(config) => {
                let _ = writeln!(
                    report,
                    "✓ Configuration ({}): {} [{}]",
                    sources.config.display_name(),
                    config.metadata.name,
                    config.metadata.code
                );
                Some(config)
            }
            Err(e) => {
                let _ = writeln!(
                    report,
                    "✗ Configuration ({}): {e:#}",
                    sources.config.display_name()
                );
                problems += 1;
                None
            }
        };

        let lexicon = match sources.lexicon.load_lexicon() {
            Ok(lexicon) => {
                let _ = writeln!(
                    report,
                    "✓ Lexicon ({}): {} entries under {} lemmas, {} skipped",
                    sources.lexicon.display_name(),
                    lexicon.len(),
                    lexicon.lemma_count(),
                    lexicon.diagnostics().len()
                );
                self.list(&mut report, lexicon.diagnostics());
                if sources.strict {
                    problems += lexicon.diagnostics().len();
                }
                Some(lexicon)
            }
            Err(e) => {
                let _ = writeln!(report, "✗ Lexicon ({}): {e:#}", sources.lexicon.display_name());
                problems += 1;
                None
            }
        };

        let table = match sources.inflection.load_inflection_table() {
            Ok(table) => {
                let _ = writeln!(
                    report,
                    "✓ Inflection table ({}): {} categories, {} problems",
                    sources.inflection.display_name(),
                    table.len(),
                    table.diagnostics().len()
                );
                self.list(&mut report, table.diagnostics());
                if sources.strict {
                    problems += table.diagnostics().len();
                }
                Some(table)
            }
            Err(e) => {
                let _ = writeln!(
                    report,
                    "✗ Inflection table ({}): {e:#}",
                    sources.inflection.display_name()
                );
                problems += 1;
                None
            }
        };

        if let (Some(lexicon), Some(table)) = (&lexicon, &table) {
            let missing = table.missing_categories(lexicon);
            if missing.is_empty() {
                let _ = writeln!(report, "✓ Every lexicon category has an inflection pattern");
            } else {
                let _ = writeln!(
                    report,
                    "{} {} categor{} without inflection pattern",
                    if sources.strict { "✗" } else { "!" },
                    missing.len(),
                    if missing.len() == 1 { "y" } else { "ies" }
                );
                for mismatch in &missing {
                    let _ = writeln!(
                        report,
                        "    '{}' (first used by '{}')",
                        mismatch.category, mismatch.lemma
                    );
                }
                if sources.strict {
                    problems += missing.len();
                }
            }
        }

        if config.is_some() && problems == 0 {
            let _ = writeln!(report, "✓ Data is valid!");
        }
        (report, problems)
    }

    fn list<E: std::fmt::Display>(&self, report: &mut String, diagnostics: &[E]) {
        let shown = if self.all {
            diagnostics.len()
        } else {
            SHOWN_DIAGNOSTICS.min(diagnostics.len())
        };
        for diagnostic in &diagnostics[..shown] {
            let _ = writeln!(report, "    {diagnostic}");
        }
        if shown < diagnostics.len() {
            let _ = writeln!(report, "    ... and {} more", diagnostics.len() - shown);
        }
    }
}
