//! Lookup command implementation

use anyhow::{bail, Result};
use clap::Args;
use perkladar_core::{Case, Number, Resolution, Translator};

use super::DataArgs;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Polish word to resolve
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Case to reconstruct
    #[arg(long, value_name = "CASE", default_value = "nominative")]
    pub case: Case,

    /// Number to reconstruct
    #[arg(long, value_name = "NUMBER", default_value = "singular")]
    pub number: Number,

    /// Print the full declension (singular and plural)
    #[arg(short, long)]
    pub all_cases: bool,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self, data: &DataArgs) -> Result<()> {
        let settings = data.settings()?;
        let translator = data.sources(&settings).load_translator()?;
        print!("{}", self.render(&translator)?);
        Ok(())
    }

    /// Report for the word, or an error when it cannot be resolved
    pub fn render(&self, translator: &Translator) -> Result<String> {
        let (entry, how) = match translator.resolve(&self.word) {
            Resolution::Exact(entry) => (entry, "exact match"),
            Resolution::Fuzzy(entry) => (entry, "prefix match"),
            Resolution::Unknown => bail!("'{}' is not in the lexicon", self.word),
        };

        let mut out = String::new();
        out.push_str(&format!("{} -> {} ({how})\n", self.word, entry.source_lemma()));

        for homonym in translator.lexicon().entries(entry.source_lemma()) {
            out.push_str(&format!("  {}", homonym.reconstructed_base()));
            if !homonym.grammatical_category().is_empty() {
                out.push_str(&format!("  [{}]", homonym.grammatical_category()));
            }
            if let Some(note) = homonym.context_note() {
                out.push_str(&format!("  {note}"));
            }
            out.push('\n');
        }

        let forms: Vec<(Number, Case)> = if self.all_cases {
            [Number::Singular, Number::Plural]
                .into_iter()
                .flat_map(|number| Case::ALL.into_iter().map(move |case| (number, case)))
                .collect()
        } else {
            vec![(self.number, self.case)]
        };

        for (number, case) in forms {
            let form = translator
                .reconstruct_word(&self.word, case, number)
                .unwrap_or_default();
            out.push_str(&format!("{case:<12} {number:<8} {form}\n"));
        }
        Ok(out)
    }
}
