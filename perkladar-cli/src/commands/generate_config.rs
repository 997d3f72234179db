//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Language code for the new configuration
    #[arg(short = 'l', long = "code", value_name = "CODE", default_value = "sla-x-custom")]
    pub language_code: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating engine configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust markers, prepositions and overrides");
        println!("2. Validate your configuration:");
        println!("   perkladar validate --config {}", self.output.display());
        println!("3. Use it for translation:");
        println!(
            "   perkladar translate -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Engine configuration for {code}

[metadata]
code = "{code}"
name = "Custom Reconstruction"

[lemma]
# Leading characters compared when no exact lemma exists (3 or 4)
fuzzy_prefix_len = 4
# Characters trimmed from both ends of a token before lookup
strip_chars = [",", ".", "?", "!", " "]

[markers]
# Word-final reduced vowels dropped before a suffix is attached
yers = ["ъ", "ь"]
# A suffix starting with this vowel triggers palatalization
front_vowel = "ě"
# Emitted for words missing from the lexicon
unknown_word = "(ne najdeno slova)"

# Stem-final consonant reflexes before the front vowel
[palatalization]
rules = [
    {{ from = "g", to = "dz" }},
    {{ from = "k", to = "c" }},
    {{ from = "h", to = "z" }},
]

# Prepositions that force the locative on the next word
[prepositions]
locative = ["w", "v", "we"]
# Emitted in place of the preposition
literal = "vu"

# Fixed outputs, checked before the lexicon
[overrides]
jestem = "jesmь"
"jesteś" = "jesi"
jest = "jestь"
# Add more as needed:
# "są" = "sǫtь"

[case_style]
# Reproduce mixed-case input letter by letter instead of lowercasing it
mixed_exact = false

[reorder]
# "swap": emit an adjective before the noun it follows
# "buffer": hold a noun back while the adjectives after it are emitted
policy = "swap"
"#,
            code = self.language_code
        )
    }
}
