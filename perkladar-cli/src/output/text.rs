//! Plain text output formatter

use super::{OutputFormatter, Translation};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one translated line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_translation(&mut self, translation: &Translation) -> Result<()> {
        writeln!(self.writer, "{}", translation.output)?;

        if let Some(tokens) = &translation.tokens {
            for token in tokens.iter().filter(|t| !t.is_punctuation()) {
                write!(
                    self.writer,
                    "    {} -> {} [{}",
                    token.source,
                    token.output,
                    token.outcome.as_str()
                )?;
                if let Some(case) = token.case {
                    write!(self.writer, ", {case}")?;
                }
                if let Some(category) = token.category.as_deref().filter(|c| !c.is_empty()) {
                    write!(self.writer, ", {category}")?;
                }
                writeln!(self.writer, "]")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
