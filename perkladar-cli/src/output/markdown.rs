//! Markdown output formatter

use super::{OutputFormatter, Translation};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs a table of source and translation
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.trim().replace('|', "\\|")
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_translation(&mut self, translation: &Translation) -> Result<()> {
        if translation.is_blank() {
            return Ok(());
        }
        if self.line_count == 0 {
            writeln!(self.writer, "| # | Polish | Proto-Slavic |")?;
            writeln!(self.writer, "|---|--------|--------------|")?;
        }
        self.line_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            self.line_count,
            escape_cell(&translation.input),
            escape_cell(&translation.output)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines: {}*", self.line_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
