//! JSON output formatter

use super::{OutputFormatter, Translation};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs translations as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    translations: Vec<Translation>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            translations: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_translation(&mut self, translation: &Translation) -> Result<()> {
        if !translation.is_blank() {
            self.translations.push(translation.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.translations)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.translations)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
