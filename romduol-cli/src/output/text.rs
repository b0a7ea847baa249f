//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use romduol_core::TokenData;
use std::io::{self, Write};

/// Plain text formatter - outputs one token per line as
/// `text<TAB>kind<TAB>series<TAB>transliteration`
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

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &TokenData) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            token.text,
            token.kind,
            token.series,
            token.transliteration.as_deref().unwrap_or("-"),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
