//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use romduol_core::TokenData;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenRecord {
    /// The covered text
    pub text: String,
    /// Token kind
    pub kind: String,
    /// Series tag
    pub series: String,
    /// Display transliteration, if any
    pub transliteration: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &TokenData) -> Result<()> {
        self.tokens.push(TokenRecord {
            text: token.text.clone(),
            kind: token.kind.clone(),
            series: token.series.clone(),
            transliteration: token.transliteration.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
