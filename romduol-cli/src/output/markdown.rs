//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use romduol_core::TokenData;
use std::io::Write;

/// Markdown formatter - outputs tokens as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_token(&mut self, token: &TokenData) -> Result<()> {
        if self.token_count == 0 {
            writeln!(self.writer, "| Text | Kind | Series | Transliteration |")?;
            writeln!(self.writer, "|------|------|--------|-----------------|")?;
        }
        self.token_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            token.text,
            token.kind,
            token.series,
            token.transliteration.as_deref().unwrap_or("-"),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_written_once() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        let token = TokenData {
            kind: "consonant".to_string(),
            text: "ក".to_string(),
            series: "a".to_string(),
            transliteration: Some("ка".to_string()),
        };
        formatter.format_token(&token).unwrap();
        formatter.format_token(&token).unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(written.matches("| Text |").count(), 1);
        assert!(written.contains("*Total tokens: 2*"));
    }
}
