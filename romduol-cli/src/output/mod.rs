//! Output formatting module

use anyhow::Result;
use romduol_core::TokenData;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single token
    fn format_token(&mut self, token: &TokenData) -> Result<()>;

    /// Finalize output (e.g. close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
