//! Public API for Khmer tokenization and transliteration
//!
//! This module provides a stable interface over the tokenize/enrich
//! pipeline that hides table handling and symbol plumbing.

pub mod dto;
pub mod error;

use crate::script::{get_inventory, ScriptInventory};
use crate::series::enrich;
use crate::symbol::symbols;
use crate::token::{EnrichedToken, TokenKind};
use crate::tokenizer::tokenize;
use std::sync::Arc;

pub use dto::{Input, Metadata, Output, TokenData};
pub use error::{ApiError, Result};

/// Main entry point: text in, enriched and transliterated tokens out
#[derive(Debug)]
pub struct Transliterator {
    inventory: Arc<ScriptInventory>,
}

impl Transliterator {
    /// Create a transliterator for the default script (Khmer)
    pub fn new() -> Result<Self> {
        Self::with_script("km")
    }

    /// Create a transliterator for a specific embedded script
    pub fn with_script(code: &str) -> Result<Self> {
        Ok(Self {
            inventory: get_inventory(code)?,
        })
    }

    /// Create a transliterator over a custom inventory
    pub fn with_inventory(inventory: Arc<ScriptInventory>) -> Self {
        Self { inventory }
    }

    /// The inventory backing this transliterator
    pub fn inventory(&self) -> &ScriptInventory {
        &self.inventory
    }

    /// Process input and return tokens with metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let enriched = self.enriched_tokens(&text);

        let tokens: Vec<TokenData> = enriched
            .iter()
            .map(|token| TokenData::from_enriched(token, &self.inventory))
            .collect();
        let unknown_count = enriched
            .iter()
            .filter(|token| token.kind() == TokenKind::Unknown)
            .count();

        let metadata = Metadata {
            total_chars: text.chars().count(),
            token_count: tokens.len(),
            unknown_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output { tokens, metadata })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Typed access for in-process consumers that want the tokens
    /// themselves rather than DTOs (e.g. a rendering layer re-querying
    /// the tables)
    pub fn enriched_tokens(&self, text: &str) -> Vec<EnrichedToken> {
        let syms = symbols(text);
        enrich(tokenize(&syms, &self.inventory), &self.inventory)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new().expect("default transliterator creation should not fail")
    }
}

/// Process text with the default (Khmer) transliterator
pub fn process_text(text: &str) -> Result<Output> {
    Transliterator::new()?.process_text(text)
}

/// Process a file with the default (Khmer) transliterator
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    Transliterator::new()?.process(Input::from_file(path.as_ref().to_path_buf()))
}
