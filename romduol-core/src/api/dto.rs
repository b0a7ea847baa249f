//! Data Transfer Objects for the API

use crate::api::error::{ApiError, Result};
use crate::script::ScriptInventory;
use crate::token::EnrichedToken;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One enriched token, flattened for serialization (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    /// Token kind (stable string form)
    pub kind: String,
    /// The exact covered text
    pub text: String,
    /// Series tag ("a" or "o")
    pub series: String,
    /// Display transliteration, if the token has one
    pub transliteration: Option<String>,
}

impl TokenData {
    /// Flatten an enriched token, resolving its transliteration against
    /// the inventory that produced it
    pub fn from_enriched(token: &EnrichedToken, inventory: &ScriptInventory) -> Self {
        Self {
            kind: token.kind().as_str().to_string(),
            text: token.text(),
            series: token.series().as_str().to_string(),
            transliteration: inventory.transliterate(token).map(str::to_string),
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Total characters processed
    pub total_chars: usize,
    /// Number of tokens produced
    pub token_count: usize,
    /// How many of them no table recognized
    pub unknown_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with tokens and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Enriched tokens in input order
    pub tokens: Vec<TokenData>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Join the per-token renderings into one transliterated string
    ///
    /// Tokens without a rendering (unknown characters) contribute their
    /// original text, so the result stays readable on mixed input.
    pub fn transliteration(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.transliteration.as_deref().unwrap_or(&t.text))
            .collect()
    }
}
