//! Token types produced by the layered tokenizer

use crate::symbol::{text_of, Symbol};
use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline storage for a token's covered symbols (clusters are 1-4 symbols)
pub type SymbolSeq = SmallVec<[Symbol; 4]>;

/// Lexical classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Single consonant letter
    Consonant,
    /// Multi-symbol consonant cluster from the extra-consonant table
    ExtraConsonant,
    /// Single vowel sign
    Vowel,
    /// Multi-symbol vowel cluster from the vowel-combination table
    VowelCombination,
    /// One whitespace character
    Space,
    /// One character no table recognizes
    Unknown,
}

impl TokenKind {
    /// Stable string form used at the API boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Consonant => "consonant",
            TokenKind::ExtraConsonant => "extra_consonant",
            TokenKind::Vowel => "vowel",
            TokenKind::VowelCombination => "vowel_combination",
            TokenKind::Space => "space",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phonetic series established by the most recent consonant
///
/// Before any consonant is seen the series is `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    /// First ("a") series
    #[default]
    A,
    /// Second ("o") series
    O,
}

impl Series {
    /// Stable string form used at the API boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            Series::A => "a",
            Series::O => "o",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tokenizer output unit: a kind plus the exact covered symbols
///
/// Tokens are immutable once produced; concatenating the symbol content of
/// a token sequence in order reproduces the tokenized input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    symbols: SymbolSeq,
}

impl Token {
    /// Create a token covering the given symbols
    pub fn new(kind: TokenKind, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            kind,
            symbols: symbols.into_iter().collect(),
        }
    }

    /// The token's lexical kind
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact symbol sub-sequence this token covers
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The covered text
    pub fn text(&self) -> String {
        text_of(&self.symbols)
    }
}

/// A token plus the series state in effect at (and including) it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedToken {
    token: Token,
    series: Series,
}

impl EnrichedToken {
    /// Attach a series to a token
    pub fn new(token: Token, series: Series) -> Self {
        Self { token, series }
    }

    /// The underlying token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The token's lexical kind
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// The exact symbol sub-sequence this token covers
    pub fn symbols(&self) -> &[Symbol] {
        self.token.symbols()
    }

    /// The covered text
    pub fn text(&self) -> String {
        self.token.text()
    }

    /// The series tag
    pub fn series(&self) -> Series {
        self.series
    }
}
