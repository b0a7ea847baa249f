//! Khmer script tokenization with series-aware phonetic transliteration
//!
//! The pipeline has two algorithmic stages over an immutable script
//! inventory:
//!
//! - **Layered tokenization**: four ordered multi-pattern matching passes
//!   (consonant clusters, vowel combinations, single consonants, single
//!   vowels) segment a symbol sequence into typed tokens, with leftover
//!   characters finalized as whitespace or unknown. The result is total
//!   and lossless: concatenating token contents reproduces the input.
//! - **Series enrichment**: a left-to-right fold tagging every token with
//!   the phonetic series established by the most recent consonant, which
//!   decides how vowels are rendered.
//!
//! Matching is order-driven: patterns are tried strictly in list order and
//! taken greedily, so the inventory sorts its multi-symbol tables longest
//! first before the tokenizer ever sees them.
//!
//! # Example
//!
//! ```rust
//! use romduol_core::Transliterator;
//!
//! let transliterator = Transliterator::new().unwrap();
//! let output = transliterator.process_text("ហ្គាសុះ").unwrap();
//!
//! let kinds: Vec<&str> = output.tokens.iter().map(|t| t.kind.as_str()).collect();
//! assert_eq!(
//!     kinds,
//!     ["extra_consonant", "vowel", "consonant", "vowel_combination"]
//! );
//! assert_eq!(output.transliteration(), "гаасаох");
//! ```

pub mod api;
pub mod error;
pub mod matcher;
pub mod script;
pub mod series;
pub mod symbol;
pub mod token;
pub mod tokenizer;

// Re-export key types
pub use api::{ApiError, Input, Metadata, Output, TokenData, Transliterator};
pub use error::{CoreError, Result};
pub use matcher::{match_many, match_pattern, PatternSpan, Span};
pub use script::{get_inventory, ScriptConfig, ScriptInventory};
pub use series::enrich;
pub use symbol::{symbols, text_of, Symbol};
pub use token::{EnrichedToken, Series, Token, TokenKind};
pub use tokenizer::tokenize;
