//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Symbol construction from a string that is not exactly one character
    #[error("invalid symbol {input:?}: expected exactly one character, found {count}")]
    InvalidSymbol {
        /// The offending input string
        input: String,
        /// How many characters the input actually contained
        count: usize,
    },

    /// Script inventory construction from a malformed configuration
    #[error("invalid script configuration: {0}")]
    InvalidConfig(String),

    /// Requested script code has no embedded inventory
    #[error("unknown script code: {0}")]
    UnknownScript(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
