//! Romduol CLI library
//!
//! This library provides the command-line interface for the romduol
//! Khmer tokenization and transliteration pipeline.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
