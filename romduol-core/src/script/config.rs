//! Configuration structures and validation
//!
//! This module defines the TOML schema for script inventories.

use crate::token::Series;
use serde::{Deserialize, Serialize};

/// Root script configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    pub consonants: Vec<ConsonantEntry>,
    #[serde(default)]
    pub extra_consonants: Vec<ClusterEntry>,
    pub vowels: Vec<VowelEntry>,
    #[serde(default)]
    pub vowel_combinations: Vec<VowelClusterEntry>,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// A single consonant letter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsonantEntry {
    /// Exactly one character
    pub letter: String,
    pub translit: String,
    pub series: Series,
}

/// A multi-symbol consonant cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    /// One or more characters, matched as a unit
    pub letters: String,
    #[serde(default)]
    pub description: Option<String>,
    pub translit: String,
    pub series: Series,
}

/// A single vowel sign, rendered differently per series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VowelEntry {
    /// Exactly one character
    pub letter: String,
    pub translit_a: String,
    pub translit_o: String,
}

/// A multi-symbol vowel cluster, rendered differently per series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VowelClusterEntry {
    /// One or more characters, matched as a unit
    pub letters: String,
    pub translit_a: String,
    pub translit_o: String,
}

impl ScriptConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("script code must not be empty".to_string());
        }
        if self.metadata.name.is_empty() {
            return Err("script name must not be empty".to_string());
        }

        if self.consonants.is_empty() {
            return Err("no consonants defined".to_string());
        }
        if self.vowels.is_empty() {
            return Err("no vowels defined".to_string());
        }

        for entry in &self.consonants {
            check_single(&entry.letter, "consonant")?;
        }
        for entry in &self.vowels {
            check_single(&entry.letter, "vowel")?;
        }
        for entry in &self.extra_consonants {
            check_cluster(&entry.letters, "extra consonant")?;
        }
        for entry in &self.vowel_combinations {
            check_cluster(&entry.letters, "vowel combination")?;
        }

        Ok(())
    }
}

fn check_single(letter: &str, table: &str) -> Result<(), String> {
    if letter.chars().count() != 1 {
        return Err(format!(
            "{table} entry {letter:?} must be exactly one character"
        ));
    }
    Ok(())
}

fn check_cluster(letters: &str, table: &str) -> Result<(), String> {
    if letters.is_empty() {
        return Err(format!("{table} entry has an empty sequence"));
    }
    Ok(())
}
