//! Frozen runtime tables built from a script configuration
//!
//! The inventory is the single producer of the tokenizer's pattern lists.
//! Its constructor sorts both multi-symbol tables by descending symbol
//! count, which is what gives the order-driven matcher longest-match
//! behavior; the matcher itself never reorders.

use crate::error::{CoreError, Result};
use crate::script::config::ScriptConfig;
use crate::symbol::{symbols, Symbol};
use crate::token::{EnrichedToken, Series, TokenKind};

/// A single consonant row
#[derive(Debug, Clone)]
pub struct ConsonantRow {
    /// The consonant letter
    pub symbol: Symbol,
    /// Display transliteration
    pub translit: String,
    /// Series this consonant establishes
    pub series: Series,
}

/// A multi-symbol consonant cluster row
#[derive(Debug, Clone)]
pub struct ClusterConsonantRow {
    /// The cluster's symbol sequence
    pub symbols: Vec<Symbol>,
    /// Human-readable composition label
    pub description: Option<String>,
    /// Display transliteration
    pub translit: String,
    /// Series this cluster establishes
    pub series: Series,
}

/// A single vowel row; rendering depends on the prevailing series
#[derive(Debug, Clone)]
pub struct VowelRow {
    /// The vowel sign
    pub symbol: Symbol,
    /// Rendering after an a-series consonant
    pub translit_a: String,
    /// Rendering after an o-series consonant
    pub translit_o: String,
}

/// A multi-symbol vowel cluster row
#[derive(Debug, Clone)]
pub struct VowelClusterRow {
    /// The cluster's symbol sequence
    pub symbols: Vec<Symbol>,
    /// Rendering after an a-series consonant
    pub translit_a: String,
    /// Rendering after an o-series consonant
    pub translit_o: String,
}

/// Immutable pattern tables for one script
///
/// Built once from a [`ScriptConfig`] and never mutated afterwards; safe
/// for unlimited concurrent read-only use.
#[derive(Debug, Clone)]
pub struct ScriptInventory {
    code: String,
    name: String,
    consonants: Vec<ConsonantRow>,
    /// Sorted by descending symbol count
    extra_consonants: Vec<ClusterConsonantRow>,
    vowels: Vec<VowelRow>,
    /// Sorted by descending symbol count
    vowel_combinations: Vec<VowelClusterRow>,
}

impl ScriptInventory {
    /// Build and freeze an inventory from a parsed configuration
    pub fn from_config(config: &ScriptConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidConfig)?;

        let consonants = config
            .consonants
            .iter()
            .map(|entry| {
                Ok(ConsonantRow {
                    symbol: Symbol::new(&entry.letter)?,
                    translit: entry.translit.clone(),
                    series: entry.series,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut extra_consonants = config
            .extra_consonants
            .iter()
            .map(|entry| ClusterConsonantRow {
                symbols: symbols(&entry.letters),
                description: entry.description.clone(),
                translit: entry.translit.clone(),
                series: entry.series,
            })
            .collect::<Vec<_>>();
        // Longest first; the stable sort keeps the declared order within a
        // length class, which is the tie-break the matcher honors.
        extra_consonants.sort_by(|a, b| b.symbols.len().cmp(&a.symbols.len()));

        let vowels = config
            .vowels
            .iter()
            .map(|entry| {
                Ok(VowelRow {
                    symbol: Symbol::new(&entry.letter)?,
                    translit_a: entry.translit_a.clone(),
                    translit_o: entry.translit_o.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut vowel_combinations = config
            .vowel_combinations
            .iter()
            .map(|entry| VowelClusterRow {
                symbols: symbols(&entry.letters),
                translit_a: entry.translit_a.clone(),
                translit_o: entry.translit_o.clone(),
            })
            .collect::<Vec<_>>();
        vowel_combinations.sort_by(|a, b| b.symbols.len().cmp(&a.symbols.len()));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            consonants,
            extra_consonants,
            vowels,
            vowel_combinations,
        })
    }

    /// Parse a TOML document and build the inventory from it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ScriptConfig =
            toml::from_str(toml_str).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Script code (e.g. "km")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Script display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a single consonant by its letter
    pub fn consonant(&self, symbol: Symbol) -> Option<&ConsonantRow> {
        self.consonants.iter().find(|row| row.symbol == symbol)
    }

    /// Look up an extra-consonant cluster by its exact symbol sequence
    pub fn extra_consonant(&self, seq: &[Symbol]) -> Option<&ClusterConsonantRow> {
        self.extra_consonants.iter().find(|row| row.symbols == seq)
    }

    /// Look up a single vowel by its sign
    pub fn vowel(&self, symbol: Symbol) -> Option<&VowelRow> {
        self.vowels.iter().find(|row| row.symbol == symbol)
    }

    /// Look up a vowel combination by its exact symbol sequence
    pub fn vowel_combination(&self, seq: &[Symbol]) -> Option<&VowelClusterRow> {
        self.vowel_combinations
            .iter()
            .find(|row| row.symbols == seq)
    }

    /// Extra-consonant patterns in matching order (longest first)
    pub fn extra_consonant_patterns(&self) -> Vec<Vec<Symbol>> {
        self.extra_consonants
            .iter()
            .map(|row| row.symbols.clone())
            .collect()
    }

    /// Vowel-combination patterns in matching order (longest first)
    pub fn vowel_combination_patterns(&self) -> Vec<Vec<Symbol>> {
        self.vowel_combinations
            .iter()
            .map(|row| row.symbols.clone())
            .collect()
    }

    /// Single-consonant patterns in declared order
    pub fn consonant_patterns(&self) -> Vec<Vec<Symbol>> {
        self.consonants.iter().map(|row| vec![row.symbol]).collect()
    }

    /// Single-vowel patterns in declared order
    pub fn vowel_patterns(&self) -> Vec<Vec<Symbol>> {
        self.vowels.iter().map(|row| vec![row.symbol]).collect()
    }

    /// Table sizes as (consonants, extra consonants, vowels, vowel
    /// combinations); used by diagnostics
    pub fn table_sizes(&self) -> (usize, usize, usize, usize) {
        (
            self.consonants.len(),
            self.extra_consonants.len(),
            self.vowels.len(),
            self.vowel_combinations.len(),
        )
    }

    /// Resolve the display transliteration for an enriched token by
    /// re-querying the tables
    ///
    /// Vowel kinds render per the token's series; a space renders as
    /// itself; unknown tokens have no rendering. Returns `None` for a
    /// consonant-kind token whose content is absent from the tables (the
    /// same defensive stance the series pass takes).
    pub fn transliterate(&self, token: &EnrichedToken) -> Option<&str> {
        match token.kind() {
            TokenKind::Consonant => self
                .consonant(*token.symbols().first()?)
                .map(|row| row.translit.as_str()),
            TokenKind::ExtraConsonant => self
                .extra_consonant(token.symbols())
                .map(|row| row.translit.as_str()),
            TokenKind::Vowel => self.vowel(*token.symbols().first()?).map(|row| {
                match token.series() {
                    Series::A => row.translit_a.as_str(),
                    Series::O => row.translit_o.as_str(),
                }
            }),
            TokenKind::VowelCombination => {
                self.vowel_combination(token.symbols())
                    .map(|row| match token.series() {
                        Series::A => row.translit_a.as_str(),
                        Series::O => row.translit_o.as_str(),
                    })
            }
            TokenKind::Space => Some(" "),
            TokenKind::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::get_inventory;
    use crate::token::Token;

    #[test]
    fn test_khmer_inventory_loads() {
        let inventory = get_inventory("km").unwrap();
        assert_eq!(inventory.code(), "km");
        assert_eq!(inventory.name(), "Khmer");
        assert_eq!(inventory.table_sizes(), (33, 10, 17, 8));
    }

    #[test]
    fn test_multi_symbol_tables_are_longest_first() {
        let inventory = get_inventory("km").unwrap();

        let extra = inventory.extra_consonant_patterns();
        for pair in extra.windows(2) {
            assert!(pair[0].len() >= pair[1].len(), "extra consonants unsorted");
        }
        // The four-symbol clusters (base + coeng + letter + treisap) must
        // precede their three-symbol prefixes.
        assert_eq!(extra.first().unwrap().len(), 4);

        let combos = inventory.vowel_combination_patterns();
        for pair in combos.windows(2) {
            assert!(pair[0].len() >= pair[1].len(), "vowel combos unsorted");
        }
        assert_eq!(combos.first().unwrap().len(), 2);
        assert_eq!(combos.last().unwrap().len(), 1);
    }

    #[test]
    fn test_lookups() {
        let inventory = get_inventory("km").unwrap();

        let ka = inventory.consonant(Symbol::from('ក')).unwrap();
        assert_eq!(ka.translit, "ка");
        assert_eq!(ka.series, Series::A);

        let ko = inventory.consonant(Symbol::from('គ')).unwrap();
        assert_eq!(ko.series, Series::O);

        let ga = inventory.extra_consonant(&symbols("ហ្គ")).unwrap();
        assert_eq!(ga.translit, "га");
        assert_eq!(ga.description.as_deref(), Some("ха + ко"));

        assert!(inventory.consonant(Symbol::from('Z')).is_none());
        assert!(inventory.extra_consonant(&symbols("ZZ")).is_none());
    }

    #[test]
    fn test_transliterate_is_series_sensitive() {
        let inventory = get_inventory("km").unwrap();
        let vowel = Token::new(TokenKind::Vowel, symbols("ា"));

        let after_a = EnrichedToken::new(vowel.clone(), Series::A);
        assert_eq!(inventory.transliterate(&after_a), Some("а"));

        let after_o = EnrichedToken::new(vowel, Series::O);
        assert_eq!(inventory.transliterate(&after_o), Some("еа"));
    }

    #[test]
    fn test_transliterate_space_and_unknown() {
        let inventory = get_inventory("km").unwrap();

        let space = EnrichedToken::new(
            Token::new(TokenKind::Space, symbols(" ")),
            Series::A,
        );
        assert_eq!(inventory.transliterate(&space), Some(" "));

        let unknown = EnrichedToken::new(
            Token::new(TokenKind::Unknown, symbols("B")),
            Series::A,
        );
        assert_eq!(inventory.transliterate(&unknown), None);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(matches!(
            ScriptInventory::from_toml_str("not valid toml ["),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
