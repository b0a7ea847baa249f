//! Series enrichment
//!
//! A single left-to-right fold attaching the prevailing phonetic series to
//! every token. Consonant-kind tokens overwrite the carried state via
//! table lookup and are tagged with their own new series; every other kind
//! inherits the state unchanged. The accumulator lives inside one call, so
//! concurrent enrichments never interfere.

use crate::script::ScriptInventory;
use crate::token::{EnrichedToken, Series, Token, TokenKind};

/// Attach a series tag to every token
///
/// A consonant-kind token whose content has no table entry (which the
/// tokenizer never produces, but downstream code must not rely on that)
/// fails closed: the carried series stays unchanged and tags the token.
pub fn enrich(tokens: Vec<Token>, inventory: &ScriptInventory) -> Vec<EnrichedToken> {
    let mut current = Series::default();
    tokens
        .into_iter()
        .map(|token| {
            match token.kind() {
                TokenKind::Consonant => {
                    if let Some(row) = token
                        .symbols()
                        .first()
                        .and_then(|&symbol| inventory.consonant(symbol))
                    {
                        current = row.series;
                    }
                }
                TokenKind::ExtraConsonant => {
                    if let Some(row) = inventory.extra_consonant(token.symbols()) {
                        current = row.series;
                    }
                }
                TokenKind::Vowel
                | TokenKind::VowelCombination
                | TokenKind::Space
                | TokenKind::Unknown => {}
            }
            EnrichedToken::new(token, current)
        })
        .collect()
}
