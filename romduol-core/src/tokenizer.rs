//! Layered tokenizer
//!
//! Four matching passes over progressively refined pending segments, in a
//! fixed order: extra-consonant clusters, vowel combinations, single
//! consonants, single vowels. Multi-symbol tables go first so no
//! single-symbol pass can consume one of their constituent symbols; vowel
//! combinations resolve before plain vowels for the same reason. Whatever
//! survives all four passes is finalized symbol-by-symbol as whitespace or
//! unknown. The tokenizer never fails: every input yields a total token
//! sequence whose concatenation reproduces the input exactly.

use crate::matcher::{match_many, PatternSpan};
use crate::script::ScriptInventory;
use crate::symbol::Symbol;
use crate::token::{Token, TokenKind};

/// A work-in-progress slice of the input: already a token, or still raw
#[derive(Debug, Clone)]
enum Segment {
    Done(Token),
    Pending(Vec<Symbol>),
}

/// Segment `text` into a total, lossless token sequence
pub fn tokenize(text: &[Symbol], inventory: &ScriptInventory) -> Vec<Token> {
    let mut segments = vec![Segment::Pending(text.to_vec())];

    let passes = [
        (
            inventory.extra_consonant_patterns(),
            TokenKind::ExtraConsonant,
        ),
        (
            inventory.vowel_combination_patterns(),
            TokenKind::VowelCombination,
        ),
        (inventory.consonant_patterns(), TokenKind::Consonant),
        (inventory.vowel_patterns(), TokenKind::Vowel),
    ];

    for (patterns, kind) in passes {
        segments = apply_pass(segments, &patterns, kind);
    }

    finalize(segments)
}

/// Re-split every pending segment against one table; finalized segments
/// pass through untouched
fn apply_pass(segments: Vec<Segment>, patterns: &[Vec<Symbol>], kind: TokenKind) -> Vec<Segment> {
    let mut refined = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Done(token) => refined.push(Segment::Done(token)),
            Segment::Pending(raw) => {
                for span in match_many(patterns, &raw) {
                    refined.push(match span {
                        PatternSpan::Matched(won) => Segment::Done(Token::new(kind, won)),
                        PatternSpan::Unmatched(rest) => Segment::Pending(rest),
                    });
                }
            }
        }
    }
    refined
}

/// Classify leftover symbols one by one; runs are never merged
fn finalize(segments: Vec<Segment>) -> Vec<Token> {
    let mut tokens = Vec::new();
    for segment in segments {
        match segment {
            Segment::Done(token) => tokens.push(token),
            Segment::Pending(raw) => {
                for symbol in raw {
                    let kind = if symbol.is_whitespace() {
                        TokenKind::Space
                    } else {
                        TokenKind::Unknown
                    };
                    tokens.push(Token::new(kind, [symbol]));
                }
            }
        }
    }
    tokens
}
