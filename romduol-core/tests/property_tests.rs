//! Property tests for the matcher and tokenizer invariants

use proptest::prelude::*;
use romduol_core::matcher::{match_many, match_pattern, PatternSpan, Span};
use romduol_core::{get_inventory, symbols, tokenize};

/// Rebuild a subject from single-pattern spans
fn rebuild(pattern: &[u8], spans: &[Span<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for span in spans {
        match span {
            Span::Matched => out.extend_from_slice(pattern),
            Span::Unmatched(run) => out.extend_from_slice(run),
        }
    }
    out
}

/// Rebuild a subject from multi-pattern spans
fn rebuild_many(spans: &[PatternSpan<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for span in spans {
        match span {
            PatternSpan::Matched(won) => out.extend_from_slice(won),
            PatternSpan::Unmatched(run) => out.extend_from_slice(run),
        }
    }
    out
}

proptest! {
    #[test]
    fn match_pattern_partitions_losslessly(
        pattern in prop::collection::vec(0u8..4, 0..4),
        subject in prop::collection::vec(0u8..4, 0..32),
    ) {
        let spans = match_pattern(&pattern, &subject);
        prop_assert_eq!(rebuild(&pattern, &spans), subject);
    }

    #[test]
    fn match_pattern_never_emits_empty_unmatched(
        pattern in prop::collection::vec(0u8..4, 0..4),
        subject in prop::collection::vec(0u8..4, 0..32),
    ) {
        for span in match_pattern(&pattern, &subject) {
            if let Span::Unmatched(run) = span {
                prop_assert!(!run.is_empty());
            }
        }
    }

    #[test]
    fn match_many_partitions_losslessly(
        patterns in prop::collection::vec(prop::collection::vec(0u8..4, 0..4), 0..6),
        subject in prop::collection::vec(0u8..4, 0..32),
    ) {
        let spans = match_many(&patterns, &subject);
        prop_assert_eq!(rebuild_many(&spans), subject);
    }

    #[test]
    fn match_many_matched_spans_come_from_the_pattern_list(
        patterns in prop::collection::vec(prop::collection::vec(0u8..4, 1..4), 1..6),
        subject in prop::collection::vec(0u8..4, 0..32),
    ) {
        for span in match_many(&patterns, &subject) {
            if let PatternSpan::Matched(won) = span {
                prop_assert!(patterns.contains(&won));
            }
        }
    }
}

/// Characters a realistic subject draws from: full clusters, bare marks,
/// whitespace, and Latin noise
fn mixed_text() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "ក", "ខ", "គ", "ស", "ហ", "អ", "ា", "ិ", "ុ", "ះ", "ំ", "្", "៊",
        "ហ្គ", "ហ្គ៊", "ប៉", "ុះ", "ោះ", "ាំ", " ", "\n", "B", "z", "7",
    ]);
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn tokenizer_covers_every_symbol(text in mixed_text()) {
        let inventory = get_inventory("km").unwrap();
        let tokens = tokenize(&symbols(&text), &inventory);
        let joined: String = tokens.iter().map(|t| t.text()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn tokenizer_emits_no_empty_tokens(text in mixed_text()) {
        let inventory = get_inventory("km").unwrap();
        for token in tokenize(&symbols(&text), &inventory) {
            prop_assert!(!token.symbols().is_empty());
        }
    }
}
