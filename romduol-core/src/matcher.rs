//! Exact sub-sequence matchers
//!
//! Two layers: [`match_pattern`] splits a subject against one pattern,
//! [`match_many`] folds an ordered pattern list over the still-unmatched
//! remainder. Both are generic over the element type so the algorithm is
//! script-agnostic; the tokenizer instantiates them with [`crate::Symbol`].
//!
//! Ordering contract: `match_many` tries patterns strictly in list order.
//! An earlier pattern always wins a position over a later one, even when
//! the later pattern is longer. Callers wanting longest-match-wins must
//! pre-sort their pattern list by descending length (the script inventory
//! does exactly that for its multi-symbol tables).

/// Output span of the single-pattern matcher
///
/// A `Matched` span carries nothing: its covered elements are the pattern
/// itself, known to the caller. Concatenating span contents in order
/// (substituting the pattern for each `Matched`) reconstructs the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<T> {
    /// The pattern matched at this position
    Matched,
    /// A maximal run the pattern did not cover (never empty)
    Unmatched(Vec<T>),
}

/// Output span of the multi-pattern matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpan<T> {
    /// The winning pattern sequence
    Matched(Vec<T>),
    /// A run no pattern covered (never empty)
    Unmatched(Vec<T>),
}

/// Split `subject` into alternating matched/unmatched spans against one
/// pattern.
///
/// Scans left to right; at each position either the next `pattern.len()`
/// elements equal the pattern element-wise (the match is taken and the
/// cursor advances past it, so matches never overlap) or the current
/// element joins the unmatched buffer. An empty pattern never matches and
/// yields the whole subject unmatched. Single deterministic pass, O(n·m).
pub fn match_pattern<T: PartialEq + Clone>(pattern: &[T], subject: &[T]) -> Vec<Span<T>> {
    // Zero-width patterns would match everywhere; treat them as inert.
    if pattern.is_empty() {
        if subject.is_empty() {
            return Vec::new();
        }
        return vec![Span::Unmatched(subject.to_vec())];
    }

    let mut spans = Vec::new();
    let mut buffer: Vec<T> = Vec::new();
    let mut cursor = 0;

    while cursor < subject.len() {
        if subject[cursor..].starts_with(pattern) {
            if !buffer.is_empty() {
                spans.push(Span::Unmatched(std::mem::take(&mut buffer)));
            }
            spans.push(Span::Matched);
            cursor += pattern.len();
        } else {
            buffer.push(subject[cursor].clone());
            cursor += 1;
        }
    }

    if !buffer.is_empty() {
        spans.push(Span::Unmatched(buffer));
    }

    spans
}

/// Apply an ordered pattern list to `subject`.
///
/// Starts from one unmatched span covering the whole subject and folds
/// over `patterns` in the given order: each pattern re-splits every span
/// still unmatched, while matched spans pass through untouched. Because an
/// earlier pattern sees the subject before any later one, list order (not
/// pattern length) decides ties. Empty patterns are skipped.
pub fn match_many<T: PartialEq + Clone>(patterns: &[Vec<T>], subject: &[T]) -> Vec<PatternSpan<T>> {
    let mut spans = if subject.is_empty() {
        Vec::new()
    } else {
        vec![PatternSpan::Unmatched(subject.to_vec())]
    };

    for pattern in patterns {
        if pattern.is_empty() {
            continue;
        }
        let mut refined = Vec::with_capacity(spans.len());
        for span in spans {
            match span {
                PatternSpan::Matched(won) => refined.push(PatternSpan::Matched(won)),
                PatternSpan::Unmatched(rest) => {
                    for piece in match_pattern(pattern, &rest) {
                        refined.push(match piece {
                            Span::Matched => PatternSpan::Matched(pattern.clone()),
                            Span::Unmatched(run) => PatternSpan::Unmatched(run),
                        });
                    }
                }
            }
        }
        spans = refined;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(pattern: &[i32], spans: &[Span<i32>]) -> Vec<i32> {
        let mut out = Vec::new();
        for span in spans {
            match span {
                Span::Matched => out.extend_from_slice(pattern),
                Span::Unmatched(run) => out.extend_from_slice(run),
            }
        }
        out
    }

    #[test]
    fn test_greedy_non_overlapping() {
        let spans = match_pattern(&[9, 9], &[1, 9, 9, 9, 4]);
        assert_eq!(
            spans,
            vec![
                Span::Unmatched(vec![1]),
                Span::Matched,
                Span::Unmatched(vec![9, 4]),
            ]
        );
    }

    #[test]
    fn test_trailing_match() {
        let spans = match_pattern(&[9, 9], &[1, 9, 9, 9, 4, 5, 6, 7, 8, 9, 9]);
        assert_eq!(
            spans,
            vec![
                Span::Unmatched(vec![1]),
                Span::Matched,
                Span::Unmatched(vec![9, 4, 5, 6, 7, 8]),
                Span::Matched,
            ]
        );
    }

    #[test]
    fn test_no_match() {
        let spans = match_pattern(&[5, 5], &[1, 2, 3]);
        assert_eq!(spans, vec![Span::Unmatched(vec![1, 2, 3])]);
    }

    #[test]
    fn test_full_match() {
        let spans = match_pattern(&[1, 2], &[1, 2]);
        assert_eq!(spans, vec![Span::Matched]);
    }

    #[test]
    fn test_empty_pattern_is_inert() {
        let spans = match_pattern(&[], &[1, 2, 3]);
        assert_eq!(spans, vec![Span::Unmatched(vec![1, 2, 3])]);
        assert!(match_pattern::<i32>(&[], &[]).is_empty());
    }

    #[test]
    fn test_empty_subject() {
        assert!(match_pattern(&[1], &[]).is_empty());
    }

    #[test]
    fn test_partition_invariant() {
        let subject = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 1, 4];
        for pattern in [vec![1, 4], vec![5], vec![9, 9], vec![3, 1, 4]] {
            let spans = match_pattern(&pattern, &subject);
            assert_eq!(reconstruct(&pattern, &spans), subject.to_vec());
        }
    }

    #[test]
    fn test_longer_pattern_listed_first_wins() {
        let patterns = vec![vec![1, 2, 3], vec![1, 2]];
        let spans = match_many(&patterns, &[1, 2, 3, 4]);
        assert_eq!(
            spans,
            vec![
                PatternSpan::Matched(vec![1, 2, 3]),
                PatternSpan::Unmatched(vec![4]),
            ]
        );
    }

    #[test]
    fn test_order_beats_length() {
        // Identical patterns, reversed order, different result: the short
        // prefix claims the position before its superstring is ever tried.
        let patterns = vec![vec![1, 2], vec![1, 2, 3]];
        let spans = match_many(&patterns, &[1, 2, 3]);
        assert_eq!(
            spans,
            vec![
                PatternSpan::Matched(vec![1, 2]),
                PatternSpan::Unmatched(vec![3]),
            ]
        );
    }

    #[test]
    fn test_later_pattern_splits_remainder_only() {
        let patterns = vec![vec![2, 3], vec![1], vec![4]];
        let spans = match_many(&patterns, &[1, 2, 3, 4, 1]);
        assert_eq!(
            spans,
            vec![
                PatternSpan::Matched(vec![1]),
                PatternSpan::Matched(vec![2, 3]),
                PatternSpan::Matched(vec![4]),
                PatternSpan::Matched(vec![1]),
            ]
        );
    }

    #[test]
    fn test_match_many_empty_inputs() {
        assert!(match_many::<i32>(&[], &[]).is_empty());
        assert_eq!(
            match_many(&[], &[7, 7]),
            vec![PatternSpan::Unmatched(vec![7, 7])]
        );
        // Empty patterns in the list are no-ops
        assert_eq!(
            match_many(&[vec![], vec![7]], &[7, 8]),
            vec![
                PatternSpan::Matched(vec![7]),
                PatternSpan::Unmatched(vec![8]),
            ]
        );
    }
}
