//! Whitespace-aligned worker partitioning
//!
//! Splits an in-memory chunk into contiguous byte ranges for the frequency
//! workers. Boundaries land on ASCII whitespace bytes, which can never
//! occur inside a multi-byte UTF-8 sequence, so ranges are simultaneously
//! token-safe and UTF-8-safe.

use std::ops::Range;

/// Split `text` into `workers` contiguous, non-overlapping byte ranges in
/// source order, covering every byte exactly once and never cutting a
/// token.
///
/// Each boundary is pushed forward from its even-split target to the byte
/// just past the next whitespace. Inputs with fewer whitespace boundaries
/// than workers simply produce trailing empty ranges.
pub fn partition(text: &str, workers: usize) -> Vec<Range<usize>> {
    let len = text.len();
    if workers <= 1 {
        return vec![0..len];
    }

    let bytes = text.as_bytes();
    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;

    for w in 1..=workers {
        if w == workers {
            ranges.push(start..len);
            break;
        }

        let mut end = (len * w / workers).max(start);
        while end < len && !bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        if end < len {
            // Assign the boundary whitespace byte to this range.
            end += 1;
        }
        ranges.push(start..end);
        start = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "the quick brown fox\njumps over the lazy dog\nagain and again\n";

    #[test]
    fn single_worker_gets_everything() {
        assert_eq!(partition(CORPUS, 1), vec![0..CORPUS.len()]);
    }

    #[test]
    fn ranges_cover_every_byte_exactly_once() {
        for workers in 1..=12 {
            let ranges = partition(CORPUS, workers);
            assert_eq!(ranges.len(), workers);
            let mut expected_start = 0;
            for range in &ranges {
                assert_eq!(range.start, expected_start, "{workers} workers");
                assert!(range.end >= range.start);
                expected_start = range.end;
            }
            assert_eq!(expected_start, CORPUS.len());
        }
    }

    #[test]
    fn boundaries_fall_on_whitespace() {
        let bytes = CORPUS.as_bytes();
        for workers in 2..=8 {
            for range in partition(CORPUS, workers) {
                if range.end < CORPUS.len() && range.end > range.start {
                    assert!(
                        bytes[range.end - 1].is_ascii_whitespace(),
                        "range {range:?} with {workers} workers"
                    );
                }
            }
        }
    }

    #[test]
    fn no_token_is_split() {
        let all_tokens: Vec<&str> = CORPUS.split_whitespace().collect();
        for workers in 1..=10 {
            let mut seen = Vec::new();
            for range in partition(CORPUS, workers) {
                seen.extend(CORPUS[range].split_whitespace());
            }
            assert_eq!(seen, all_tokens, "{workers} workers");
        }
    }

    #[test]
    fn more_workers_than_tokens_yields_empty_tails() {
        let ranges = partition("ab cd\n", 5);
        assert_eq!(ranges.len(), 5);
        assert!(ranges.iter().any(|r| r.is_empty()));
        let rebuilt: String = ranges.iter().map(|r| &"ab cd\n"[r.clone()]).collect();
        assert_eq!(rebuilt, "ab cd\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(partition("", 4), vec![0..0, 0..0, 0..0, 0..0]);
    }

    #[test]
    fn multibyte_text_keeps_ranges_on_char_boundaries() {
        let text = "héllo wörld ünïcode tokens everywhere\n";
        for workers in 1..=6 {
            for range in partition(text, workers) {
                // Slicing panics if a boundary lands inside a code point.
                let _ = &text[range];
            }
        }
    }
}
