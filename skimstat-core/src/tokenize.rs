//! Whitespace tokenization primitives
//!
//! Both pipelines must agree on what a token is, so the splitting rule
//! lives in exactly one place: a token is a maximal run of non-whitespace
//! characters, compared byte-for-byte.

use std::collections::HashSet;

/// Iterate the whitespace-delimited tokens of a piece of text.
///
/// Leading, trailing, and repeated whitespace never yield empty tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count the distinct tokens in a single record.
///
/// Byte-identical repeats collapse to one. Pure function; each call uses
/// only local working storage, so it is safe to call concurrently across
/// records.
pub fn distinct_words(record: &str) -> usize {
    let mut seen = HashSet::new();
    for token in tokens(record) {
        seen.insert(token);
    }
    seen.len()
}
