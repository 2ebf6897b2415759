// src/analyze/similarity.rs
//! Levenshtein edit distance used by word scoring and theme detection.
//!
//! Unit cost for insertion, deletion and substitution. Works on `char`s and
//! does no case folding; callers normalize first. Backed by `strsim`.

/// Minimum number of single-character edits turning `a` into `b`.
///
/// Lengths count `char`s (Unicode scalar values), not UTF-16 units.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
