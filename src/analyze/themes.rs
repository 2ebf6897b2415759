//! Theme detection over normalized review text.
//!
//! Per theme, in declaration order:
//! - exact: the normalized text contains a keyword as a plain substring
//!   (no word boundaries, so "hard" also fires inside "hardware")
//! - fuzzy, only when exact failed: some token is within one edit of a
//!   keyword longer than [`FUZZY_KEYWORD_MIN_CHARS`] chars

use super::lexicon::Theme;
use super::normalize;
use super::similarity::edit_distance;

pub const FUZZY_KEYWORD_MIN_CHARS: usize = 4;
const FUZZY_MAX_EDITS: usize = 1;

/// Themes triggered by `text`, each at most once, in declaration order.
pub fn detect_themes(text: &str) -> Vec<Theme> {
    let normalized = normalize(text);
    detect_in(normalized.as_str(), &normalized.tokens())
}

/// Same as [`detect_themes`] over an already-normalized text and its tokens.
pub fn detect_in(text: &str, tokens: &[&str]) -> Vec<Theme> {
    Theme::ALL
        .into_iter()
        .filter(|theme| exact_match(text, *theme) || fuzzy_match(tokens, *theme))
        .collect()
}

fn exact_match(text: &str, theme: Theme) -> bool {
    theme.keywords().iter().any(|kw| text.contains(kw))
}

fn fuzzy_match(tokens: &[&str], theme: Theme) -> bool {
    theme
        .keywords()
        .iter()
        .filter(|kw| kw.chars().count() > FUZZY_KEYWORD_MIN_CHARS)
        .any(|kw| {
            tokens
                .iter()
                .any(|tok| edit_distance(tok, kw) <= FUZZY_MAX_EDITS)
        })
}
