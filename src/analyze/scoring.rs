//! Word scoring: resolve one normalized token to a polarity weight.
//!
//! Resolution order, first hit wins:
//! 1. exact lexicon lookup
//! 2. suffix stripping via [`STEM_RULES`], in order
//! 3. fuzzy lookup (tokens longer than [`FUZZY_MIN_CHARS`] only), first lexicon
//!    key within the allowed edit distance, scanned in declaration order
//! 4. `0`
//!
//! The fuzzy scan is linear in the lexicon size. Callers only see
//! [`WordScorer::score`], so it can be swapped for an indexed matcher later.

use super::lexicon::{Lexicon, LEXICON};
use super::similarity::edit_distance;

/// One stemming candidate: if the token ends with `suffix`, drop the last
/// `strip` bytes and append `append`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StemRule {
    pub suffix: &'static str,
    pub strip: usize,
    pub append: &'static str,
}

impl StemRule {
    const fn new(suffix: &'static str, strip: usize, append: &'static str) -> Self {
        Self {
            suffix,
            strip,
            append,
        }
    }

    /// Candidate root for `token`, or `None` if the suffix does not match.
    pub fn apply(&self, token: &str) -> Option<String> {
        if !token.ends_with(self.suffix) {
            return None;
        }
        // suffixes are ASCII and `strip <= suffix.len()`, so the cut is on a char boundary
        let mut root = token[..token.len() - self.strip].to_string();
        root.push_str(self.append);
        Some(root)
    }
}

/// Ordered stemming fallbacks.
/// "nicely"→"nice", "scratched"→"scratch", "loved"→"love", "breaking"→"break", "loving"→"love".
pub const STEM_RULES: &[StemRule] = &[
    StemRule::new("ly", 2, ""),
    StemRule::new("ed", 2, ""),
    StemRule::new("ed", 1, ""),
    StemRule::new("ing", 3, ""),
    StemRule::new("ing", 3, "e"),
];

/// Fuzzy lookup only runs for tokens with more chars than this.
/// Counted in `char`s, so an emoji is one char rather than two UTF-16 units.
pub const FUZZY_MIN_CHARS: usize = 3;

/// Keys longer than this tolerate two edits, shorter ones one.
const LONG_KEY_CHARS: usize = 6;

/// Allowed edit distance for a lexicon key of `key_chars` chars.
#[inline]
pub fn allowed_errors(key_chars: usize) -> usize {
    if key_chars > LONG_KEY_CHARS {
        2
    } else {
        1
    }
}

/// Scores tokens against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct WordScorer<'a> {
    lexicon: &'a Lexicon,
}

impl Default for WordScorer<'static> {
    fn default() -> Self {
        Self::new(&LEXICON)
    }
}

impl<'a> WordScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Polarity weight of a lowercase, punctuation-free token; `0` if unknown.
    pub fn score(&self, token: &str) -> i32 {
        self.lexicon
            .get(token)
            .or_else(|| self.stemmed(token))
            .or_else(|| self.fuzzy(token))
            .unwrap_or(0)
    }

    fn stemmed(&self, token: &str) -> Option<i32> {
        STEM_RULES
            .iter()
            .filter_map(|rule| rule.apply(token))
            .find_map(|root| self.lexicon.get(&root))
    }

    fn fuzzy(&self, token: &str) -> Option<i32> {
        if token.chars().count() <= FUZZY_MIN_CHARS {
            return None;
        }
        self.lexicon.entries().find_map(|(key, weight)| {
            let tolerance = allowed_errors(key.chars().count());
            (edit_distance(token, key) <= tolerance).then_some(weight)
        })
    }
}

/// Score a single token against the built-in lexicon.
pub fn score_word(token: &str) -> i32 {
    WordScorer::default().score(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hits() {
        assert_eq!(score_word("great"), 2);
        assert_eq!(score_word("broke"), -5);
        assert_eq!(score_word("scratched"), -2);
    }

    #[test]
    fn stem_rules_apply_in_order() {
        let roots: Vec<String> = STEM_RULES.iter().filter_map(|r| r.apply("loved")).collect();
        assert_eq!(roots, vec!["lov".to_string(), "love".to_string()]);

        let roots: Vec<String> = STEM_RULES.iter().filter_map(|r| r.apply("loving")).collect();
        assert_eq!(roots, vec!["lov".to_string(), "love".to_string()]);

        let roots: Vec<String> = STEM_RULES.iter().filter_map(|r| r.apply("nicely")).collect();
        assert_eq!(roots, vec!["nice".to_string()]);

        assert!(STEM_RULES.iter().all(|r| r.apply("ring").is_none()));
    }

    #[test]
    fn stemming_fallbacks() {
        assert_eq!(score_word("nicely"), 2); // ly
        assert_eq!(score_word("loved"), 3); // ed -> trailing d only
        assert_eq!(score_word("sparkled"), 2); // ed -> trailing d only
        assert_eq!(score_word("loving"), 3); // ing -> +e
        assert_eq!(score_word("failing"), -3); // ing
        assert_eq!(score_word("hated"), -3);
    }

    #[test]
    fn fuzzy_respects_length_gate() {
        // three chars: no fuzzy even though "bad" is one edit away
        assert_eq!(score_word("bsd"), 0);
        // five chars, one edit from "great"
        assert_eq!(score_word("grrat"), 2);
        // four chars already qualify
        assert_eq!(score_word("grat"), 2);
    }

    #[test]
    fn length_gate_counts_chars() {
        // four chars (one astral), one substitution from "good"
        assert_eq!(score_word("\u{1F600}ood"), 1);
        assert_eq!(score_word("\u{1F600}od"), 0);
    }

    #[test]
    fn fuzzy_tolerance_grows_with_key_length() {
        assert_eq!(allowed_errors(5), 1);
        assert_eq!(allowed_errors(6), 1);
        assert_eq!(allowed_errors(7), 2);
        // two edits from "excellent" (9 chars)
        assert_eq!(score_word("exclent"), 3);
        // two edits from "sturdy" (6 chars) is too far
        assert_eq!(score_word("strdi"), 0);
    }

    #[test]
    fn unknown_is_neutral() {
        assert_eq!(score_word(""), 0);
        assert_eq!(score_word("ok"), 0);
        assert_eq!(score_word("necklace"), 0);
    }
}
