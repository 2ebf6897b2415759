// src/analyze/mod.rs
//! Text-analysis engine: rule-based sentiment plus theme classification.
//!
//! Pure and synchronous. All reference data is static and read-only, so
//! `analyze` can be called from any number of threads without coordination.

pub mod lexicon;
pub mod scoring;
pub mod sentiment;
pub mod similarity;
pub mod themes;

use serde::Serialize;

// Re-export convenient types.
pub use crate::analyze::lexicon::{Theme, LEXICON, NEGATORS};
pub use crate::analyze::scoring::{score_word, WordScorer};
pub use crate::analyze::sentiment::{analyze_sentiment, Sentiment, SentimentAnalyzer};
pub use crate::analyze::similarity::edit_distance;
pub use crate::analyze::themes::detect_themes;

/// Characters deleted during normalization.
pub const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '(', ')'];

/// Lowercased text with [`STRIPPED_PUNCTUATION`] removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized(String);

impl Normalized {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated tokens; empty for blank text.
    pub fn tokens(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }
}

pub fn normalize(text: &str) -> Normalized {
    Normalized(
        text.to_lowercase()
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect(),
    )
}

/// Combined engine output for one piece of review text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Unique, in declaration order.
    pub themes: Vec<Theme>,
    pub score: i32,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            themes: Vec::new(),
            score: 0,
        }
    }
}

/// Analyze review text: normalize once, then score sentiment and detect
/// themes over the same token sequence.
pub fn analyze(text: &str) -> AnalysisResult {
    let normalized = normalize(text);
    let tokens = normalized.tokens();

    let score = SentimentAnalyzer::default().score_tokens(&tokens);
    let themes = themes::detect_in(normalized.as_str(), &tokens);

    AnalysisResult {
        sentiment: Sentiment::from_score(score),
        themes,
        score,
    }
}
