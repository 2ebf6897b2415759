use serde::{Deserialize, Serialize};

use super::lexicon::is_negator;
use super::normalize;
use super::scoring::WordScorer;

/// Three-way label derived from the sign of the summed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Sentiment::Positive,
            -1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentScore {
    pub label: Sentiment,
    pub score: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    scorer: WordScorer<'a>,
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::new(WordScorer::default())
    }
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(scorer: WordScorer<'a>) -> Self {
        Self { scorer }
    }

    /// Sum of token scores over an already-normalized token sequence.
    ///
    /// Negation looks back exactly one token. Since punctuation is stripped
    /// before tokenizing, a negator closing one clause also flips the first
    /// scored word of the next ("not. good" scores like "not good").
    pub fn score_tokens(&self, tokens: &[&str]) -> i32 {
        tokens
            .iter()
            .enumerate()
            .map(|(i, tok)| {
                let base = self.scorer.score(tok);
                if base != 0 && i > 0 && is_negator(tokens[i - 1]) {
                    -base
                } else {
                    base
                }
            })
            .sum()
    }

    pub fn score_text(&self, text: &str) -> SentimentScore {
        let normalized = normalize(text);
        let score = self.score_tokens(&normalized.tokens());
        SentimentScore {
            label: Sentiment::from_score(score),
            score,
        }
    }
}

/// Score `text` against the built-in lexicon.
pub fn analyze_sentiment(text: &str) -> SentimentScore {
    SentimentAnalyzer::default().score_text(text)
}
