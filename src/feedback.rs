//! Feedback records and the store that keeps them.
//!
//! The store is a simple create/list/filter collaborator; the engine output
//! (`sentiment`, `themes`) is attached to each record at creation time.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyze::{analyze, AnalysisResult, Sentiment, Theme};
use crate::config::Catalog;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Submission payload as sent by the form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub product_id: u32,
    pub rating: u8,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: u64,
    pub product_id: u32,
    pub rating: u8,
    pub text: Option<String>,
    pub images: Vec<String>,
    pub sentiment: Sentiment,
    pub themes: Vec<Theme>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("unknown product {0}")]
    UnknownProduct(u32),

    #[error("image url must not be empty")]
    EmptyImageUrl,
}

impl NewFeedback {
    /// Check the payload against the catalog and rating range.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), FeedbackError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(FeedbackError::InvalidRating(self.rating));
        }
        if !catalog.contains(self.product_id) {
            return Err(FeedbackError::UnknownProduct(self.product_id));
        }
        if self.images.iter().any(|u| u.trim().is_empty()) {
            return Err(FeedbackError::EmptyImageUrl);
        }
        Ok(())
    }

    /// Run the engine over the review text; missing text analyses as empty.
    pub fn analyze(&self) -> AnalysisResult {
        analyze(self.text.as_deref().unwrap_or_default())
    }
}

/// Persistence seam used by the HTTP layer.
pub trait FeedbackStore: Send + Sync {
    /// Store an already validated submission with its analysis.
    fn create(&self, new: NewFeedback, analysis: AnalysisResult) -> FeedbackRecord;

    /// Records newest first, optionally only for one product.
    fn list(&self, product_id: Option<u32>) -> Vec<FeedbackRecord>;
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    records: Vec<FeedbackRecord>,
}

/// In-process store; drops the oldest records beyond `cap`.
#[derive(Debug)]
pub struct InMemoryFeedbackStore {
    inner: Mutex<Inner>,
    cap: usize,
}

impl InMemoryFeedbackStore {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, 100_000);
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: Vec::with_capacity(cap.min(1_024)),
            }),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("feedback mutex poisoned").records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryFeedbackStore {
    fn default() -> Self {
        Self::with_capacity(10_000)
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn create(&self, new: NewFeedback, analysis: AnalysisResult) -> FeedbackRecord {
        let mut g = self.inner.lock().expect("feedback mutex poisoned");
        let record = FeedbackRecord {
            id: g.next_id,
            product_id: new.product_id,
            rating: new.rating,
            text: new.text,
            images: new.images,
            sentiment: analysis.sentiment,
            themes: analysis.themes,
            created_at: Utc::now(),
        };
        g.next_id += 1;
        g.records.push(record.clone());
        if g.records.len() > self.cap {
            let excess = g.records.len() - self.cap;
            g.records.drain(0..excess);
        }
        record
    }

    fn list(&self, product_id: Option<u32>) -> Vec<FeedbackRecord> {
        let g = self.inner.lock().expect("feedback mutex poisoned");
        // insertion order is creation order, so reversing gives newest first
        g.records
            .iter()
            .rev()
            .filter(|r| product_id.map_or(true, |id| r.product_id == id))
            .cloned()
            .collect()
    }
}
