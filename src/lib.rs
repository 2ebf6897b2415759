// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod feedback;
pub mod insights;
pub mod logging;
pub mod metrics;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze, AnalysisResult, Sentiment, Theme};
pub use crate::api::{router, AppState};
