// src/logging.rs
//! Dev-gated, anonymized logging for analysis events.
//!
//! Active only when FEEDBACK_DEV_LOG=1 AND the process runs in a dev
//! environment (debug build or SHUTTLE_ENV in {local, development, dev}).
//! Raw review text is never logged; a short SHA-256 prefix identifies it.

use tracing::info;

use crate::analyze::AnalysisResult;

pub const ENV_DEV_LOG: &str = "FEEDBACK_DEV_LOG";
pub const DEFAULT_LOG_FILTER: &str = "feedback=info,warn";

pub fn is_dev_env() -> bool {
    cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        )
}

pub fn dev_logging_enabled() -> bool {
    std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1") && is_dev_env()
}

/// First 6 bytes of the SHA-256 digest as 12 hex chars.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Log one analysis (hashed id, label, score, themes).
pub fn log_analysis(event: &str, text: &str, result: &AnalysisResult) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(text);
    info!(
        target: "feedback",
        %id,
        event,
        sentiment = result.sentiment.as_str(),
        score = result.score,
        themes = ?result.themes
    );
}
