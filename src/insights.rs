//! Insight aggregation: group stored feedback by theme and sentiment and turn
//! the counts into short, human-readable findings.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::analyze::{Sentiment, Theme};
use crate::feedback::FeedbackRecord;

pub const NO_DATA: &str = "No data available to generate insights.";
pub const ALL_NEUTRAL: &str = "General feedback is neutral. No recurring defects detected.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThemeStats {
    pub pos: u32,
    pub neg: u32,
    pub total: u32,
}

impl ThemeStats {
    /// Share of negative mentions in percent; `None` without mentions.
    pub fn negative_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.neg) / f64::from(self.total) * 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsightReport {
    pub insights: Vec<String>,
    pub stats: BTreeMap<Theme, ThemeStats>,
    pub review_count: usize,
    /// Mean rating rounded to one decimal, `0.0` without reviews.
    pub average_rating: f64,
}

/// Per-theme rule: warn above `max_negative_rate`, praise when positives win.
struct InsightRule {
    theme: Theme,
    max_negative_rate: f64,
    warning: fn(u32) -> String,
    praise: &'static str,
}

/// Evaluated in this order.
const RULES: [InsightRule; 3] = [
    InsightRule {
        theme: Theme::Durability,
        max_negative_rate: 50.0,
        warning: durability_warning,
        praise: "Quality Assurance: Customers perceive this item as sturdy.",
    },
    InsightRule {
        theme: Theme::Comfort,
        max_negative_rate: 40.0,
        warning: comfort_warning,
        praise: "Comfort Approved: The fit is well-received.",
    },
    InsightRule {
        theme: Theme::Appearance,
        max_negative_rate: 40.0,
        warning: appearance_warning,
        praise: "Aesthetic Winner: High praise for the design.",
    },
];

fn durability_warning(pct: u32) -> String {
    format!("CRITICAL: {pct}% of durability feedback is negative. Customers are reporting breakage.")
}

fn comfort_warning(pct: u32) -> String {
    format!("Design Fix Needed: {pct}% of users find this uncomfortable.")
}

fn appearance_warning(pct: u32) -> String {
    format!("Finish Issue: {pct}% complaints about appearance.")
}

/// Count positive/negative/total mentions per theme.
pub fn theme_stats(records: &[FeedbackRecord]) -> BTreeMap<Theme, ThemeStats> {
    let mut stats: BTreeMap<Theme, ThemeStats> =
        Theme::ALL.into_iter().map(|t| (t, ThemeStats::default())).collect();

    for r in records {
        for theme in &r.themes {
            if let Some(s) = stats.get_mut(theme) {
                s.total += 1;
                match r.sentiment {
                    Sentiment::Positive => s.pos += 1,
                    Sentiment::Negative => s.neg += 1,
                    Sentiment::Neutral => {}
                }
            }
        }
    }
    stats
}

/// Build the report for one product's records.
pub fn build_report(records: &[FeedbackRecord]) -> InsightReport {
    let stats = theme_stats(records);
    let mut insights = Vec::new();

    for rule in &RULES {
        let s = stats.get(&rule.theme).copied().unwrap_or_default();
        let Some(rate) = s.negative_rate() else {
            continue;
        };
        if rate > rule.max_negative_rate {
            insights.push((rule.warning)(rate.round() as u32));
        } else if s.pos > s.neg {
            insights.push(rule.praise.to_string());
        }
    }

    if records.is_empty() {
        insights.push(NO_DATA.to_string());
    } else if insights.is_empty() {
        insights.push(ALL_NEUTRAL.to_string());
    }

    InsightReport {
        insights,
        stats,
        review_count: records.len(),
        average_rating: average_rating(records),
    }
}

fn average_rating(records: &[FeedbackRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: u32 = records.iter().map(|r| u32::from(r.rating)).sum();
    let avg = f64::from(sum) / records.len() as f64;
    (avg * 10.0).round() / 10.0
}
