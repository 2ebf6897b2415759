use std::sync::OnceLock;

use axum::{routing::get, Router};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

use crate::analyze::Sentiment;

static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process.
    /// Returns `None` if another recorder was installed first.
    pub fn global() -> Option<Self> {
        HANDLE
            .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
                Ok(h) => Some(h),
                Err(e) => {
                    warn!(error = %e, "prometheus recorder not installed");
                    None
                }
            })
            .clone()
            .map(|handle| Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_analysis(sentiment: Sentiment) {
    counter!("feedback_analyses_total", "sentiment" => sentiment.as_str()).increment(1);
}

pub fn record_feedback_created() {
    counter!("feedback_records_created_total").increment(1);
}

pub fn record_catalog_size(products: usize) {
    gauge!("feedback_catalog_products").set(products as f64);
}
