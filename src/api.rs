use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::analyze::{analyze as analyze_text, AnalysisResult};
use crate::config::Catalog;
use crate::feedback::{
    FeedbackError, FeedbackRecord, FeedbackStore, InMemoryFeedbackStore, NewFeedback,
};
use crate::insights::{build_report, InsightReport};
use crate::logging::log_analysis;
use crate::metrics::{self, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
        }
    }

    /// Catalog from env/config fallbacks, empty in-memory store.
    pub fn from_env() -> anyhow::Result<Self> {
        let catalog = Catalog::load_default()?;
        Ok(Self::new(catalog, Arc::new(InMemoryFeedbackStore::default())))
    }
}

pub fn router(state: AppState) -> Router {
    let exporter = Metrics::global();
    metrics::record_catalog_size(state.catalog.len());

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/feedback", post(create_feedback).get(list_feedback))
        .route("/insights", get(insights))
        .route("/products", get(products))
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    match exporter {
        Some(m) => app.merge(m.router()),
        None => app,
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("invalid request body: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Feedback(FeedbackError::UnknownProduct(_)) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::Feedback(_) | ApiError::Json(_) | ApiError::Query(_) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorEnvelope {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
struct AnalyzeReq {
    text: String,
}

async fn analyze(Json(body): Json<AnalyzeReq>) -> Json<AnalysisResult> {
    let result = analyze_text(&body.text);
    metrics::record_analysis(result.sentiment);
    log_analysis("analyze", &body.text, &result);
    Json(result)
}

async fn create_feedback(
    State(state): State<AppState>,
    body: Result<Json<NewFeedback>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let Json(new) = body.inspect_err(|e| warn!(error = %e, "feedback body rejected"))?;
    if let Err(e) = new.validate(&state.catalog) {
        warn!(product_id = new.product_id, error = %e, "feedback rejected");
        return Err(e.into());
    }

    let analysis = new.analyze();
    metrics::record_analysis(analysis.sentiment);
    log_analysis(
        "feedback",
        new.text.as_deref().unwrap_or_default(),
        &analysis,
    );

    let record = state.store.create(new, analysis);
    metrics::record_feedback_created();
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Default, Deserialize)]
struct ProductQuery {
    #[serde(rename = "productId")]
    product_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductFilter {
    Any,
    Product(u32),
    /// Present but not a product id; matches no records.
    Unmatched,
}

impl ProductQuery {
    fn filter(&self) -> ProductFilter {
        match self.product_id.as_deref().map(str::trim) {
            None | Some("") => ProductFilter::Any,
            Some(raw) => raw
                .parse()
                .map_or(ProductFilter::Unmatched, ProductFilter::Product),
        }
    }
}

async fn list_feedback(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let Query(q) = query?;
    let records = match q.filter() {
        ProductFilter::Any => state.store.list(None),
        ProductFilter::Product(id) => state.store.list(Some(id)),
        ProductFilter::Unmatched => Vec::new(),
    };
    Ok(Json(records))
}

async fn insights(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<InsightReport>, ApiError> {
    let Query(q) = query?;
    let report = match q.filter() {
        ProductFilter::Any => InsightReport::default(),
        ProductFilter::Product(id) => build_report(&state.store.list(Some(id))),
        ProductFilter::Unmatched => build_report(&[]),
    };
    Ok(Json(report))
}

async fn products(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: Option<&str>) -> ProductQuery {
        ProductQuery {
            product_id: raw.map(str::to_string),
        }
    }

    #[test]
    fn product_filter_parsing() {
        assert_eq!(query(None).filter(), ProductFilter::Any);
        assert_eq!(query(Some("")).filter(), ProductFilter::Any);
        assert_eq!(query(Some("101")).filter(), ProductFilter::Product(101));
        assert_eq!(query(Some(" 102 ")).filter(), ProductFilter::Product(102));
        assert_eq!(query(Some("abc")).filter(), ProductFilter::Unmatched);
        assert_eq!(query(Some("-1")).filter(), ProductFilter::Unmatched);
    }
}
