//! Feedback service binary entrypoint.
//! Boots the Axum HTTP server on Shuttle, wiring config, shared state, and routes.

use feedback_insights::{logging, router, AppState};
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - FEEDBACK_DEV_LOG=1
fn enable_dev_tracing() {
    if !logging::dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging::DEFAULT_LOG_FILTER));

    // Shuttle may already have installed a subscriber; keep it if so.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let state = AppState::from_env()?;
    info!(products = state.catalog.len(), "catalog loaded");

    Ok(router(state).into())
}
