use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use cxr_core::middleware::{
    request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::handlers::{
    app::{health_check, readiness},
    metrics::metrics,
    report::{generate_report, index},
    theme::toggle_dark_mode,
};
use crate::middleware::http_metrics_middleware;
use crate::services::{metrics::Metrics, report_client::ReportClient};
use crate::AppState;

pub fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    let report_client = ReportClient::new(settings.report_service.clone())?;
    let metrics =
        Metrics::new().map_err(|e| anyhow::anyhow!("Failed to register metrics: {}", e))?;

    Ok(AppState::new(Arc::new(report_client), Arc::new(metrics)))
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate_report))
        .route("/preferences/dark-mode", post(toggle_dark_mode))
        .route("/health", get(health_check))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(from_fn_with_state(state.clone(), http_metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost so the span above already sees the request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
