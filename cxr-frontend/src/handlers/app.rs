use axum::{extract::State, Json};
use cxr_core::error::AppError;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Ready once the report service answers its status probe.
pub async fn readiness(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.report_client.check_reachable().await.map_err(|e| {
        tracing::warn!(error = %e, "Report service not reachable");
        AppError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Json(json!({ "status": "ready" })))
}
