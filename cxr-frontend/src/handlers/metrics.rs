use axum::extract::State;
use cxr_core::error::AppError;

use crate::AppState;

pub async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    Ok(state.metrics.render()?)
}
