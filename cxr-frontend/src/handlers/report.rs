use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use cxr_core::observability::extract_request_id;

use crate::error::ReportError;
use crate::models::{DarkMode, ReportForm, ReportPage};
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: ReportPage,
}

pub async fn index(jar: CookieJar) -> impl IntoResponse {
    IndexTemplate {
        page: ReportPage::new(DarkMode::from_jar(&jar)),
    }
}

pub async fn generate_report(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ReportForm>,
) -> impl IntoResponse {
    let request_id = extract_request_id(&headers);

    let outcome = match form.check() {
        Ok(()) => {
            tracing::info!(
                frontal_url = %form.frontal_url,
                lateral_url = %form.lateral_url,
                "Requesting report"
            );
            state
                .report_client
                .generate(&form, request_id.as_deref())
                .await
        }
        Err(e) => Err(e),
    };

    let status = match &outcome {
        Ok(_) => {
            state.metrics.record_generation("success");
            StatusCode::OK
        }
        Err(e) => {
            state.metrics.record_generation(e.outcome());
            tracing::warn!(error = %e, "Report generation failed");
            match e {
                ReportError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            }
        }
    };

    let page = ReportPage::new(DarkMode::from_jar(&jar))
        .with_form(form)
        .with_outcome(outcome);

    (status, IndexTemplate { page })
}
