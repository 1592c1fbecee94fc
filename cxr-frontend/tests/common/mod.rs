use axum::{body::Body, http::Request, response::Response, Router};
use cxr_frontend::config::ReportServiceSettings;
use cxr_frontend::models::ReportForm;
use cxr_frontend::services::{metrics::Metrics, report_client::ReportClient};
use cxr_frontend::startup::build_router;
use cxr_frontend::AppState;
use std::path::Path;
use std::sync::Arc;

pub const REPORT_PATH: &str = "/generate_report/";
pub const STATUS_PATH: &str = "/test";

/// "hello" in base64; the router never decodes it as an actual JPEG.
pub const FRONTAL_B64: &str = "aGVsbG8=";
/// "world" in base64.
pub const LATERAL_B64: &str = "d29ybGQ=";

pub fn spawn_router(base_url: &str, with_status: bool) -> Router {
    let settings = ReportServiceSettings {
        endpoint: format!("{}{}", base_url, REPORT_PATH),
        status_endpoint: with_status.then(|| format!("{}{}", base_url, STATUS_PATH)),
        connect_timeout_secs: 2,
        status_timeout_secs: 1,
    };

    let report_client = ReportClient::new(settings).expect("client should build");
    let metrics = Metrics::new().expect("metrics should register");
    let state = AppState::new(Arc::new(report_client), Arc::new(metrics));

    build_router(state, &Path::new(env!("CARGO_MANIFEST_DIR")).join("static"))
}

pub fn valid_form() -> ReportForm {
    ReportForm {
        frontal_url: "https://openi.nlm.nih.gov/imgs/512/145/145/CXR145_IM-0290-1001.png"
            .to_string(),
        lateral_url: "https://openi.nlm.nih.gov/imgs/512/145/145/CXR145_IM-0290-2001.png"
            .to_string(),
        indication: "Cough".to_string(),
        comparison: "None".to_string(),
        technique: "Digital".to_string(),
    }
}

pub fn submit(form: &ReportForm) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            serde_urlencoded::to_string(form).expect("form should encode"),
        ))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
