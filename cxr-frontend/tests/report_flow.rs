mod common;

use axum::http::StatusCode;
use common::{
    body_string, spawn_router, submit, valid_form, FRONTAL_B64, LATERAL_B64, REPORT_PATH,
};
use cxr_frontend::models::ReportForm;
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn valid_submission_calls_backend_once_with_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .and(body_string_contains(r#"name="frontal_url""#))
        .and(body_string_contains(r#"name="lateral_url""#))
        .and(body_string_contains(r#"name="indication""#))
        .and(body_string_contains(r#"name="comparison""#))
        .and(body_string_contains(r#"name="technique""#))
        .and(body_string_contains("CXR145_IM-0290-1001.png"))
        .and(body_string_contains("CXR145_IM-0290-2001.png"))
        .and(body_string_contains("Cough"))
        .and(body_string_contains("name=\"comparison\"\r\n\r\nNone\r\n"))
        .and(body_string_contains("name=\"technique\"\r\n\r\nDigital\r\n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "frontal_image": FRONTAL_B64,
            "lateral_image": LATERAL_B64,
            "report": "No acute cardiopulmonary abnormality."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_router(&server.uri(), false);
    let response = app.oneshot(submit(&valid_form())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("jpeg;base64,aGVsbG8="));
    assert!(body.contains("jpeg;base64,d29ybGQ="));
    assert!(body.contains("No acute cardiopulmonary abnormality."));
    assert!(!body.contains("No frontal image available."));
}

#[tokio::test]
async fn data_uri_images_are_not_prefixed_again() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "frontal_image": "data:image/png;base64,iVBORw0KGgo=",
            "lateral_image": LATERAL_B64,
            "report": "Stable."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_router(&server.uri(), false);
    let body = body_string(app.oneshot(submit(&valid_form())).await.unwrap()).await;

    assert!(body.contains("png;base64,iVBORw0KGgo="));
    assert!(!body.contains("jpeg;base64,data:image"));
    assert!(body.contains("jpeg;base64,d29ybGQ="));
}

#[tokio::test]
async fn error_status_clears_result_and_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "detail": "Model not loaded." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_router(&server.uri(), false);
    let response = app.oneshot(submit(&valid_form())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.contains("Error: HTTP error! status: 503"));
    assert!(body.contains("No frontal image available."));
    assert!(body.contains("No lateral image available."));
    assert!(body.contains("readonly></textarea>"));
}

#[tokio::test]
async fn missing_images_are_reported_as_invalid_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "report": "Cached report" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_router(&server.uri(), false);
    let response = app.oneshot(submit(&valid_form())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.contains("Error: Invalid image data received from server"));
    assert!(!body.contains("Cached report"));
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_router(&server.uri(), false);
    let body = body_string(app.oneshot(submit(&valid_form())).await.unwrap()).await;

    assert!(body.contains("Error: Invalid response from server"));
}

#[tokio::test]
async fn invalid_urls_never_reach_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = ReportForm {
        frontal_url: "not a url".to_string(),
        ..valid_form()
    };

    let app = spawn_router(&server.uri(), false);
    let response = app.oneshot(submit(&form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("Error: Frontal image URL must be a valid URL"));
    // Entered values stay in the form
    assert!(body.contains(r#"value="Cough""#));
}

#[tokio::test]
async fn unreachable_backend_surfaces_network_error() {
    // Nothing listens on the discard port.
    let app = spawn_router("http://127.0.0.1:9", false);
    let response = app.oneshot(submit(&valid_form())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.contains("Error: Failed to reach the report service"));
}

#[tokio::test]
async fn request_id_is_forwarded_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REPORT_PATH))
        .and(header("x-request-id", "req-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "frontal_image": FRONTAL_B64,
            "lateral_image": LATERAL_B64,
            "report": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = submit(&valid_form());
    request
        .headers_mut()
        .insert("x-request-id", "req-123".parse().unwrap());

    let app = spawn_router(&server.uri(), false);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-123");
}
