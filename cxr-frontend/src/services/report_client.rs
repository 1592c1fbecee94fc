//! Client for the remote report-generation API.
//!
//! One multipart POST per submission; the backend downloads both images,
//! runs the model, and answers with the images echoed back as base64 plus
//! the generated text.

use crate::config::ReportServiceSettings;
use crate::error::ReportError;
use crate::models::{GeneratedReport, ReportForm, ReportResponse};
use cxr_core::observability::TracedClientExt;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};

pub struct ReportClient {
    client: Client,
    settings: ReportServiceSettings,
}

/// Error body produced by the backend on 4xx/5xx (`{"detail": ...}`).
#[derive(Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

impl ReportClient {
    pub fn new(settings: ReportServiceSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, settings })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Submit the form once and turn the answer into something displayable.
    ///
    /// No retries: a second attempt would queue another multi-minute
    /// generation on the backend.
    #[tracing::instrument(skip_all, fields(endpoint = %self.settings.endpoint))]
    pub async fn generate(
        &self,
        form: &ReportForm,
        request_id: Option<&str>,
    ) -> Result<GeneratedReport, ReportError> {
        let started = Instant::now();

        let response = self
            .client
            .traced_post(&self.settings.endpoint)
            .multipart(form.to_multipart())
            .send_with_request_id(request_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to send report request");
                ReportError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .map(|body| body.detail.to_string())
                .unwrap_or_else(|_| "<no detail>".to_string());
            tracing::warn!(status = %status, detail = %detail, "Report service returned an error");
            return Err(ReportError::Status(status));
        }

        let body: ReportResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Report response is not the expected JSON");
            ReportError::Decode(e.to_string())
        })?;

        let generated = GeneratedReport::try_from(body)?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            report_len = generated.report.len(),
            "Report generated"
        );

        Ok(generated)
    }

    /// Probe the backend's status endpoint. Without one configured the
    /// backend is assumed reachable. A backend that stalls past
    /// `status_timeout_secs` counts as unreachable.
    pub async fn check_reachable(&self) -> Result<(), ReportError> {
        let Some(url) = self.settings.status_endpoint.as_deref() else {
            return Ok(());
        };

        let response = self
            .client
            .traced_get(url)
            .timeout(Duration::from_secs(self.settings.status_timeout_secs))
            .send()
            .await
            .map_err(ReportError::Network)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ReportError::Status(response.status()))
        }
    }
}
