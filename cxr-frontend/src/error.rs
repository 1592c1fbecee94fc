use thiserror::Error;

/// Everything that can go wrong between pressing "Generate Findings" and
/// having a report on screen. Each variant renders as the single error
/// string shown on the page.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    #[error("Failed to reach the report service: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("Invalid image data received from server")]
    InvalidImageData,
}

impl ReportError {
    /// Outcome label for the `report_generations_total` metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            ReportError::InvalidInput(_) => "invalid_input",
            ReportError::Status(_) => "http_error",
            ReportError::Network(_) => "network_error",
            ReportError::Decode(_) => "decode_error",
            ReportError::InvalidImageData => "invalid_image",
        }
    }
}
