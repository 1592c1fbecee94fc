use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::error::ReportError;

/// Prefix applied to bare base64 payloads. The report service encodes
/// both views as JPEG.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// JSON body returned by the report endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub frontal_image: Option<String>,
    #[serde(default)]
    pub lateral_image: Option<String>,
    #[serde(default)]
    pub report: Option<String>,
}

/// A report ready for display: both images as data URIs plus the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub frontal_image: String,
    pub lateral_image: String,
    pub report: String,
}

impl TryFrom<ReportResponse> for GeneratedReport {
    type Error = ReportError;

    fn try_from(response: ReportResponse) -> Result<Self, Self::Error> {
        let frontal = to_data_uri(response.frontal_image.as_deref());
        let lateral = to_data_uri(response.lateral_image.as_deref());

        match (frontal, lateral) {
            (Some(frontal_image), Some(lateral_image)) => Ok(Self {
                frontal_image,
                lateral_image,
                report: response.report.unwrap_or_default(),
            }),
            _ => Err(ReportError::InvalidImageData),
        }
    }
}

/// Turn an image field from the report service into something an `<img>`
/// can display.
///
/// Data URIs pass through untouched. Anything else must be standard base64
/// and gets the JPEG prefix. Empty or undecodable values yield `None`.
pub fn to_data_uri(value: Option<&str>) -> Option<String> {
    let raw = value?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if value.starts_with("data:image") {
        return Some(raw.to_string());
    }

    if STANDARD.decode(value).is_err() {
        tracing::warn!(len = value.len(), "Image field is neither a data URI nor base64");
        return None;
    }

    Some(format!("{}{}", JPEG_DATA_URI_PREFIX, value))
}
