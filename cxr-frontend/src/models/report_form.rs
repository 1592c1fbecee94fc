use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ReportError;

/// Names of the multipart fields, in the order they are sent.
pub const FORM_FIELDS: [&str; 5] = [
    "frontal_url",
    "lateral_url",
    "indication",
    "comparison",
    "technique",
];

/// Values entered on the report form.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ReportForm {
    #[serde(default)]
    #[validate(url(message = "Frontal image URL must be a valid URL"))]
    pub frontal_url: String,
    #[serde(default)]
    #[validate(url(message = "Lateral image URL must be a valid URL"))]
    pub lateral_url: String,
    #[serde(default)]
    pub indication: String,
    #[serde(default)]
    pub comparison: String,
    #[serde(default)]
    pub technique: String,
}

impl ReportForm {
    /// Check the image URLs before anything is sent to the report service.
    pub fn check(&self) -> Result<(), ReportError> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        let messages: Vec<String> = ["frontal_url", "lateral_url"]
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .filter_map(|errs| errs.first())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();

        Err(ReportError::InvalidInput(messages.join("; ")))
    }

    /// Multipart body expected by the report endpoint.
    pub fn to_multipart(&self) -> reqwest::multipart::Form {
        self.fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            })
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (FORM_FIELDS[0], self.frontal_url.as_str()),
            (FORM_FIELDS[1], self.lateral_url.as_str()),
            (FORM_FIELDS[2], self.indication.as_str()),
            (FORM_FIELDS[3], self.comparison.as_str()),
            (FORM_FIELDS[4], self.technique.as_str()),
        ]
    }
}
