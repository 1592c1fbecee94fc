use crate::error::ReportError;
use crate::models::generated_report::GeneratedReport;
use crate::models::report_form::ReportForm;
use crate::models::theme::DarkMode;

/// Everything the index template needs for one render.
#[derive(Debug, Clone, Default)]
pub struct ReportPage {
    pub form: ReportForm,
    pub frontal_image: Option<String>,
    pub lateral_image: Option<String>,
    pub report: String,
    pub error: Option<String>,
    pub dark_mode: DarkMode,
}

impl ReportPage {
    pub fn new(dark_mode: DarkMode) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }

    /// Keep the submitted values in the inputs.
    pub fn with_form(mut self, form: ReportForm) -> Self {
        self.form = form;
        self
    }

    /// Apply the result of one submission. A failure clears whatever the
    /// page showed before and leaves a single error line.
    pub fn with_outcome(mut self, outcome: Result<GeneratedReport, ReportError>) -> Self {
        match outcome {
            Ok(generated) => {
                self.frontal_image = Some(generated.frontal_image);
                self.lateral_image = Some(generated.lateral_image);
                self.report = generated.report;
                self.error = None;
            }
            Err(err) => {
                self.frontal_image = None;
                self.lateral_image = None;
                self.report.clear();
                self.error = Some(format!("Error: {}", err));
            }
        }
        self
    }

    pub fn container_class(&self) -> &'static str {
        if self.dark_mode.is_on() {
            "container dark"
        } else {
            "container"
        }
    }

    /// Value for the range slider (0 = light, 1 = dark).
    pub fn slider_value(&self) -> u8 {
        u8::from(self.dark_mode.is_on())
    }
}
