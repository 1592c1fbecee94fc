pub mod generated_report;
pub mod report_form;
pub mod report_page;
pub mod theme;

pub use generated_report::{GeneratedReport, ReportResponse};
pub use report_form::ReportForm;
pub use report_page::ReportPage;
pub use theme::DarkMode;
