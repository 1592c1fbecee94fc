pub mod metrics;
pub mod report_client;

pub use metrics::Metrics;
pub use report_client::ReportClient;
