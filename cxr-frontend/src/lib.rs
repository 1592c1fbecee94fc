pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

use services::{metrics::Metrics, report_client::ReportClient};
use std::sync::Arc;

/// Shared application state: the backend client and the metrics registry.
#[derive(Clone)]
pub struct AppState {
    pub report_client: Arc<ReportClient>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(report_client: Arc<ReportClient>, metrics: Arc<Metrics>) -> Self {
        Self {
            report_client,
            metrics,
        }
    }
}
