pub mod app;
pub mod metrics;
pub mod report;
pub mod theme;
