//! cxr-core: Shared infrastructure for the CXR report frontend.
pub mod error;
pub mod middleware;
pub mod observability;
