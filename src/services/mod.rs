//! Service layer
//!
//! Keeps Kubernetes API interaction out of the CLI layer.

mod report_service;

pub use report_service::{ReportRequest, ReportService};
