//! kubectl-tekton-imagebuild library
//!
//! Core functionality for the `kubectl tekton-imagebuild` plugin. It can be
//! used both as a binary and as a library for testing.

pub mod cli;
pub mod config;
pub mod kube;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{Condition, ConditionStatus, PipelineRun};
pub use report::{
    OutputFormat, ReportRow, RunRecord, RunStatus, classify, format_age, project, render,
};
