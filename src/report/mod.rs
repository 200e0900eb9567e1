//! Report module
//!
//! The pure core of the tool: classify run status, format ages, project
//! PipelineRuns into rows, and render those rows.

mod age;
mod projector;
mod render;
mod status;

pub use age::{format_age, format_elapsed};
pub use projector::{ReportRow, RunRecord, UNKNOWN_AGE, format_timestamp, project};
pub use render::{
    OutputFormat, RenderError, render, render_json, render_table, render_wide, render_yaml,
};
pub use status::{RunStatus, classify};
