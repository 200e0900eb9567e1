//! Report service
//!
//! Lists PipelineRuns through a [`PipelineRunSource`] and projects them into
//! report rows.

use crate::kube::{ListScope, PipelineRunSource, label_selector};
use crate::report::{ReportRow, RunRecord, project};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// What to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub scope: ListScope,
    /// Label carrying the schedule value
    pub label_key: String,
    /// Only include runs whose schedule label equals this value
    pub schedule: Option<String>,
}

/// Service producing report rows
pub struct ReportService<S> {
    source: S,
}

impl<S: PipelineRunSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch matching runs and project them as seen at `now`
    ///
    /// Rows come back in the order the API server returned the runs.
    pub async fn fetch_rows(
        &self,
        request: &ReportRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<ReportRow>> {
        let selector = label_selector(&request.label_key, request.schedule.as_deref())
            .context("failed to create label requirement")?;

        let runs = self.source.list(&request.scope, &selector).await?;
        let records: Vec<RunRecord> = runs.iter().map(RunRecord::from).collect();

        if records.is_empty() {
            tracing::info!("No resources found in {}", request.scope);
        }

        Ok(project(&records, &request.label_key, now))
    }
}
