//! Projection of PipelineRuns into report rows

use super::age::format_age;
use super::status::{RunStatus, classify};
use crate::models::{Condition, PipelineRun};
use chrono::{DateTime, SecondsFormat, Utc};
use kube::ResourceExt;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Age shown for a record without a creation timestamp
pub const UNKNOWN_AGE: &str = "<unknown>";

/// Snapshot of the PipelineRun fields the report reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunRecord {
    pub name: String,
    pub namespace: String,
    pub created_at: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub completion_time: Option<DateTime<Utc>>,
    pub labels: BTreeMap<String, String>,
    pub pipeline: Option<String>,
    pub conditions: Vec<Condition>,
}

impl From<&PipelineRun> for RunRecord {
    fn from(pr: &PipelineRun) -> Self {
        Self {
            name: pr.name_any(),
            namespace: pr.namespace().unwrap_or_default(),
            created_at: pr.created_at(),
            start_time: pr.start_time(),
            completion_time: pr.completion_time(),
            labels: pr.labels().clone(),
            pipeline: pr.pipeline_name().map(str::to_string),
            conditions: pr.conditions().to_vec(),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub name: String,
    pub namespace: String,
    pub status: RunStatus,
    pub schedule_value: String,
    pub age: String,
    #[serde(
        serialize_with = "rfc3339_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        serialize_with = "rfc3339_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

impl ReportRow {
    /// Build the row for a single record
    pub fn from_record(record: &RunRecord, label_key: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: record.name.clone(),
            namespace: record.namespace.clone(),
            status: classify(&record.conditions),
            schedule_value: record.labels.get(label_key).cloned().unwrap_or_default(),
            age: record
                .created_at
                .map(|created| format_age(created, now))
                .unwrap_or_else(|| UNKNOWN_AGE.to_string()),
            start_time: record.start_time,
            completion_time: record.completion_time,
            labels: record.labels.clone(),
            pipeline: record.pipeline.clone(),
        }
    }
}

/// Project records into rows, one per record, keeping input order
pub fn project(records: &[RunRecord], label_key: &str, now: DateTime<Utc>) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| ReportRow::from_record(record, label_key, now))
        .collect()
}

/// RFC3339 in UTC at second precision, as Kubernetes prints timestamps
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn rfc3339_seconds<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}
