//! Tekton `PipelineRun` custom resource
//!
//! A trimmed-down `tekton.dev/v1` schema: the spec only keeps the pipeline
//! reference and the status only keeps conditions and run timestamps.

use super::condition::Condition;
use chrono::{DateTime, Utc};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Spec of a `PipelineRun`
#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[kube(
    group = "tekton.dev",
    version = "v1",
    kind = "PipelineRun",
    plural = "pipelineruns",
    namespaced,
    status = "PipelineRunStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunSpec {
    /// Reference to the Pipeline being run (absent for embedded pipeline specs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_ref: Option<PipelineRef>,
}

/// Reference to a Pipeline by name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Observed state of a `PipelineRun`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl PipelineRun {
    /// Name of the referenced Pipeline, if the run uses a `pipelineRef`
    pub fn pipeline_name(&self) -> Option<&str> {
        self.spec
            .pipeline_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.start_time)
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.completion_time)
    }

    /// `metadata.creationTimestamp` as a chrono instant
    ///
    /// Goes through the wire representation so it does not depend on which
    /// time library k8s-openapi wraps.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let timestamp = self.metadata.creation_timestamp.as_ref()?;
        match serde_json::to_value(timestamp) {
            Ok(value) => instant_from_wire(value),
            Err(e) => {
                tracing::debug!("Cannot serialize creationTimestamp: {}", e);
                None
            }
        }
    }
}

fn instant_from_wire(value: serde_json::Value) -> Option<DateTime<Utc>> {
    serde_json::from_value(value.clone())
        .map_err(|e| tracing::debug!("Cannot convert creationTimestamp {}: {}", value, e))
        .ok()
}
