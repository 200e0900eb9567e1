//! Run status classification
//!
//! Collapses a run's condition list into the single label shown in the
//! STATUS column.

use crate::models::{Condition, ConditionStatus, SUCCEEDED_CONDITION};
use serde::{Serialize, Serializer};
use std::fmt;

/// Human-readable outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Succeeded,
    Failed,
    Cancelled,
    Timeout,
    /// Failed with a reason that has no dedicated label; rendered as `Failed (<reason>)`
    FailedWithReason(String),
    Running,
    Pending,
    Unknown,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Succeeded => f.write_str("Succeeded"),
            RunStatus::Failed => f.write_str("Failed"),
            RunStatus::Cancelled => f.write_str("Cancelled"),
            RunStatus::Timeout => f.write_str("Timeout"),
            RunStatus::FailedWithReason(reason) => write!(f, "Failed ({})", reason),
            RunStatus::Running => f.write_str("Running"),
            RunStatus::Pending => f.write_str("Pending"),
            RunStatus::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for RunStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classify a run from its conditions
///
/// Only the first `Succeeded`-typed condition is consulted. Every input maps
/// to a label; `Unknown` is the catch-all.
pub fn classify(conditions: &[Condition]) -> RunStatus {
    let Some(condition) = conditions.iter().find(|c| c.type_ == SUCCEEDED_CONDITION) else {
        return RunStatus::Unknown;
    };

    match &condition.status {
        ConditionStatus::True => RunStatus::Succeeded,
        ConditionStatus::False => match condition.reason.as_str() {
            "Failed" => RunStatus::Failed,
            "Cancelled" => RunStatus::Cancelled,
            "PipelineRunTimeout" => RunStatus::Timeout,
            other => RunStatus::FailedWithReason(other.to_string()),
        },
        ConditionStatus::Unknown => {
            if condition.reason == "Running" {
                RunStatus::Running
            } else {
                RunStatus::Pending
            }
        }
        ConditionStatus::Other(_) => RunStatus::Unknown,
    }
}
