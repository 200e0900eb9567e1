//! Status conditions
//!
//! Tekton reports lifecycle state through knative `Condition` records. The
//! `status` field is a free-form string on the wire, so values other than
//! `True`, `False` and `Unknown` are kept rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition type that carries the overall outcome of a run
pub const SUCCEEDED_CONDITION: &str = "Succeeded";

/// Value of a condition's `status` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
    /// Anything the API server sent that is not one of the three known values
    Other(String),
}

impl From<String> for ConditionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "True" => ConditionStatus::True,
            "False" => ConditionStatus::False,
            "Unknown" => ConditionStatus::Unknown,
            _ => ConditionStatus::Other(value),
        }
    }
}

impl From<&str> for ConditionStatus {
    fn from(value: &str) -> Self {
        ConditionStatus::from(value.to_string())
    }
}

impl From<ConditionStatus> for String {
    fn from(status: ConditionStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionStatus::True => f.write_str("True"),
            ConditionStatus::False => f.write_str("False"),
            ConditionStatus::Unknown => f.write_str("Unknown"),
            ConditionStatus::Other(value) => f.write_str(value),
        }
    }
}

/// A single status condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default)]
    pub status: ConditionStatus,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Condition {
    pub fn new(type_: impl Into<String>, status: ConditionStatus, reason: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            status,
            reason: reason.into(),
            message: String::new(),
        }
    }

    /// Shorthand for a `Succeeded`-typed condition
    pub fn succeeded(status: ConditionStatus, reason: impl Into<String>) -> Self {
        Self::new(SUCCEEDED_CONDITION, status, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_status_from_wire() {
        assert_eq!(ConditionStatus::from("True"), ConditionStatus::True);
        assert_eq!(ConditionStatus::from("False"), ConditionStatus::False);
        assert_eq!(ConditionStatus::from("Unknown"), ConditionStatus::Unknown);
        // Case-sensitive, like the API server
        assert_eq!(
            ConditionStatus::from("true"),
            ConditionStatus::Other("true".to_string())
        );
    }

    #[test]
    fn test_condition_deserialize() {
        let condition: Condition = serde_json::from_value(serde_json::json!({
            "type": "Succeeded",
            "status": "False",
            "reason": "PipelineRunTimeout",
            "message": "PipelineRun \"nightly\" failed to finish within \"1h0m0s\"",
            "lastTransitionTime": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(condition.type_, "Succeeded");
        assert_eq!(condition.status, ConditionStatus::False);
        assert_eq!(condition.reason, "PipelineRunTimeout");
    }

    #[test]
    fn test_condition_deserialize_missing_fields() {
        let condition: Condition =
            serde_json::from_value(serde_json::json!({ "type": "Succeeded" })).unwrap();

        assert_eq!(condition.status, ConditionStatus::Unknown);
        assert!(condition.reason.is_empty());
    }

    #[test]
    fn test_condition_status_serializes_as_string() {
        let value = serde_json::to_value(Condition::succeeded(ConditionStatus::True, "")).unwrap();
        assert_eq!(value["status"], "True");
        assert!(value.get("reason").is_none());
    }
}
