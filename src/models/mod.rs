//! Tekton model layer
//!
//! Typed views of the Tekton resources this tool reads. Only the fields the
//! report needs are modelled; everything else in the server response is
//! ignored during deserialization.
//!
//! Structure:
//! - `condition.rs` - knative-style status conditions
//! - `pipeline_run.rs` - `PipelineRun` custom resource (`tekton.dev/v1`)

pub mod condition;
pub mod pipeline_run;

pub use condition::{Condition, ConditionStatus, SUCCEEDED_CONDITION};
pub use pipeline_run::{PipelineRef, PipelineRun, PipelineRunSpec, PipelineRunStatus};
