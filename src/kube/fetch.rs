//! PipelineRun listing
//!
//! A single list call against `tekton.dev/v1` PipelineRuns, behind a trait so
//! the report pipeline can be exercised without a cluster.

use crate::models::PipelineRun;
use anyhow::{Context, Result};
use async_trait::async_trait;
use kube::Api;
use kube::api::ListParams;
use std::fmt;

/// Where to list from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    Namespace(String),
    AllNamespaces,
}

impl fmt::Display for ListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListScope::Namespace(ns) => write!(f, "namespace {}", ns),
            ListScope::AllNamespaces => f.write_str("all namespaces"),
        }
    }
}

/// Source of PipelineRun objects
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PipelineRunSource: Send + Sync {
    /// List the PipelineRuns in `scope` matching `selector`
    async fn list(&self, scope: &ListScope, selector: &str) -> Result<Vec<PipelineRun>>;
}

/// PipelineRun source backed by the Kubernetes API
pub struct KubePipelineRunSource {
    client: kube::Client,
}

impl KubePipelineRunSource {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineRunSource for KubePipelineRunSource {
    async fn list(&self, scope: &ListScope, selector: &str) -> Result<Vec<PipelineRun>> {
        let params = ListParams::default().labels(selector);
        tracing::debug!(%scope, selector, "Listing PipelineRuns");

        let list = match scope {
            ListScope::Namespace(ns) => {
                let api: Api<PipelineRun> = Api::namespaced(self.client.clone(), ns);
                api.list(&params)
                    .await
                    .with_context(|| format!("failed to list PipelineRuns in namespace {}", ns))?
            }
            ListScope::AllNamespaces => {
                let api: Api<PipelineRun> = Api::all(self.client.clone());
                api.list(&params)
                    .await
                    .context("failed to list PipelineRuns")?
            }
        };

        tracing::debug!(count = list.items.len(), "Listed PipelineRuns");
        Ok(list.items)
    }
}
