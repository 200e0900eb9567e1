//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides a configured
//! client plus the namespace of the selected kubeconfig context.

mod fetch;
mod selector;

pub use fetch::{KubePipelineRunSource, ListScope, PipelineRunSource};
#[cfg(test)]
pub use fetch::MockPipelineRunSource;
pub use selector::{SelectorError, label_selector};

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;

/// A connected client and the namespace its context defaults to
pub struct ClusterConnection {
    pub client: Client,
    pub default_namespace: String,
}

/// Initialize a Kubernetes client
///
/// Without an explicit kubeconfig or context, uses the default loading
/// strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client(
    kubeconfig: Option<&Path>,
    context: Option<&str>,
) -> Result<ClusterConnection> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = match (kubeconfig, context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Error reading kubeconfig {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .context("Error building kubeconfig")?
        }
        (None, Some(_)) => Config::from_kubeconfig(&options)
            .await
            .context("Error building kubeconfig")?,
        (None, None) => Config::infer()
            .await
            .context("Error inferring cluster configuration")?,
    };

    tracing::debug!(
        cluster_url = %config.cluster_url,
        namespace = %config.default_namespace,
        "Resolved cluster configuration"
    );

    let default_namespace = config.default_namespace.clone();
    let client = Client::try_from(config).context("Error creating Kubernetes client")?;
    Ok(ClusterConnection {
        client,
        default_namespace,
    })
}

/// Name of the kubeconfig context that will be used
///
/// An explicit `--context` wins over the kubeconfig's `current-context`.
/// Returns `None` when no kubeconfig can be read (e.g. in-cluster).
pub fn current_context(kubeconfig: Option<&Path>, context: Option<&str>) -> Option<String> {
    if let Some(context) = context {
        return Some(context.to_string());
    }

    let loaded = match kubeconfig {
        Some(path) => Kubeconfig::read_from(path),
        None => Kubeconfig::read(),
    };

    match loaded {
        Ok(kubeconfig) => kubeconfig.current_context,
        Err(e) => {
            tracing::debug!("Could not read kubeconfig for context lookup: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_current_context_explicit_wins() {
        assert_eq!(
            current_context(Some(Path::new("/nonexistent")), Some("staging")),
            Some("staging".to_string())
        );
    }

    #[test]
    fn test_current_context_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"apiVersion: v1
kind: Config
current-context: build-cluster
contexts:
- name: build-cluster
  context:
    cluster: build
    user: ci
    namespace: imagebuild
clusters:
- name: build
  cluster:
    server: https://127.0.0.1:6443
users:
- name: ci
  user:
    token: abc
"#
        )
        .unwrap();

        assert_eq!(
            current_context(Some(file.path()), None),
            Some("build-cluster".to_string())
        );
    }

    #[test]
    fn test_current_context_unreadable() {
        assert_eq!(current_context(Some(Path::new("/nonexistent/kubeconfig")), None), None);
    }
}
