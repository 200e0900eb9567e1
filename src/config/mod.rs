//! Configuration system
//!
//! Layered YAML configuration: built-in defaults, a root file, an optional
//! per-kubeconfig-context file, and environment overrides.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, ConfigFile, DEFAULT_LABEL_KEY};

use anyhow::Context;

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "labelKey" => Ok(config.label_key.clone()),
        "output" => Ok(config.output.to_string()),
        "noHeaders" => Ok(config.no_headers.to_string()),
        "defaultNamespace" => Ok(config.default_namespace.clone().unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key in a single file layer
///
/// An empty `defaultNamespace` removes the key from the layer.
pub fn set_config_value(layer: &mut ConfigFile, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "labelKey" => {
            crate::kube::label_selector(value, None).context("labelKey is not a valid label key")?;
            layer.label_key = Some(value.to_string());
        }
        "output" => {
            layer.output = Some(value.parse().map_err(|e: String| anyhow::anyhow!(e))?);
        }
        "noHeaders" => {
            layer.no_headers = Some(
                value
                    .parse()
                    .context("noHeaders must be 'true' or 'false'")?,
            );
        }
        "defaultNamespace" => {
            layer.default_namespace = (!value.is_empty()).then(|| value.to_string());
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
