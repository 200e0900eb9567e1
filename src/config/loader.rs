//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{
    defaults, paths,
    schema::{Config, ConfigFile},
};
use crate::report::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Context-specific config
    /// 3. Root config
    /// 4. Built-in defaults
    ///
    /// Command-line flags are applied on top by the caller.
    pub fn load(context: Option<&str>) -> Config {
        let context_path = context.map(paths::context_config_path);
        let config = Self::load_from(&paths::root_config_path(), context_path.as_deref());
        Self::apply_env_overrides(config)
    }

    /// Load and merge the root and (optional) context files at the given paths
    ///
    /// Missing files are skipped. Files that fail to parse are logged and
    /// skipped so a broken config never blocks a listing.
    pub fn load_from(root: &Path, context: Option<&Path>) -> Config {
        let mut config = Self::load_defaults();

        for path in std::iter::once(root).chain(context) {
            if !path.exists() {
                continue;
            }
            match Self::load_file(path) {
                Ok(layer) => config = layer.apply_to(config),
                Err(e) => tracing::warn!("Ignoring configuration file: {:#}", e),
            }
        }

        config
    }

    /// Load a single configuration layer from a file
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let layer: ConfigFile = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(layer)
    }

    /// Validate configuration files
    ///
    /// Unlike [`ConfigLoader::load`], this fails on any file that exists but
    /// cannot be read or parsed, and on an empty label key.
    pub fn validate(context: Option<&str>) -> Result<()> {
        let context_path = context.map(paths::context_config_path);
        Self::validate_paths(&paths::root_config_path(), context_path.as_deref())
    }

    /// Validate the configuration files at the given paths
    pub fn validate_paths(root: &Path, context: Option<&Path>) -> Result<()> {
        for path in std::iter::once(root).chain(context) {
            if !path.exists() {
                continue;
            }
            let layer = Self::load_file(path)?;
            if layer.label_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
                return Err(anyhow::anyhow!(
                    "labelKey must not be empty in {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // TEKTON_IMAGEBUILD_LABEL_KEY override
        if let Ok(label_key) = std::env::var("TEKTON_IMAGEBUILD_LABEL_KEY") {
            if !label_key.is_empty() {
                config.label_key = label_key;
            }
        }

        // TEKTON_IMAGEBUILD_OUTPUT override
        if let Ok(output) = std::env::var("TEKTON_IMAGEBUILD_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(format) => config.output = format,
                Err(e) => tracing::warn!("Ignoring TEKTON_IMAGEBUILD_OUTPUT: {}", e),
            }
        }

        // TEKTON_IMAGEBUILD_NO_HEADERS override
        if let Ok(no_headers) = std::env::var("TEKTON_IMAGEBUILD_NO_HEADERS") {
            match no_headers.parse::<bool>() {
                Ok(val) => config.no_headers = val,
                Err(_) => tracing::warn!(
                    "Ignoring TEKTON_IMAGEBUILD_NO_HEADERS: expected 'true' or 'false'"
                ),
            }
        }

        // TEKTON_IMAGEBUILD_NAMESPACE override
        if let Ok(namespace) = std::env::var("TEKTON_IMAGEBUILD_NAMESPACE") {
            if !namespace.is_empty() {
                config.default_namespace = Some(namespace);
            }
        }

        config
    }

    /// Save a configuration layer to a file
    ///
    /// Only the keys set in `layer` are written.
    pub fn save(layer: &ConfigFile, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(layer).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(layer: &ConfigFile) -> Result<()> {
        Self::save(layer, &paths::root_config_path())
    }

    /// Save context-specific configuration
    pub fn save_context(layer: &ConfigFile, context: &str) -> Result<()> {
        Self::save(layer, &paths::context_config_path(context))
    }
}
