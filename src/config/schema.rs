//! Configuration schema definitions
//!
//! [`ConfigFile`] is what a single YAML file holds: every key is optional so
//! a layer only overrides what it sets. [`Config`] is the resolved result
//! after all layers have been applied over the defaults.

use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};

/// Label that carries a run's imagebuild schedule
pub const DEFAULT_LABEL_KEY: &str = "imagebuild.ba.de/imagebuildschedule";

/// Resolved configuration
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Label selecting imagebuild PipelineRuns; its value is the schedule
    pub label_key: String,

    /// Output format used when `-o` is not given
    pub output: OutputFormat,

    /// Omit table headers when `--no-headers` is not given
    pub no_headers: bool,

    /// Namespace used when `-n` is not given (falls back to the kubeconfig context)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label_key: DEFAULT_LABEL_KEY.to_string(),
            output: OutputFormat::default(),
            no_headers: false,
            default_namespace: None,
        }
    }
}

/// Contents of one configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_headers: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
}

impl ConfigFile {
    /// Apply this layer over `base`; keys the file does not set keep `base`'s value
    pub fn apply_to(&self, base: Config) -> Config {
        Config {
            label_key: self.label_key.clone().unwrap_or(base.label_key),
            output: self.output.unwrap_or(base.output),
            no_headers: self.no_headers.unwrap_or(base.no_headers),
            default_namespace: self.default_namespace.clone().or(base.default_namespace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.label_key, "imagebuild.ba.de/imagebuildschedule");
        assert_eq!(config.output, OutputFormat::Table);
        assert!(!config.no_headers);
        assert_eq!(config.default_namespace, None);
    }

    #[test]
    fn test_config_serialization() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("labelKey"));
        assert!(yaml.contains("output: table"));
        assert!(!yaml.contains("defaultNamespace"));
    }

    #[test]
    fn test_file_deserialization() {
        let yaml = r#"
labelKey: example.com/schedule
output: wide
defaultNamespace: imagebuild
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.label_key.as_deref(), Some("example.com/schedule"));
        assert_eq!(file.output, Some(OutputFormat::Wide));
        assert_eq!(file.no_headers, None);
        assert_eq!(file.default_namespace.as_deref(), Some("imagebuild"));
    }

    #[test]
    fn test_file_rejects_bad_values() {
        assert!(serde_yaml::from_str::<ConfigFile>("output: csv\n").is_err());
        assert!(serde_yaml::from_str::<ConfigFile>("readOnly: true\n").is_err());
    }

    #[test]
    fn test_unset_keys_serialize_to_nothing() {
        let file = ConfigFile {
            default_namespace: Some("builds".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_yaml::to_string(&file).unwrap(),
            "defaultNamespace: builds\n"
        );
    }

    #[test]
    fn test_apply_only_overrides_set_keys() {
        let base = ConfigFile {
            label_key: Some("example.com/schedule".to_string()),
            output: Some(OutputFormat::Wide),
            default_namespace: Some("imagebuild".to_string()),
            ..Default::default()
        }
        .apply_to(Config::default());

        let merged = ConfigFile {
            no_headers: Some(true),
            ..Default::default()
        }
        .apply_to(base);

        assert_eq!(merged.label_key, "example.com/schedule");
        assert_eq!(merged.output, OutputFormat::Wide);
        assert!(merged.no_headers);
        assert_eq!(merged.default_namespace.as_deref(), Some("imagebuild"));
    }
}
