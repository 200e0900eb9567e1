//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{ConfigFile, ConfigLoader, paths};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "labelKey", "output")
        key: Option<String>,
        /// Kubeconfig context whose overlay to include
        #[arg(long)]
        context: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "labelKey", "output")
        key: String,
        /// Configuration value
        value: String,
        /// Kubeconfig context for context-specific config
        #[arg(long)]
        context: Option<String>,
    },
    /// List all configuration
    List {
        /// Kubeconfig context whose overlay to include
        #[arg(long)]
        context: Option<String>,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate {
        /// Kubeconfig context whose overlay to validate
        #[arg(long)]
        context: Option<String>,
    },
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key, context } => {
            let config = ConfigLoader::load(context.as_deref());

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set {
            key,
            value,
            context,
        } => {
            // Only the target file's own contents are written back, not the merged view
            let path = match context.as_deref() {
                Some(ctx) => paths::context_config_path(ctx),
                None => paths::root_config_path(),
            };
            let mut layer = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigFile::default()
            };

            crate::config::set_config_value(&mut layer, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            if let Some(context_name) = context {
                ConfigLoader::save_context(&layer, &context_name)
                    .context("Failed to save context configuration")?;
                println!("Configuration saved for context: {}", context_name);
            } else {
                ConfigLoader::save_root(&layer).context("Failed to save configuration")?;
                println!("Configuration saved");
            }
        }
        ConfigSubcommand::List { context } => {
            let config = ConfigLoader::load(context.as_deref());
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate { context } => {
            ConfigLoader::validate(context.as_deref())
                .context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}
