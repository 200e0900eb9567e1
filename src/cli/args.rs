//! Command-line arguments

use crate::config::Config;
use crate::kube::ListScope;
use crate::report::OutputFormat;
use crate::services::ReportRequest;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::ConfigSubcommand;

/// List Tekton PipelineRuns with imagebuild schedule labels
#[derive(Parser, Debug)]
#[command(name = "kubectl-tekton-imagebuild", bin_name = "kubectl tekton-imagebuild")]
#[command(
    about = "List Tekton PipelineRuns with imagebuild schedule labels",
    after_help = "Examples:
  # List all PipelineRuns with any imagebuild schedule label in current namespace
  kubectl tekton-imagebuild

  # List PipelineRuns with specific schedule value
  kubectl tekton-imagebuild --schedule=daily

  # List PipelineRuns from all namespaces
  kubectl tekton-imagebuild -A

  # List PipelineRuns in specific namespace
  kubectl tekton-imagebuild -n production

  # Output in JSON format
  kubectl tekton-imagebuild -o json"
)]
pub struct Args {
    #[command(flatten)]
    pub list: ListArgs,

    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

/// Flags controlling the PipelineRun listing
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace to list PipelineRuns from (default: current context namespace)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// List PipelineRuns from all namespaces
    #[arg(long = "all-namespaces", short = 'A')]
    pub all_namespaces: bool,

    /// Filter by specific schedule value
    #[arg(long, short = 's')]
    pub schedule: Option<String>,

    /// Output format
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<OutputFormat>,

    /// Don't print headers (only for table output)
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Label whose value is the schedule (default: imagebuild.ba.de/imagebuildschedule)
    #[arg(long = "label-key")]
    pub label_key: Option<String>,
}

/// Listing settings after merging flags over configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    pub output: OutputFormat,
    pub no_headers: bool,
    pub label_key: String,
}

impl ListArgs {
    /// Merge flags over the loaded configuration
    pub fn settings(&self, config: &Config) -> ListSettings {
        ListSettings {
            output: self.output.unwrap_or(config.output),
            no_headers: self.no_headers || config.no_headers,
            label_key: self
                .label_key
                .clone()
                .unwrap_or_else(|| config.label_key.clone()),
        }
    }

    /// Decide where to list from
    ///
    /// `-A` wins over `-n`; without either, the configured namespace and then
    /// the kubeconfig context's namespace are used.
    pub fn scope(&self, config: &Config, context_namespace: &str) -> ListScope {
        if self.all_namespaces {
            return ListScope::AllNamespaces;
        }
        let namespace = self
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .or(config.default_namespace.as_deref())
            .unwrap_or(context_namespace);
        ListScope::Namespace(namespace.to_string())
    }

    /// Build the report request for the given scope
    pub fn request(&self, scope: ListScope, settings: &ListSettings) -> ReportRequest {
        ReportRequest {
            scope,
            label_key: settings.label_key.clone(),
            schedule: self.schedule.clone().filter(|s| !s.is_empty()),
        }
    }
}
