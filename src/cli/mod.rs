//! CLI command handling module
//!
//! Handles argument parsing, subcommands and the default listing command.

mod args;
mod commands;
mod logging;
mod version;

pub use args::{Args, Command, ListArgs, ListSettings};
pub use commands::{ConfigSubcommand, handle_config_command};
pub use logging::init_logging;
pub use version::display_version;

use crate::config::ConfigLoader;
use crate::kube::{KubePipelineRunSource, create_client, current_context};
use crate::report::render;
use crate::services::ReportService;
use anyhow::{Context, Result};
use std::io::Write;

/// List PipelineRuns and print the report to stdout
pub async fn run_list(args: &ListArgs) -> Result<()> {
    let context = current_context(args.kubeconfig.as_deref(), args.context.as_deref());
    let config = ConfigLoader::load(context.as_deref());
    let settings = args.settings(&config);
    tracing::debug!(
        context = context.as_deref().unwrap_or("<none>"),
        output = %settings.output,
        label_key = %settings.label_key,
        "Configuration loaded"
    );

    let connection = create_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
    let scope = args.scope(&config, &connection.default_namespace);
    let request = args.request(scope, &settings);

    let service = ReportService::new(KubePipelineRunSource::new(connection.client));
    let rows = service
        .fetch_rows(&request, chrono::Utc::now())
        .await
        .context("Error listing PipelineRuns")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&rows, settings.output, settings.no_headers, &mut out)?;
    out.flush()?;
    Ok(())
}
