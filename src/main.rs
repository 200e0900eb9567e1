//! kubectl-tekton-imagebuild - list Tekton PipelineRuns with imagebuild schedule labels
//!
//! Installed on PATH, kubectl picks it up as `kubectl tekton-imagebuild`.

use anyhow::Result;
use clap::Parser;
use kubectl_tekton_imagebuild::cli::{self, Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);
    tracing::debug!("Debug logging enabled");

    match args.command {
        Some(Command::Config { subcommand }) => cli::handle_config_command(subcommand),
        Some(Command::Version) => {
            cli::display_version();
            Ok(())
        }
        None => cli::run_list(&args.list).await,
    }
}
