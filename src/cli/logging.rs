//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// `--debug` forces the `debug` filter. Otherwise `RUST_LOG` is honoured when
/// set, and logging stays off when it is not. Stdout is left to the report.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            // No logging by default (silent operation)
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .with_file(debug)
        .with_line_number(debug)
        .try_init();
}
