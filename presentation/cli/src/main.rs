use std::io::{self, Write};
use std::process::ExitCode;

mod command;
mod config;
mod error;
mod output;
mod setup;

use command::show_config;
use config::{env_config, logging_config};
use output::{diagnostics, report};
use setup::dependency_injection::DependencyContainer;

/// CLI Entry Point
///
/// Resolves the Nebius configuration from the environment, prints a masked
/// summary to stdout and exits with status 0. A missing API key or an
/// unusable client library prints a diagnostic to stderr and exits with 1.
fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables (`.env` first, so RUST_LOG can live there)
    let env = env_config::load_env();

    // 2. Initialize tracing with RUST_LOG env filter
    logging_config::init_tracing();

    // 3. Wire dependencies
    let container = DependencyContainer::new();

    // 4. Resolve and report
    match show_config::execute(&container, &env) {
        Ok(summary) => {
            io::stdout().lock().write_all(report::render(&summary).as_bytes())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!("show_config failed: {}", err);
            io::stderr()
                .lock()
                .write_all(diagnostics::render(&err).as_bytes())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
