use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";

/// Initialize tracing on stderr so stdout only carries the report.
///
/// Environment variables:
/// - RUST_LOG: tracing filter directives (default: "error")
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
