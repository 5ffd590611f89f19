use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards every message to `tracing` under the
/// `nebius` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "nebius", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "nebius", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "nebius", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "nebius", "{}", message);
    }
}
