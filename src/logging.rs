use anyhow::Context;
use flexi_logger::{detailed_format, Logger, LoggerHandle};

/// Starts logging to stderr. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must outlive the server.
pub fn init_logging(level: &str) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .with_context(|| format!("Invalid log specification `{}`", level))?
        .format(detailed_format)
        .start()
        .context("Failed to start logger")
}
