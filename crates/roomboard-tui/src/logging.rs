//! File logging.
//!
//! The terminal owns stdout, so logs go to `roomboard.log` in the configured
//! directory through a non-blocking writer. `RUST_LOG` takes precedence over
//! the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "roomboard.log";

/// Build the filter: `RUST_LOG` if set, else `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the writer thread.
pub fn init(
    log_dir: &Path,
    level: &str,
) -> Result<WorkerGuard, tracing_subscriber::util::TryInitError> {
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
