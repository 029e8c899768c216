use anyhow::{Context, Result};
use autoscan_common::environment::get_env_var_or;
use autoscan_common::environment::variables::{LOG_DIR, LOG_FILTER};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const DEFAULT_LOG_DIR: &str = "data";
const LOG_FILE_NAME: &str = "log.txt";

/// Set up logging to stdout and, as JSON lines, to `log.txt` in the log directory. The filter is
/// read from the environment, defaulting to info logs and above.
///
/// The returned guard flushes the log file when dropped and must be held until shutdown.
pub fn initialize_logging() -> Result<WorkerGuard> {
    LogTracer::init().context("Failed to redirect log records to tracing.")?;

    let filter = EnvFilter::try_from_env(LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = get_env_var_or(LOG_DIR, DEFAULT_LOG_DIR);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME));

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().json().with_writer(file_writer));
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber.")?;

    Ok(guard)
}
