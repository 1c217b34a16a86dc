use crate::{CONFIG_DIRECTORY, LOG_DIRECTORY};
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,mediadeck=debug";

/// Routes `tracing` output to a daily log file; stdout belongs to the
/// terminal UI. The returned guard flushes the writer when dropped and must
/// outlive the app.
pub fn init(level: Option<&str>) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "mediadeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Could not install log subscriber: {e}"))?;

    tracing::info!("mediadeck v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(guard)
}

fn filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

pub fn log_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
    Ok(data.join(CONFIG_DIRECTORY).join(LOG_DIRECTORY))
}
