//! Structured logging setup with tracing
//!
//! The menus own the terminal, so log output goes to a file only.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::FmError;

/// Build the filter: `RUST_LOG` wins, then the configured level, then `info`
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system, appending to `path`
///
/// The returned guard flushes pending lines when dropped; keep it alive
/// for the whole program.
///
/// # Errors
///
/// Returns `FmError::Io` if the log directory cannot be created and
/// `FmError::InvalidInput` if `path` has no file name, the file cannot be
/// opened or a global subscriber is already installed.
pub fn init_logging(path: &Path, level: &str) -> Result<WorkerGuard, FmError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| FmError::InvalidInput(format!("'{}' is not a log file", path.display())))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| FmError::InvalidInput(format!("Cannot open log file: {e}")))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| FmError::InvalidInput(format!("Logging already initialized: {e}")))?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(guard)
}
