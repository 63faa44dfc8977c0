use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Installs the global subscriber. With a log file, events are written
/// as JSON lines through a non-blocking appender; the returned guard
/// must stay alive until the run finishes or the tail of the log is
/// lost. Without one, human-readable output goes to stderr.
pub fn init_logging(log_file: Option<&Path>) -> Result<Option<LoggingGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));

    let Some(path) = log_file else {
        let subscriber = fmt::Subscriber::builder().with_env_filter(filter).finish();
        // Ignore error if a global subscriber is already set (e.g., when running in tests)
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory at {}", parent.display()))?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("creating log file at {}", path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard { _guard: guard }))
}
