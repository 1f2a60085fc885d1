//! Debug-log setup.
//!
//! The terminal belongs to the TUI, so all diagnostics go to a file instead. The
//! subscriber writes through a `tracing-appender` non-blocking writer; the
//! returned guard must stay alive until the process exits or buffered lines are
//! lost.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const FILTER_ENV: &str = "EXPOMO_LOG";

/// Why the debug log could not be set up. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot install log subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Opens `path` for appending and installs the global subscriber.
///
/// Parent directories are created as needed. The filter comes from
/// `EXPOMO_LOG` and defaults to `debug`.
///
/// # Errors
///
/// Returns [`LogError::Open`] if the file or its directory cannot be created,
/// [`LogError::Install`] if a global subscriber is already set.
pub fn init(path: &Path) -> Result<WorkerGuard, LogError> {
    let file = open_log_file(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(LogError::Install)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(guard)
}

fn open_log_file(path: &Path) -> Result<std::fs::File, LogError> {
    let open_err = |source| LogError::Open { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}
