//! Tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so it logs to a file.
//! Line-oriented commands log to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::types::{LogConfig, LogDestination};

/// Environment variable holding a filter directive; wins over `--log-level`.
pub const LOG_ENV: &str = "MOVIE_GATE_LOG";

/// Returns the default log file location.
///
/// On Linux: ~/.local/share/movie-gate/movie-gate.log
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie-gate")
        .join("movie-gate.log")
}

/// Pick the filter: a valid environment directive, else the default.
pub fn filter_from(env_value: Option<&str>, default_filter: &str) -> Result<EnvFilter> {
    if let Some(filter) = env_value.and_then(|v| EnvFilter::try_new(v).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|e| Error::LogFilter {
        directive: default_filter.to_string(),
        reason: e.to_string(),
    })
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    let open = || -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| Error::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Install the global tracing subscriber. Call once, early in `main`.
pub fn init(config: &LogConfig) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = filter_from(env_value.as_deref(), &config.default_filter)?;

    let installed = match &config.destination {
        LogDestination::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogDestination::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|_| Error::LoggingInitialized)
}

// ============================================================================
// TESTS
// ============================================================================
