//! Tracing setup for the two binaries.
//!
//! The game owns the terminal, so it logs to a per-session file in the cache
//! directory. The simulator logs to stderr.

use chrono::Local;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ARENA_LOG=debug`.
pub const LOG_ENV_VAR: &str = "ARENA_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Platform cache directory for session logs, created if missing.
pub fn log_dir() -> io::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "arena").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine cache directory",
        )
    })?;
    let dir = dirs.cache_dir().join("logs");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn session_log_name() -> String {
    format!("arena-{}.log", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Logs to a fresh session file. Keep the guard alive until exit or buffered
/// lines are lost.
pub fn init_file_logging() -> io::Result<(WorkerGuard, PathBuf)> {
    let dir = log_dir()?;
    let name = session_log_name();
    let path = dir.join(&name);

    let file_appender = tracing_appender::rolling::never(&dir, &name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Already initialized is fine (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(file_layer)
        .try_init();

    Ok((guard, path))
}

/// Logs to stderr at `default_level` unless `ARENA_LOG` says otherwise.
pub fn init_stderr_logging(default_level: &str) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(stderr_layer)
        .try_init();
}
