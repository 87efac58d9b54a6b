use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// JSON lines appended to a file; the only option while the terminal UI
    /// owns the screen.
    File(PathBuf),
    Stderr,
    Off,
}

#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the program so buffered file output is flushed.
pub fn init(target: &LogTarget, verbose: bool) -> Option<WorkerGuard> {
    match target {
        LogTarget::Off => None,
        LogTarget::Stderr => {
            let subscriber = tracing_subscriber::registry()
                .with(default_filter(verbose))
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

            if tracing::subscriber::set_global_default(subscriber).is_err() {
                eprintln!("Failed to set tracing subscriber");
            }
            None
        }
        LogTarget::File(path) => init_file(path, verbose),
    }
}

fn init_file(log_path: &Path, verbose: bool) -> Option<WorkerGuard> {
    let file = match fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", log_path.display());
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
        return None;
    }

    LOG_PATH.set(log_path.to_path_buf()).ok();

    tracing::info!("File logging initialized");

    Some(guard)
}

pub fn log_file_path() -> Option<&'static PathBuf> {
    LOG_PATH.get()
}
