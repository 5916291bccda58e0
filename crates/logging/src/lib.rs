//! Logging initialization for code-insights.
//!
//! Two modes:
//! - Cli: logs to STDERR, STDOUT carries command output.
//! - Server: logs to STDERR and to a rolling file under the data directory.
//!
//! Server logs roll over at 5 MB. Rotated logs are compressed and at most 10
//! are kept.

use anyhow::{Result, anyhow};
use file_rotate::{ContentLimit, FileRotate, compression::Compression, suffix::AppendCount};
use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt::writer::MakeWriterExt};

const DATA_DIR_NAME: &str = ".code-insights";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "server.log";

pub enum LogMode {
    Cli,
    Server,
}

/// Guard that keeps background logging workers alive.
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// `~/.code-insights`
pub fn data_directory() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| anyhow!("Could not find home directory"))
}

pub fn log_file_path() -> Result<PathBuf> {
    Ok(data_directory()?.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

pub fn init(mode: LogMode, verbose: bool) -> Result<Option<LoggingGuards>> {
    let filter = env_filter(verbose);

    match mode {
        LogMode::Cli => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            Ok(None)
        }
        LogMode::Server => {
            let log_file = log_file_path()?;
            if let Some(log_dir) = log_file.parent() {
                std::fs::create_dir_all(log_dir)?;
            }

            let writer = FileRotate::new(
                log_file,
                AppendCount::new(10),
                ContentLimit::Bytes(5 * 1024 * 1024),
                Compression::OnRotate(1),
                None,
            );

            let (file_non_blocking, file_guard) = tracing_appender::non_blocking(writer);
            // The editor may never drain our stderr; drop lines past the buffer
            // limit instead of blocking.
            let (stderr_non_blocking, stderr_guard) = NonBlockingBuilder::default()
                .lossy(true)
                .buffered_lines_limit(10_000)
                .finish(std::io::stderr());

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(
                    file_non_blocking
                        .with_max_level(tracing::Level::INFO)
                        .and(stderr_non_blocking),
                )
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

            Ok(Some(LoggingGuards {
                _guards: vec![file_guard, stderr_guard],
            }))
        }
    }
}
