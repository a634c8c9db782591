//! Logging setup.
//!
//! The TUI owns the terminal, so everything goes to a daily rolling JSON
//! file. `log` macros used across the crate are bridged into `tracing` by
//! the subscriber. Rolled files from previous days are gzip-compressed in
//! the background once logging is up.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "todo-tui.log";

/// Initialize file-only logging for TUI mode.
///
/// `default_level` is used when `RUST_LOG` is unset or invalid.
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered logs are flushed on shutdown.
pub fn init_tui(log_dir: &Path, default_level: &str) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer: the alternate screen would be corrupted
    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let dir = log_dir.to_path_buf();
    std::thread::spawn(move || {
        compress_old_logs(&dir);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Compress rolled log files that are not today's and not already gzipped.
fn compress_old_logs(log_dir: &Path) {
    let today_suffix = active_suffix();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if should_compress(name, &today_suffix) {
            match compress_file(&path) {
                Ok(Some(gz)) => log::info!("Compressed old log: {:?}", gz),
                Ok(None) => {}
                Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
            }
        }
    }
}

/// Date suffix of the file the daily appender is writing to right now.
///
/// `tracing_appender::rolling` dates its files in UTC, not local time.
fn active_suffix() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Rolled files are named `<LOG_FILE_NAME>.YYYY-MM-DD`.
fn should_compress(file_name: &str, today_suffix: &str) -> bool {
    file_name
        .strip_prefix(LOG_FILE_NAME)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|suffix| suffix != today_suffix && !suffix.ends_with(".gz"))
}

/// Gzip `path` next to itself and remove the original.
///
/// Returns `Ok(None)` if the `.gz` already exists.
fn compress_file(path: &Path) -> io::Result<Option<PathBuf>> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(None);
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    Ok(Some(gz_path))
}
