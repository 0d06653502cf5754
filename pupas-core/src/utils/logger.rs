//! Logging Infrastructure
//!
//! Console logging by default; with a log directory, output goes to a daily
//! rolling file instead.

use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing_subscriber::EnvFilter;

/// File name prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "pupas-kitchen";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .and_then(Path::to_str);

    // try_init: a second call (tests) keeps the first subscriber
    match (file_dir, json.unwrap_or(false)) {
        (Some(dir), true) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = builder.json().with_writer(appender).try_init();
        }
        (Some(dir), false) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = builder.with_ansi(false).with_writer(appender).try_init();
        }
        (None, true) => {
            let _ = builder.json().try_init();
        }
        (None, false) => {
            let _ = builder.try_init();
        }
    }
}

/// Delete rolling log files older than `days`
///
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &str, days: u64) -> std::io::Result<usize> {
    let max_age = Duration::from_secs(days * 24 * 60 * 60);
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let is_log = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        if now.duration_since(modified).unwrap_or_default() > max_age {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    Ok(removed)
}
