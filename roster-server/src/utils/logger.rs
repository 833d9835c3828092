//! Logging infrastructure
//!
//! Structured console logging, with optional daily-rolling file output for
//! long-running deployments.

use std::path::Path;

/// Console-only logger at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, writing to `log_dir` as well when it names an
/// existing directory.
///
/// `RUST_LOG` overrides the passed level when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir.filter(|dir| Path::new(dir).exists()) {
        Some(dir) => builder
            .with_writer(tracing_appender::rolling::daily(dir, "roster-server"))
            .init(),
        None => builder.init(),
    }
}

/// Remove log files older than the given number of days
pub fn cleanup_old_logs(log_dir: &str, days: u64) -> std::io::Result<()> {
    let cutoff = std::time::SystemTime::now()
        .checked_sub(std::time::Duration::from_secs(days * 24 * 60 * 60))
        .unwrap_or(std::time::UNIX_EPOCH);

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if modified < cutoff
            && let Err(e) = std::fs::remove_file(&path)
        {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove old log file");
        }
    }
    Ok(())
}
