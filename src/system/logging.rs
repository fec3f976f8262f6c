//! Logging system initialization
//!
//! Sets up the tracing subscriber from [`LoggingConfig`]: console or file
//! output, optional daily rotation, text or JSON format.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Initialize logging system based on configuration
///
/// **Note**: call once during startup, after the configuration is loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Errors
/// Fails if the log file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let writer = build_writer(config)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(logs_to_console(config));

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

fn logs_to_console(config: &LoggingConfig) -> bool {
    config.file.as_ref().is_none_or(|f| f.is_empty())
}

fn build_writer(config: &LoggingConfig) -> anyhow::Result<Box<dyn std::io::Write + Send + Sync>> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(Box::new(std::io::stdout()));
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("leadintake.log")
            .trim_end_matches(".log")
            .to_string();
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;
        Ok(Box::new(file))
    }
}
