//! Logging system initialization
//!
//! CLI mode logs to stderr so stdout stays clean for command output.
//! TUI mode owns the terminal, so it only logs when a file is configured.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use super::panic_handler::RunMode;
use crate::config::LoggingConfig;

type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Initialize logging system based on configuration
///
/// Returns `None` when logging is disabled (TUI without a log file).
/// Otherwise the `WorkerGuard` must be kept alive for the duration of the
/// program so buffered lines are flushed.
///
/// A log file that cannot be opened falls back to stderr (CLI) or to no
/// logging at all (TUI).
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Option<WorkerGuard> {
    let file_writer = config
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .and_then(|f| match open_log_file(f, config) {
            Ok(w) => Some(w),
            Err(e) => {
                eprintln!("[WARN] Failed to open log file {}: {}", f, e);
                None
            }
        });
    let to_file = file_writer.is_some();

    let writer: BoxedWriter = match (file_writer, mode) {
        (Some(w), _) => w,
        (None, RunMode::Cli) => Box::new(std::io::stderr()),
        (None, RunMode::Tui) => return None,
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!to_file);

    // 已初始化时忽略（测试或库调用方可能先装了 subscriber）
    let _ = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };

    Some(guard)
}

fn open_log_file(log_file: &str, config: &LoggingConfig) -> std::io::Result<BoxedWriter> {
    let path = Path::new(log_file);
    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("linkfront.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(std::io::Error::other)?;
        Ok(Box::new(appender))
    } else {
        // 不轮转，追加写入
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_without_file_disables_logging() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config, RunMode::Tui).is_none());
    }

    #[test]
    fn test_plain_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lf.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: false,
            ..LoggingConfig::default()
        };
        assert!(open_log_file(config.file.as_deref().unwrap(), &config).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let config = LoggingConfig {
            enable_rotation: false,
            ..LoggingConfig::default()
        };
        assert!(open_log_file("/nonexistent-dir/x/lf.log", &config).is_err());
    }
}
