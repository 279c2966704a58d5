use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "BEADS_LOG";

/// Filter from `BEADS_LOG` when set and valid, else from the config level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a daily-rolling file in `log_dir`. The TUI owns the terminal, so
/// nothing may be written to stdout or stderr while it runs. Keep the
/// returned guard alive until exit so buffered lines are flushed.
pub fn init_file_logging(log_dir: &Path, config: &LogConfig) -> Option<WorkerGuard> {
    if std::fs::create_dir_all(log_dir).is_err() {
        return None;
    }
    let file_appender = tracing_appender::rolling::daily(log_dir, "beads.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(guard)
}

/// Log to stderr for CLI subcommands. Only warnings and errors show up
/// unless `BEADS_LOG` asks for more.
pub fn init_stderr_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
