//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "favgame.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/favgame/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `FAVGAME_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FAVGAME_LOG=debug favgame 3498
/// FAVGAME_LOG=favgame_app=trace favgame 3498
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("FAVGAME_LOG")
        .unwrap_or_else(|_| EnvFilter::new("favgame=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("favgame starting");
    tracing::info!("Log file: {}", get_current_log_file().display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("favgame").join("logs")
}

/// Get the log file path for the current day.
///
/// The daily appender suffixes the file name with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    let today = chrono::Utc::now().format("%Y-%m-%d");
    get_log_directory().join(format!("{}.{}", LOG_FILE_NAME, today))
}
