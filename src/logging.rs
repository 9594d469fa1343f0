//! Tracing subscriber setup. The terminal belongs to the UI, so every log
//! line goes to a daily rolling file instead of stdout.

use std::sync::OnceLock;

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal},
};

use crate::config::Config;
use crate::error::AppError;

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

pub fn init(config: &Config) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = init_file_writer(&config.log_dir, config.log_max_files)?;

    fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(false)
        .with_level(true)
        .with_writer(writer)
        .init();

    tracing::info!(log_dir = %config.log_dir, "logger initialized");

    Ok(())
}

fn init_file_writer(dir: &str, max_files: Option<usize>) -> Result<NonBlocking, AppError> {
    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("lol-profile-viewer.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = file_builder
        .build(dir)
        .map_err(|e| AppError::Config(format!("failed to create log file in {dir}: {e}")))?;

    let (file_writer, guard) = non_blocking(file_appender);

    if LOG_GUARD.set(guard).is_err() {
        return Err(AppError::Config("logger already initialized".into()));
    }

    Ok(file_writer)
}
