//! Tracing setup.
//!
//! The sign-in screen owns the terminal, so events go to
//! `${SMARTMENU_HOME}/logs/smartmenu.log` instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, paths};

const LOG_FILE_NAME: &str = "smartmenu.log";

/// Builds the filter: `RUST_LOG` wins, then the configured level.
fn build_filter(fallback: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).with_context(|| format!("Invalid log level '{fallback}'"))
}

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive until exit, dropping it flushes the writer.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `dir`.
pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(&config.log_level)?)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_rejects_garbage_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(build_filter("info").is_ok());
        assert!(build_filter("smartmenu=notalevel").is_err());
    }
}
