//! Logging setup: stderr always, plus an optional file log.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::dirs;

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Directory for `status.log`; `None` uses the platform cache dir.
    pub log_dir: Option<PathBuf>,
    /// Whether to also write logs to a file.
    pub file_log: bool,
    /// Default level when `RUST_LOG` is unset.
    pub default_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            file_log: false,
            default_level: LevelFilter::WARN,
        }
    }
}

impl LogConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STATUS_LOG_DIR` - Directory for the file log (default: platform-specific)
    /// - `STATUS_FILE_LOG` - Enable the file log (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.log_dir = env::var("STATUS_LOG_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("STATUS_FILE_LOG") {
            config.file_log = enable;
        } else if env::var("STATUS_FILE_LOG").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.file_log = true;
        }

        config
    }

    /// Raises the default level by one step per `-v`.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        self.default_level = match verbose {
            0 => self.default_level,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        self
    }
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the program so the file writer gets flushed.
pub fn setup(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.default_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let log_dir = config
        .file_log
        .then(|| config.log_dir.clone().unwrap_or_else(dirs::log_dir));

    let (file_layer, guard) = if let Some(log_dir) = &log_dir {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let file_appender = tracing_appender::rolling::never(log_dir, "status.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/status.log", dir.display());
    }

    Ok(guard)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_default_level() {
        let config = LogConfig::default();
        assert_eq!(config.clone().with_verbosity(0).default_level, LevelFilter::WARN);
        assert_eq!(config.clone().with_verbosity(1).default_level, LevelFilter::INFO);
        assert_eq!(config.with_verbosity(5).default_level, LevelFilter::TRACE);
    }
}
