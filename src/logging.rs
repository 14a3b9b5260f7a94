//! Logging setup and the shared logger handle
//!
//! Diagnostics go through `tracing`. [`init_tracing`] installs the global
//! `tracing-subscriber` formatter once per process; [`get_logger`] hands out
//! the process-wide [`Logger`] that components keep alongside their other
//! shared dependencies.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::LOG_FORMAT;
use crate::error::ConfigError;

/// Component name attached to events from the shared logger
pub const DEFAULT_COMPONENT: &str = "journal_daemon";

static LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Output style of the installed formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::InvalidValue {
                var: LOG_FORMAT,
                value: s.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `journal_daemon=debug`
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Full,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed (by an earlier
/// call, a test harness or the embedding application); that is not an error.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{}': {}", config.filter, e);
        EnvFilter::new("info")
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        LogFormat::Full => builder.try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(filter = %config.filter, format = ?config.format, "Tracing initialised");
    }
    installed
}

/// Named logger handle shared between components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    component: String,
}

impl Logger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn debug(&self, message: impl fmt::Display) {
        tracing::debug!(component = %self.component, "{}", message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        tracing::info!(component = %self.component, "{}", message);
    }
}

/// Get the process-wide logger, creating it on first use
pub fn get_logger() -> Arc<Logger> {
    LOGGER
        .get_or_init(|| Arc::new(Logger::new(DEFAULT_COMPONENT)))
        .clone()
}

/// Source of the logger a component should hold on to
pub trait LoggerProvider: Send + Sync {
    fn logger(&self) -> Arc<Logger>;
}

/// Provider backed by [`get_logger`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggerProvider;

impl LoggerProvider for TracingLoggerProvider {
    fn logger(&self) -> Arc<Logger> {
        get_logger()
    }
}
