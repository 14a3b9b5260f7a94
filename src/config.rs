//! Daemon configuration
//!
//! Everything is read from environment variables (a `.env` file in the
//! working directory is loaded first when present). Unset variables fall
//! back to the defaults on [`DatabaseConfig`] and [`LoggingConfig`]; set but
//! malformed values are rejected instead of being silently ignored.

use std::time::Duration;

use crate::database::DatabaseConfig;
use crate::error::ConfigError;
use crate::logging::{LogFormat, LoggingConfig};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
pub const DATABASE_CONNECT_TIMEOUT_SECS: &str = "DATABASE_CONNECT_TIMEOUT_SECS";
pub const GROUPS_TABLE: &str = "GROUPS_TABLE";
pub const LOG_FILTER: &str = "RUST_LOG";
pub const LOG_FORMAT: &str = "LOG_FORMAT";

/// Top-level configuration for the daemon's data access layer
#[derive(Debug, Clone, Default)]
pub struct DaemonConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl DaemonConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::from_lookup(&lookup)?,
        })
    }
}

impl DatabaseConfig {
    /// Database settings from the process environment; logging variables are not read
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut database = DatabaseConfig::default();
        if let Some(url) = lookup(DATABASE_URL) {
            database.database_url = url;
        }
        if let Some(size) = lookup(DATABASE_POOL_SIZE) {
            database.max_connections = parse_number(DATABASE_POOL_SIZE, &size)?;
        }
        if let Some(secs) = lookup(DATABASE_CONNECT_TIMEOUT_SECS) {
            database.connection_timeout =
                Duration::from_secs(parse_number(DATABASE_CONNECT_TIMEOUT_SECS, &secs)?);
        }
        if let Some(table) = lookup(GROUPS_TABLE) {
            database.groups_table = table;
        }
        database.validate()?;
        Ok(database)
    }
}

impl LoggingConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut logging = LoggingConfig::default();
        if let Some(filter) = lookup(LOG_FILTER) {
            logging.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT) {
            logging.format = format.parse::<LogFormat>()?;
        }
        Ok(logging)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}
