//! Error types for the journal daemon data access layer
//!
//! Lookups distinguish three outcomes: a row was found, no row matched
//! (`Ok(None)`), or the read itself failed ([`DaoError::Read`]).

use thiserror::Error;

/// Errors surfaced by DAOs and the shared database client
#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create database client: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to read {entity} {id}: {source}")]
    Read {
        entity: &'static str,
        id: u64,
        #[source]
        source: sqlx::Error,
    },
}

impl DaoError {
    /// True when the error came from the read path rather than from setup
    pub fn is_read_error(&self) -> bool {
        matches!(self, DaoError::Read { .. })
    }
}

/// Invalid values found while building configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} has unsupported value '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("'{0}' is not a valid table name")]
    InvalidIdentifier(String),
}
