//! Error types for shiplog

use std::path::PathBuf;
use thiserror::Error;

use crate::config::TicketDialect;

/// Result type alias using ShiplogError
pub type Result<T> = std::result::Result<T, ShiplogError>;

/// Main error type for shiplog operations
#[derive(Debug, Error)]
pub enum ShiplogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl ShiplogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// An enabled dialect has no URL template
    #[error("No ticket URL template configured for dialect '{0}'")]
    MissingTicketUrl(TicketDialect),

    /// Unknown dialect name
    #[error("Unknown ticket dialect: {0}")]
    UnknownDialect(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// git executable missing
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// Failed to spawn git
    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// git exited with a non-zero status
    #[error("git {command} exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
}
