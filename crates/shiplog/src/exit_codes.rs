//! Exit codes for the CLI

use shiplog_core::{ConfigError, GitError, ShiplogError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Map an error chain to an exit code
pub fn for_error(error: &anyhow::Error) -> i32 {
    if let Some(err) = error.downcast_ref::<ShiplogError>() {
        return match err {
            ShiplogError::Config(_) => CONFIG_ERROR,
            ShiplogError::Git(_) => GIT_ERROR,
            _ => ERROR,
        };
    }

    if error.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }

    if error.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }

    ERROR
}
