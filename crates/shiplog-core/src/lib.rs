//! Shiplog Core - shared types for changelog generation
//!
//! This crate provides the error types, configuration handling, and the
//! log-source seam used by the git and changelog crates.

pub mod config;
pub mod error;
pub mod source;

pub use config::{ChangelogConfig, TicketDialect, TicketUrls};
pub use error::{ConfigError, GitError, Result, ShiplogError};
pub use source::LogSource;
