//! Shiplog Git - log access for changelog generation
//!
//! Thin process-execution wrapper around the `git` binary. One log query
//! per run; the caller supplies the output format.

mod repository;

pub use repository::GitRepo;
