//! Log-source seam between the git layer and the changelog pipeline

use crate::error::GitError;

/// Source of raw delimited log text.
///
/// One query per run: `format` is handed to the underlying tool's native
/// formatting mini-language and stdout is returned verbatim. Failures
/// surface unmodified; there is no retry and no partial output.
pub trait LogSource {
    /// Fetch the raw log for a commit range
    fn fetch_log(&self, format: &str, committish: &str) -> std::result::Result<String, GitError>;
}
