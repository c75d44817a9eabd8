//! Tracker-style ticket references
//!
//! Matches case-sensitive `Fix`/`Fixes`/`Fixed` followed by a bare `#123`,
//! an `owner/repo#123` qualifier, or a literal `gh-123`.

use std::sync::LazyLock;

use regex::Regex;

use shiplog_core::TicketDialect;

use super::{TicketRecognizer, TicketRef};

static GITHUB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Fix(?:e[sd])? ((?:[a-zA-Z0-9_-]{1,39}/[a-zA-Z0-9_-]{1,100}#)|#|gh-)(\d+)")
        .expect("Invalid regex")
});

/// Recognizer for tracker-style references
pub struct GithubRecognizer;

impl GithubRecognizer {
    /// Create a new recognizer
    pub fn new() -> Self {
        Self
    }
}

impl Default for GithubRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketRecognizer for GithubRecognizer {
    fn dialect(&self) -> TicketDialect {
        TicketDialect::Github
    }

    fn recognize(&self, commit: &str, ticket_url: &dyn Fn(&str) -> String) -> Vec<TicketRef> {
        GITHUB_REGEX
            .captures_iter(commit)
            .map(|caps| {
                let ref_type = &caps[1];
                let id = &caps[2];

                // Anything before the `#` is an owner/repo qualifier; it is
                // self-describing and overrides the configured template.
                match ref_type.strip_suffix('#').filter(|q| !q.is_empty()) {
                    Some(qualifier) => TicketRef {
                        label: format!("{qualifier}#{id}"),
                        url: format!("https://github.com/{qualifier}/issues/{id}"),
                    },
                    None => TicketRef {
                        label: format!("#{id}"),
                        url: ticket_url(id),
                    },
                }
            })
            .collect()
    }
}
