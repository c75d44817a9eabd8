//! Issue-key ticket references
//!
//! Matches case-sensitive `Fix`/`Fixes`/`Fixed` followed by a capitalized
//! issue key such as `PROJ-456`. The grammar is deliberately permissive: a
//! short project-key segment followed by a further letter run and a numeric
//! suffix.

use std::sync::LazyLock;

use regex::Regex;

use shiplog_core::TicketDialect;

use super::{TicketRecognizer, TicketRef};

static JIRA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Fix(?:e[sd])? ((?:[A-Z]{1,10}-?)[A-Z]+-\d+)").expect("Invalid regex"));

/// Recognizer for issue-key references
pub struct JiraRecognizer;

impl JiraRecognizer {
    /// Create a new recognizer
    pub fn new() -> Self {
        Self
    }
}

impl Default for JiraRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketRecognizer for JiraRecognizer {
    fn dialect(&self) -> TicketDialect {
        TicketDialect::Jira
    }

    fn recognize(&self, commit: &str, ticket_url: &dyn Fn(&str) -> String) -> Vec<TicketRef> {
        JIRA_REGEX
            .captures_iter(commit)
            .map(|caps| {
                let key = &caps[1];
                TicketRef {
                    label: key.to_string(),
                    url: ticket_url(key),
                }
            })
            .collect()
    }
}
