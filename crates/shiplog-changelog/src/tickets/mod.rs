//! Ticket reference recognition

mod github;
mod jira;

pub use github::GithubRecognizer;
pub use jira::JiraRecognizer;

use shiplog_core::TicketDialect;

/// A recognized in-text reference to an external ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRef {
    /// Link text, e.g. `#37` or `PROJ-456`
    pub label: String,
    /// Resolved hyperlink target
    pub url: String,
}

/// Recognizes one ticket-reference dialect in free-form commit text.
///
/// Recognizers scan the same raw text independently and never mutate it;
/// their results are concatenated in dialect order, not interleaved by
/// text position. Overlapping matches across dialects are not de-duplicated.
pub trait TicketRecognizer: Send + Sync {
    /// The dialect this recognizer handles
    fn dialect(&self) -> TicketDialect;

    /// Collect references in left-to-right match order.
    ///
    /// `ticket_url` maps a ticket id to its hyperlink target using the
    /// dialect's configured template.
    fn recognize(&self, commit: &str, ticket_url: &dyn Fn(&str) -> String) -> Vec<TicketRef>;
}

/// Build the recognizer for a dialect
pub fn recognizer_for(dialect: TicketDialect) -> Box<dyn TicketRecognizer> {
    match dialect {
        TicketDialect::Github => Box::new(GithubRecognizer::new()),
        TicketDialect::Jira => Box::new(JiraRecognizer::new()),
    }
}
