//! Commit record parsing

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use shiplog_core::TicketDialect;

use crate::tickets::{recognizer_for, TicketRecognizer, TicketRef};
use crate::TICKET_PLACEHOLDER;

static CHERRY_PICK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(cherry picked from commit [^)]+\)").expect("Invalid regex"));

/// Turns one raw commit chunk into one formatted changelog line
pub struct CommitParser {
    recognizers: Vec<Box<dyn TicketRecognizer>>,
    templates: BTreeMap<TicketDialect, String>,
}

impl CommitParser {
    /// Build a parser for an ordered set of dialects.
    ///
    /// Dialect order is application order. Configuration validation must
    /// already have ensured every dialect has a template.
    pub fn new(dialects: &[TicketDialect], templates: BTreeMap<TicketDialect, String>) -> Self {
        Self {
            recognizers: dialects.iter().copied().map(recognizer_for).collect(),
            templates,
        }
    }

    /// Resolve a ticket id against a dialect's URL template.
    ///
    /// Defaults to the first enabled dialect.
    pub fn ticket_url(&self, id: &str, dialect: Option<TicketDialect>) -> String {
        dialect
            .or_else(|| self.recognizers.first().map(|r| r.dialect()))
            .and_then(|dialect| self.templates.get(&dialect))
            .map(|template| template.replace("{id}", id))
            .unwrap_or_default()
    }

    /// Collect ticket references from the full raw chunk: dialect order
    /// first, then within-dialect match order.
    fn tickets(&self, commit: &str) -> Vec<TicketRef> {
        let mut tickets = Vec::new();

        for recognizer in &self.recognizers {
            let dialect = recognizer.dialect();
            let resolve = |id: &str| self.ticket_url(id, Some(dialect));
            tickets.extend(recognizer.recognize(commit, &resolve));
        }

        tickets
    }

    /// Reduce one raw commit chunk to a single formatted line
    pub fn parse_commit(&self, commit: &str) -> String {
        let tickets = self.tickets(commit);

        // Only the subject survives; the body is scanned above so that
        // "Fixes #123" style references outside the subject still count.
        let summary = commit.lines().next().unwrap_or("");
        let mut parsed = format!("* {summary}");

        // The placeholder stays in place when nothing matched, so callers
        // can find commits without tickets.
        if !tickets.is_empty() {
            let links = tickets
                .iter()
                .map(|ticket| format!("[{}]({})", ticket.label, ticket.url))
                .collect::<Vec<_>>()
                .join(", ");
            parsed = parsed.replacen(TICKET_PLACEHOLDER, &links, 1);
        }

        let parsed = CHERRY_PICK_REGEX.replace(&parsed, "").into_owned();
        trace!(tickets = tickets.len(), line = %parsed, "parsed commit record");
        parsed
    }
}
