//! Configuration types

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A supported ticket-reference dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketDialect {
    /// Tracker-style references: `#123`, `owner/repo#123`, `gh-123`
    Github,
    /// Issue-key references: `PROJ-123`
    Jira,
}

impl TicketDialect {
    /// Get the dialect name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Jira => "jira",
        }
    }
}

impl fmt::Display for TicketDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketDialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "jira" => Ok(Self::Jira),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}

/// Ticket URL template(s).
///
/// A single template is shorthand for "template of the first enabled
/// dialect"; any further enabled dialect is then left without a template
/// and rejected by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketUrls {
    /// One template, bound to the first enabled dialect
    Single(String),
    /// One template per dialect
    PerDialect(BTreeMap<TicketDialect, String>),
}

impl Default for TicketUrls {
    fn default() -> Self {
        Self::PerDialect(BTreeMap::new())
    }
}

/// Main configuration for a changelog run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Range/revision expression passed to the log query
    pub committish: String,

    /// Commit URL template containing an `{id}` placeholder
    pub commit_url: String,

    /// Enabled dialects, in application order
    pub ticket_types: Vec<TicketDialect>,

    /// Ticket URL template(s), each containing an `{id}` placeholder
    pub ticket_urls: TicketUrls,

    /// Group lines by component prefix (default) or keep log order
    pub sort: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            committish: String::new(),
            commit_url: String::new(),
            ticket_types: vec![TicketDialect::Github],
            ticket_urls: TicketUrls::default(),
            sort: true,
        }
    }
}

impl ChangelogConfig {
    /// Resolve the configured templates into a per-dialect map
    pub fn ticket_url_templates(&self) -> BTreeMap<TicketDialect, String> {
        match &self.ticket_urls {
            TicketUrls::Single(template) => self
                .ticket_types
                .first()
                .map(|dialect| (*dialect, template.clone()))
                .into_iter()
                .collect(),
            TicketUrls::PerDialect(map) => map.clone(),
        }
    }
}
