//! The changelog pipeline

use tracing::{debug, info, instrument};

use shiplog_core::config::validate_config;
use shiplog_core::{ChangelogConfig, ConfigError, LogSource, Result, TicketDialect};

use crate::assembler::{ChangelogAssembler, SortMode};
use crate::parser::CommitParser;
use crate::{COMMIT_DELIMITER, TICKET_PLACEHOLDER};

/// One changelog run: a validated configuration plus the parser and
/// assembler built from it.
///
/// Constructed once; all operations take `&self` and are side-effect free
/// apart from the log fetch.
pub struct Changelog {
    config: ChangelogConfig,
    parser: CommitParser,
    assembler: ChangelogAssembler,
}

impl Changelog {
    /// Build a pipeline from configuration.
    ///
    /// Missing URL templates for enabled dialects and other configuration
    /// mistakes fail here, not during parsing.
    pub fn new(config: ChangelogConfig) -> std::result::Result<Self, ConfigError> {
        validate_config(&config)?;

        let parser = CommitParser::new(&config.ticket_types, config.ticket_url_templates());
        let sort = if config.sort {
            SortMode::Component
        } else {
            SortMode::Unsorted
        };

        Ok(Self {
            config,
            parser,
            assembler: ChangelogAssembler::new(sort),
        })
    }

    /// Use a caller-supplied ordering instead of the default grouping
    pub fn with_sorter<F>(mut self, sorter: F) -> Self
    where
        F: Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static,
    {
        self.assembler = ChangelogAssembler::new(SortMode::Custom(Box::new(sorter)));
        self
    }

    /// The log format template for this run.
    ///
    /// Emits the delimiter before each record, then the subject with the
    /// ticket placeholder and a markdown commit link, then the body.
    pub fn log_format(&self) -> String {
        let commit_url = self.config.commit_url.replace("{id}", "%H");
        format!("{COMMIT_DELIMITER}%n%s ({TICKET_PLACEHOLDER}, [%h]({commit_url}))%n%b")
    }

    /// Fetch the log and produce the finished document.
    ///
    /// A fetch failure is returned unmodified; parsing itself never fails.
    #[instrument(skip(self, source), fields(committish = %self.config.committish))]
    pub fn generate(&self, source: &dyn LogSource) -> Result<String> {
        info!(committish = %self.config.committish, "generating changelog");
        let raw = source.fetch_log(&self.log_format(), &self.config.committish)?;
        Ok(self.parse_commits(&raw))
    }

    /// Split raw delimited log text into records and reduce them to the
    /// final document.
    pub fn parse_commits(&self, raw: &str) -> String {
        let delimiter = format!("{COMMIT_DELIMITER}\n");

        // Text before the first delimiter is not a commit record.
        let lines: Vec<String> = raw
            .split(delimiter.as_str())
            .skip(1)
            .map(|chunk| self.parser.parse_commit(chunk))
            .collect();

        debug!(count = lines.len(), "parsed commit records");
        self.assembler.assemble(lines)
    }

    /// Resolve a ticket id to a URL; defaults to the first enabled dialect
    pub fn ticket_url(&self, id: &str, dialect: Option<TicketDialect>) -> String {
        self.parser.ticket_url(id, dialect)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use shiplog_core::{GitError, TicketUrls};

    struct StubSource {
        log: String,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl StubSource {
        fn new(log: &str) -> Self {
            Self {
                log: log.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LogSource for StubSource {
        fn fetch_log(&self, format: &str, committish: &str) -> std::result::Result<String, GitError> {
            self.calls
                .borrow_mut()
                .push((format.to_string(), committish.to_string()));
            Ok(self.log.clone())
        }
    }

    struct FailingSource;

    impl LogSource for FailingSource {
        fn fetch_log(&self, _: &str, _: &str) -> std::result::Result<String, GitError> {
            Err(GitError::CommandFailed {
                command: "log".to_string(),
                status: 128,
                stderr: "fatal: bad revision".to_string(),
            })
        }
    }

    fn config() -> ChangelogConfig {
        ChangelogConfig {
            committish: "alpha..omega".to_string(),
            commit_url: "http://example.com/commit/{id}/".to_string(),
            ticket_urls: TicketUrls::Single("http://example.com/ticket/{id}/".to_string()),
            ..ChangelogConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut bad = config();
        bad.commit_url = String::new();
        assert!(Changelog::new(bad).is_err());
    }

    #[test]
    fn test_log_format_embeds_commit_url() {
        let changelog = Changelog::new(config()).unwrap();

        assert_eq!(
            changelog.log_format(),
            "__COMMIT__%n%s (__TICKETREF__, [%h](http://example.com/commit/%H/))%n%b"
        );
    }

    #[test]
    fn test_ticket_url_replacement() {
        let changelog = Changelog::new(config()).unwrap();
        assert_eq!(
            changelog.ticket_url("37", None),
            "http://example.com/ticket/37/"
        );
    }

    #[test]
    fn test_generate_passes_format_and_committish() {
        let changelog = Changelog::new(config()).unwrap();
        let source = StubSource::new("");

        changelog.generate(&source).unwrap();

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, changelog.log_format());
        assert_eq!(calls[0].1, "alpha..omega");
    }

    #[test]
    fn test_generate_surfaces_fetch_error() {
        let changelog = Changelog::new(config()).unwrap();

        let err = changelog.generate(&FailingSource).unwrap_err();
        assert!(matches!(
            err,
            shiplog_core::ShiplogError::Git(GitError::CommandFailed { status: 128, .. })
        ));
    }

    #[test]
    fn test_generate_full_pipeline() {
        let changelog = Changelog::new(config()).unwrap();
        let source = StubSource::new(concat!(
            "__COMMIT__\n",
            "core: speed up parsing (__TICKETREF__, [abc1234](http://example.com/commit/abc1234def/))\n",
            "Fixes #37\n",
            "__COMMIT__\n",
            "api: add pagination (__TICKETREF__, [5678abc](http://example.com/commit/5678abcdef/))\n",
            "\n",
        ));

        let document = changelog.generate(&source).unwrap();

        assert_eq!(
            document,
            "* api: add pagination (__TICKETREF__, [5678abc](http://example.com/commit/5678abcdef/))\n\
             * core: speed up parsing ([#37](http://example.com/ticket/37/), [abc1234](http://example.com/commit/abc1234def/))\n"
        );
    }

    #[test]
    fn test_parse_commits_line_count_matches_delimiters() {
        let changelog = Changelog::new(config()).unwrap();
        let raw = "__COMMIT__\na (__TICKETREF__)\n__COMMIT__\nb (__TICKETREF__)\n__COMMIT__\nc (__TICKETREF__)\n";

        let document = changelog.parse_commits(raw);
        let line_count = document.trim_end_matches('\n').lines().count();

        assert_eq!(line_count, raw.matches("__COMMIT__\n").count());
    }

    #[test]
    fn test_unsorted_preserves_log_order() {
        let mut unsorted = config();
        unsorted.sort = false;
        let changelog = Changelog::new(unsorted).unwrap();

        let raw = "__COMMIT__\nomega: foo (__TICKETREF__)\n__COMMIT__\nalpha: foo (__TICKETREF__)\n";
        assert_eq!(
            changelog.parse_commits(raw),
            "* omega: foo (__TICKETREF__)\n* alpha: foo (__TICKETREF__)\n"
        );
    }

    #[test]
    fn test_custom_sorter_is_used_verbatim() {
        let changelog = Changelog::new(config()).unwrap().with_sorter(|mut lines| {
            lines.reverse();
            lines
        });

        let raw = "__COMMIT__\na (__TICKETREF__)\n__COMMIT__\nb (__TICKETREF__)\n";
        assert_eq!(
            changelog.parse_commits(raw),
            "* b (__TICKETREF__)\n* a (__TICKETREF__)\n"
        );
    }

    #[test]
    fn test_empty_log_yields_single_newline() {
        let changelog = Changelog::new(config()).unwrap();
        assert_eq!(changelog.parse_commits(""), "\n");
    }
}
