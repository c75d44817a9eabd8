//! CLI definition and command handling

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use console::style;
use tracing::info;

use shiplog_changelog::Changelog;
use shiplog_core::config::{load_config, load_config_or_default, ChangelogConfig, TicketUrls};
use shiplog_core::TicketDialect;
use shiplog_git::GitRepo;

/// Shiplog - turn a git commit range into a formatted changelog
#[derive(Debug, Parser)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Commit range to include, e.g. `v1.0.0..HEAD`
    pub committish: Option<String>,

    /// Commit URL template containing an `{id}` placeholder
    #[arg(long, value_name = "TEMPLATE")]
    pub commit_url: Option<String>,

    /// Ticket URL template: one bare TEMPLATE or repeated DIALECT=TEMPLATE pairs
    #[arg(long = "ticket-url", value_name = "[DIALECT=]TEMPLATE")]
    pub ticket_urls: Vec<String>,

    /// Enabled ticket dialects, in application order
    #[arg(long = "ticket-type", value_name = "DIALECT", value_parser = TicketDialect::from_str)]
    pub ticket_types: Vec<TicketDialect>,

    /// Keep log order instead of grouping by component
    #[arg(long)]
    pub no_sort: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: search for shiplog.toml and variants)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }
        let cwd = std::env::current_dir()?;

        let (mut config, config_path) = match &self.config {
            Some(path) => (load_config(path)?, Some(path.clone())),
            None => load_config_or_default(&cwd),
        };
        self.apply_overrides(&mut config)?;

        info!(config = ?config_path, committish = %config.committish, "starting changelog run");

        let changelog = Changelog::new(config)?;
        let repo = GitRepo::discover(&cwd)?;

        if self.verbose && !self.quiet {
            eprintln!("{}", style(format!("repository: {}", repo.path().display())).dim());
        }

        let document = changelog.generate(&repo)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &document)?;
                if !self.quiet {
                    eprintln!(
                        "{}",
                        style(format!("Wrote changelog to {}", path.display())).green()
                    );
                }
            }
            None => print!("{document}"),
        }

        Ok(())
    }

    /// CLI arguments override file configuration
    fn apply_overrides(&self, config: &mut ChangelogConfig) -> anyhow::Result<()> {
        if let Some(committish) = &self.committish {
            config.committish = committish.clone();
        }
        if let Some(commit_url) = &self.commit_url {
            config.commit_url = commit_url.clone();
        }
        if !self.ticket_types.is_empty() {
            config.ticket_types = self.ticket_types.clone();
        }
        if !self.ticket_urls.is_empty() {
            config.ticket_urls = parse_ticket_urls(&self.ticket_urls)?;
        }
        if self.no_sort {
            config.sort = false;
        }
        Ok(())
    }
}

/// Parse repeated `--ticket-url` arguments.
///
/// An argument whose text before the first `=` names a dialect is a
/// per-dialect template; anything else is a bare template and only valid
/// on its own.
fn parse_ticket_urls(args: &[String]) -> anyhow::Result<TicketUrls> {
    let mut map = BTreeMap::new();
    let mut bare = Vec::new();

    for arg in args {
        let dialect_template = arg
            .split_once('=')
            .and_then(|(dialect, template)| {
                TicketDialect::from_str(dialect)
                    .ok()
                    .map(|dialect| (dialect, template))
            });

        match dialect_template {
            Some((dialect, template)) => {
                map.insert(dialect, template.to_string());
            }
            None => bare.push(arg.clone()),
        }
    }

    match (bare.as_slice(), map.is_empty()) {
        ([], _) => Ok(TicketUrls::PerDialect(map)),
        ([template], true) => Ok(TicketUrls::Single(template.clone())),
        _ => anyhow::bail!("pass either one bare ticket URL template or DIALECT=TEMPLATE pairs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "shiplog",
            "v1.0.0..HEAD",
            "--commit-url",
            "http://example.com/commit/{id}/",
            "--ticket-url",
            "github=GH/{id}",
            "--ticket-url",
            "jira=JIRA/{id}",
            "--ticket-type",
            "github",
            "--ticket-type",
            "jira",
            "--no-sort",
        ])
        .unwrap();

        assert_eq!(cli.committish.as_deref(), Some("v1.0.0..HEAD"));
        assert_eq!(
            cli.ticket_types,
            vec![TicketDialect::Github, TicketDialect::Jira]
        );
        assert!(cli.no_sort);
    }

    #[test]
    fn test_unknown_dialect_rejected() {
        let result = Cli::try_parse_from(["shiplog", "--ticket-type", "bugzilla"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_single_bare_template() {
        let urls = parse_ticket_urls(&["http://x/{id}/".to_string()]).unwrap();
        assert!(matches!(urls, TicketUrls::Single(ref t) if t == "http://x/{id}/"));
    }

    #[test]
    fn test_parse_per_dialect_templates() {
        let urls = parse_ticket_urls(&[
            "github=GH/{id}".to_string(),
            "jira=JIRA/{id}".to_string(),
        ])
        .unwrap();

        match urls {
            TicketUrls::PerDialect(map) => {
                assert_eq!(map.get(&TicketDialect::Jira).map(String::as_str), Some("JIRA/{id}"));
            }
            TicketUrls::Single(_) => panic!("expected per-dialect templates"),
        }
    }

    #[test]
    fn test_bare_template_with_query_string() {
        // `=` inside the template must not be mistaken for a dialect name.
        let urls = parse_ticket_urls(&["http://x/?ticket={id}&view=full".to_string()]).unwrap();
        assert!(matches!(urls, TicketUrls::Single(_)));
    }

    #[test]
    fn test_mixed_bare_and_per_dialect_rejected() {
        let result = parse_ticket_urls(&[
            "http://x/{id}/".to_string(),
            "jira=JIRA/{id}".to_string(),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_replace_file_config() {
        let cli = Cli::try_parse_from([
            "shiplog",
            "alpha..omega",
            "--ticket-type",
            "jira",
            "--no-sort",
        ])
        .unwrap();

        let mut config = ChangelogConfig {
            committish: "old..range".to_string(),
            ..ChangelogConfig::default()
        };
        cli.apply_overrides(&mut config).unwrap();

        assert_eq!(config.committish, "alpha..omega");
        assert_eq!(config.ticket_types, vec![TicketDialect::Jira]);
        assert!(!config.sort);
    }
}
