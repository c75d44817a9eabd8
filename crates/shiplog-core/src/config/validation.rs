//! Configuration validation

use tracing::debug;

use crate::error::ConfigError;

use super::types::ChangelogConfig;

/// Validate a configuration for a run.
///
/// Missing or malformed configuration is a startup error; parsing itself
/// never fails, so everything checkable is checked here.
pub fn validate_config(config: &ChangelogConfig) -> std::result::Result<(), ConfigError> {
    debug!("validating configuration");

    if config.committish.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "committish".to_string(),
            message: "a commit range is required".to_string(),
        });
    }

    if config.commit_url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "commit_url".to_string(),
            message: "a commit URL template is required".to_string(),
        });
    }

    if !config.commit_url.contains("{id}") {
        return Err(ConfigError::InvalidValue {
            field: "commit_url".to_string(),
            message: "must contain {id} placeholder".to_string(),
        });
    }

    if config.ticket_types.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "ticket_types".to_string(),
            message: "at least one dialect must be enabled".to_string(),
        });
    }

    let templates = config.ticket_url_templates();
    for dialect in &config.ticket_types {
        match templates.get(dialect) {
            None => return Err(ConfigError::MissingTicketUrl(*dialect)),
            Some(template) if !template.contains("{id}") => {
                return Err(ConfigError::InvalidValue {
                    field: format!("ticket_urls.{dialect}"),
                    message: "must contain {id} placeholder".to_string(),
                });
            }
            Some(_) => {}
        }
    }

    debug!("configuration validation passed");
    Ok(())
}
