//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::ChangelogConfig;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<ChangelogConfig> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: ChangelogConfig = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::Toml)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::Yaml)?
    };

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Find a configuration file in a directory or its parents.
///
/// The first name from [`config_file_names`] that exists wins; parents are
/// walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from a directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(ChangelogConfig, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (ChangelogConfig, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(_) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            (ChangelogConfig::default(), None)
        }
    }
}
