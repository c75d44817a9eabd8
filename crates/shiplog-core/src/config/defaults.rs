//! Configuration defaults

/// Candidate configuration file names, in priority order
pub fn config_file_names() -> &'static [&'static str] {
    &[
        "shiplog.toml",
        ".shiplog.toml",
        "shiplog.yaml",
        "shiplog.yml",
    ]
}
