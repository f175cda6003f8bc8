//! Configuration loading from disk.
//!
//! # Responsibilities
//! - Parse TOML into the raw schema (syntactic, via serde)
//! - Semantic validation (hosts non-empty and unique, prefixes non-empty)
//! - Surface load-time failures as one error type
//!
//! # Design Decisions
//! - Any loader error is fatal to startup; there is no partial load
//! - Validation returns all errors, not just the first

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server {index} has an empty host")]
    EmptyHost { index: usize },

    #[error("duplicate server host `{host}`")]
    DuplicateHost { host: String },

    #[error("server `{host}`: location {index} has an empty path_prefix")]
    EmptyPathPrefix { host: String, index: usize },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

/// Semantic checks over the deserialized config.
fn validate_config(config: &AppConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_hosts = Vec::new();

    for (index, server) in config.servers.iter().enumerate() {
        if server.host.is_empty() {
            errors.push(ValidationError::EmptyHost { index });
        }

        let host = server.host.to_lowercase();
        if seen_hosts.contains(&host) {
            errors.push(ValidationError::DuplicateHost { host: host.clone() });
        }
        seen_hosts.push(host);

        for (loc_index, location) in server.locations.iter().enumerate() {
            if location.path_prefix.is_empty() {
                errors.push(ValidationError::EmptyPathPrefix {
                    host: server.host.clone(),
                    index: loc_index,
                });
            }
        }
    }

    errors
}
