//! Configuration file support for sw360-obligations.
//!
//! Provides YAML-based configuration through `sw360-obligations.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{ColumnLabels, OutputFormat, MAX_CONCURRENT_FETCHES_LIMIT};
use crate::shared::error::ObligationError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sw360-obligations.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub auth_scheme: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub max_concurrent_fetches: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub column_labels: Option<ColumnLabels>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    log::info!("Loaded configuration from {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn config_error(details: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    ObligationError::ConfigError {
        details: details.into(),
        hint: hint.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(base_url) = &config.base_url {
        if base_url.trim().is_empty() {
            return Err(config_error(
                "base_url must not be empty",
                "Set base_url to the REST root, e.g. https://sw360.example.org/resource/api",
            ));
        }
    }

    if let Some(scheme) = &config.auth_scheme {
        if scheme.trim().is_empty() || scheme.chars().any(char::is_whitespace) {
            return Err(config_error(
                format!("auth_scheme '{}' is not a single word", scheme),
                "Use 'Bearer' for OAuth tokens or 'Token' for REST API tokens",
            ));
        }
    }

    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|e| {
            config_error(e, "Valid values for format are 'json' and 'markdown'")
        })?;
    }

    if let Some(limit) = config.max_concurrent_fetches {
        if limit == 0 || limit > MAX_CONCURRENT_FETCHES_LIMIT {
            return Err(config_error(
                format!("max_concurrent_fetches must be between 1 and {}", MAX_CONCURRENT_FETCHES_LIMIT),
                "Use 1 to fetch obligations one project at a time",
            ));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(config_error(
            "timeout_secs must be greater than 0",
            "Remove timeout_secs to use the default of 30 seconds",
        ));
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
}
