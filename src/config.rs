//! Configuration file support for security-alert-sync.
//!
//! Provides YAML-based configuration through `security-alert-sync.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::SyncError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "security-alert-sync.config.yml";
pub const DEFAULT_MANIFEST: &str = "composer.lock";
pub const DEFAULT_STORE: &str = "security-alerts.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// URL of the advisory service endpoint
    pub checker_url: Option<String>,
    /// Path to the manifest of installed packages
    pub manifest: Option<PathBuf>,
    /// Path to the JSON alert store
    pub store: Option<PathBuf>,
    /// Request timeout for the advisory service, in seconds
    pub timeout_seconds: Option<u64>,
    /// Output format: text or json
    pub format: Option<String>,
    /// Exit with code 1 when alerts remain after synchronization
    pub fail_on_alerts: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = config.checker_url.as_deref().filter(|url| !url.is_empty()) {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SyncError::InvalidConfig {
                message: format!("checker_url must be an http(s) URL, got '{}'", url),
                hint: "Set checker_url to the advisory service endpoint (e.g. \"https://security.example.com/check_lock\").".to_string(),
            }
            .into());
        }
    }

    if config.timeout_seconds == Some(0) {
        return Err(SyncError::InvalidConfig {
            message: "timeout_seconds must be greater than 0".to_string(),
            hint: "Remove timeout_seconds to use the default of 30 seconds.".to_string(),
        }
        .into());
    }

    if let Some(format) = config.format.as_deref() {
        format
            .parse::<crate::application::dto::OutputFormat>()
            .map_err(|message| SyncError::InvalidConfig {
                message,
                hint: "Use format: text or format: json.".to_string(),
            })?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
