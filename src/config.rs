//! Configuration file support for artifact-scan.
//!
//! Provides YAML-based configuration through `artifact-scan.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::shared::error::AppError;
use crate::shared::{Credentials, Result, ServiceDetails};

pub const CONFIG_FILENAME: &str = "artifact-scan.config.yml";

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags fill or override them.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    /// Base URL of the scanner service
    pub xray_url: Option<String>,
    /// Base URL of the artifact repository (build info)
    pub artifactory_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub max_wait_minutes: Option<u64>,
    pub project: Option<String>,
    pub repo_path: Option<String>,
    pub watches: Option<Vec<String>>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
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

/// Validate a configuration, loaded or merged.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, url) in [
        ("xray_url", &config.xray_url),
        ("artifactory_url", &config.artifactory_url),
    ] {
        if let Some(url) = url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!(
                    "Invalid config: {} '{}' is not an HTTP URL.\n\n\
                     💡 Hint: The URL must start with http:// or https://.",
                    field,
                    url
                );
            }
        }
    }

    if config.max_wait_minutes == Some(0) {
        bail!(
            "Invalid config: max_wait_minutes must be greater than 0.\n\n\
             💡 Hint: Omit the field to wait the default 15 minutes."
        );
    }

    if let Some(format) = &config.log_format {
        if !LOG_FORMATS.contains(&format.as_str()) {
            bail!(
                "Invalid config: log_format '{}' is not supported.\n\n\
                 💡 Hint: Use 'pretty' or 'json'.",
                format
            );
        }
    }

    if config.password.is_some() && config.user.is_none() {
        bail!(
            "Invalid config: password is set without user.\n\n\
             💡 Hint: Set 'user' as well, or use 'access_token' instead."
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

impl ConfigFile {
    /// Layers `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merged_with(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            xray_url: overrides.xray_url.or(self.xray_url),
            artifactory_url: overrides.artifactory_url.or(self.artifactory_url),
            user: overrides.user.or(self.user),
            password: overrides.password.or(self.password),
            access_token: overrides.access_token.or(self.access_token),
            max_wait_minutes: overrides.max_wait_minutes.or(self.max_wait_minutes),
            project: overrides.project.or(self.project),
            repo_path: overrides.repo_path.or(self.repo_path),
            watches: overrides
                .watches
                .filter(|w| !w.is_empty())
                .or(self.watches),
            log_level: overrides.log_level.or(self.log_level),
            log_format: overrides.log_format.or(self.log_format),
            unknown_fields: self.unknown_fields,
        }
    }

    /// Credentials to attach to every request. An access token wins over
    /// user/password.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = self.access_token.as_ref().filter(|t| !t.is_empty()) {
            return Some(Credentials::AccessToken(token.clone()));
        }
        self.user.as_ref().map(|user| Credentials::Basic {
            user: user.clone(),
            password: self.password.clone().unwrap_or_default(),
        })
    }

    /// Maximum wait for scan results; zero means the service default.
    pub fn max_wait(&self) -> Duration {
        self.max_wait_minutes
            .map(|minutes| Duration::from_secs(minutes.saturating_mul(60)))
            .unwrap_or(Duration::ZERO)
    }

    /// Scanner service details, required by `scan`.
    pub fn scanner_details(&self) -> Result<ServiceDetails> {
        self.service_details(self.xray_url.as_deref(), "xray_url", "--xray-url")
    }

    /// Artifact repository service details, required by the build commands.
    pub fn repository_details(&self) -> Result<ServiceDetails> {
        self.service_details(
            self.artifactory_url.as_deref(),
            "artifactory_url",
            "--artifactory-url",
        )
    }

    fn service_details(&self, url: Option<&str>, field: &str, flag: &str) -> Result<ServiceDetails> {
        let url = url.filter(|u| !u.trim().is_empty()).ok_or_else(|| AppError::MissingConfig {
            field: field.to_string(),
            hint: format!(
                "Pass {} or set '{}' in {}",
                flag, field, CONFIG_FILENAME
            ),
        })?;

        let details = ServiceDetails::new(url);
        Ok(match self.credentials() {
            Some(credentials) => details.with_credentials(credentials),
            None => details,
        })
    }
}
