//! Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::api::Credentials;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Remote service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Login used to obtain the bearer token
    #[serde(default)]
    pub credentials: Credentials,
}

/// Remote service settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Base address of the Foody API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:86".to_string()
}

fn default_user_agent() -> String {
    "foody-api-tests".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used if present, otherwise defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::read(&path);
            }
        }
        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        if let Some(url) = base_url {
            self.service.base_url = url;
        }
        if let Some(user) = username {
            self.credentials.username = user;
        }
        if let Some(pass) = password {
            self.credentials.password = pass;
        }
        self
    }

    /// Validated base URL with any trailing slash removed
    pub fn base_url(&self) -> Result<String> {
        let trimmed = self.service.base_url.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", trimmed, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(Error::Config(format!(
                "Unsupported base URL scheme '{}'. Use http or https",
                other
            ))),
        }
    }

    /// Render the effective configuration as TOML with the password hidden
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.credentials.password = "********".to_string();
        toml::to_string_pretty(&shown).map_err(|e| Error::Config(e.to_string()))
    }
}
