//! Configuration for the email admin tools
//!
//! Settings come from a YAML file with built-in defaults matching the
//! production deployment. CLI flags override individual fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// System-wide config location checked when no user config exists
const SYSTEM_CONFIG_PATH: &str = "/etc/mysociety/gapps-email.yaml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the service-account key file (Google JSON format)
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Admin account the service account impersonates via delegation
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Workspace domain to list groups for
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Customer ID for user listing (`my_customer` means "our own domain")
    #[serde(default = "default_customer")]
    pub customer: String,

    /// Directory API host override, for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("/etc/mysociety/google_apps_api_key.json")
}

fn default_subject() -> String {
    "api-target-user@mysociety.org".to_string()
}

fn default_domain() -> String {
    "mysociety.org".to_string()
}

fn default_customer() -> String {
    "my_customer".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
            subject: default_subject(),
            domain: default_domain(),
            customer: default_customer(),
            api_host: None,
        }
    }
}

impl Config {
    /// Get the per-user config file path
    pub fn user_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".gapps-email").join("config.yaml"))
    }

    /// Load configuration, optionally from an explicit path.
    ///
    /// An explicitly given path must exist. Otherwise the per-user and
    /// system locations are tried in turn, falling back to defaults.
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()).into());
            }
            return Self::load_from(path);
        }

        let user_path = Self::user_path()?;
        if user_path.exists() {
            return Self::load_from(&user_path);
        }

        let system_path = Path::new(SYSTEM_CONFIG_PATH);
        if system_path.exists() {
            return Self::load_from(system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }
}
