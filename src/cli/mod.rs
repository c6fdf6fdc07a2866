//! Shared CLI arguments and client construction

use std::path::PathBuf;

use crate::auth::ServiceAccountKey;
use crate::client::DirectoryClient;
use crate::config::Config;
use crate::error::Result;

pub mod list;
pub mod lookup;

/// Options shared by both tools.
///
/// Precedence per field: CLI flag > environment variable > config file >
/// built-in default.
#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Path to config file
    #[arg(long, env = "GAPPS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the service-account key file
    #[arg(long, env = "GAPPS_CREDENTIALS", value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Admin account to impersonate via domain-wide delegation
    #[arg(long, env = "GAPPS_SUBJECT", value_name = "EMAIL")]
    pub subject: Option<String>,

    /// Directory API host override, for testing
    #[arg(long, env = "GAPPS_API_HOST", value_name = "URL")]
    pub api_host: Option<String>,
}

impl CommonArgs {
    /// Load configuration and apply these overrides on top
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load_at(self.config.as_deref())?;

        if let Some(ref credentials) = self.credentials {
            config.credentials_file = credentials.clone();
        }
        if let Some(ref subject) = self.subject {
            config.subject = subject.clone();
        }
        if let Some(ref api_host) = self.api_host {
            config.api_host = Some(api_host.clone());
        }

        Ok(config)
    }
}

/// Build a Directory API client from resolved configuration
pub fn build_client(config: &Config) -> Result<DirectoryClient> {
    let key = ServiceAccountKey::from_file(&config.credentials_file)?;
    let mut client = DirectoryClient::new(key, &config.subject)?;

    if let Some(ref api_host) = config.api_host {
        client = client.with_base_url(api_host);
    }

    Ok(client)
}
