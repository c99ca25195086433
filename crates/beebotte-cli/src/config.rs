/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration, client config and credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use beebotte_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the command-line client
#[derive(Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Access key sent with signed requests
    pub key_id: String,
    /// Secret key used to sign requests; never printed
    pub secret_key: String,
    /// API host including scheme
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("key_id", &self.key_id)
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

fn default_hostname() -> String {
    ClientConfig::default().hostname
}

fn default_port() -> u16 {
    ClientConfig::default().port
}

fn default_timeout_secs() -> u64 {
    ClientConfig::default().timeout.as_secs()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse yaml config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.key_id.trim().is_empty() {
            bail!("key_id must not be empty");
        }
        if self.secret_key.is_empty() {
            bail!("secret_key must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        self.client_config()
            .base_url()
            .context("hostname/port do not form a valid URL")?;
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.key_id.clone(), self.secret_key.clone())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            hostname: self.hostname.clone(),
            port: self.port,
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}
