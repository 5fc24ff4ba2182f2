/*
[INPUT]:  Optional YAML file plus XFIGHTER_* environment variables
[OUTPUT]: Validated CLI settings and the client config built from them
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use serde::Deserialize;
use xfighter::ClientConfig;
use xfighter::http::client::DEFAULT_BASE_URL;

const ENV_PREFIX: &str = "XFIGHTER";

/// Settings shared by every subcommand
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// API root, e.g. "https://api.stockfighter.io/ob/api"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Trading account used when a command does not name one
    #[serde(default)]
    pub account: Option<String>,
    /// Venue used when a command does not name one
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Settings {
    /// Load settings from `path` (if given) with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings: Self = builder
            .add_source(env)
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    pub fn venue_or(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| self.venue.clone())
            .context("no venue given; pass --venue or set XFIGHTER_VENUE")
    }

    pub fn account_or(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| self.account.clone())
            .context("no account given; pass --account or set XFIGHTER_ACCOUNT")
    }
}
