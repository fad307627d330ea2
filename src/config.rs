//! Service configuration.
//!
//! Values come from an optional `trophies.toml` next to the binary, then from
//! the process environment, which always wins:
//!
//!   GITHUB_TOKEN (or ACCESS_TOKEN)  bearer token for the GraphQL API, required
//!   HOST                            bind address, default 0.0.0.0
//!   PORT                            bind port, default 3000
//!   GRAPHQL_URL                     API endpoint, default api.github.com

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::github::GITHUB_GRAPHQL_URL;

const CONFIG_FILE: &str = "trophies.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github_token: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphql_url() -> String {
    GITHUB_GRAPHQL_URL.to_string()
}

impl Config {
    /// Load from `trophies.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if Path::new(CONFIG_FILE).exists() {
            tracing::info!("loading configuration from {CONFIG_FILE}");
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }

        // ACCESS_TOKEN is accepted as an alias; GITHUB_TOKEN is merged later so it takes precedence.
        let figment = figment
            .merge(Env::raw().only(&["access_token"]).map(|_| "github_token".into()))
            .merge(Env::raw().only(&["github_token", "host", "port", "graphql_url"]));

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.github_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "GITHUB_TOKEN (or ACCESS_TOKEN) must be set".to_string(),
            ));
        }
        if self.graphql_url.trim().is_empty() {
            return Err(ConfigError::Validation("GRAPHQL_URL must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
