use std::{net::SocketAddr, path::Path};

use serde::Deserialize;

use crate::error::ErrorVerbosity;

pub const DEFAULT_CATALOG_BASE_URL: &str = "http://openlibrary.org";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub socket_address: SocketAddr,
    pub error_verbosity: ErrorVerbosity,
    /// Log every response body at `TRACE` level.
    #[serde(default)]
    pub trace_response_body: bool,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(ConfigError::Parse)
    }

    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::Read)?;

        Self::from_yaml_str(&content)
    }
}
