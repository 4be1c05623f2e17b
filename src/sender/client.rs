use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub connection_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://biome-iot.uqcloud.net/api/monitoring_data".to_string(),
            timeout: Duration::from_secs(30),
            connection_timeout: Duration::from_secs(10),
            user_agent: format!("biome-relay/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client for the monitoring endpoint.
///
/// The endpoint is opaque to the relay: no health probing, no auth, one
/// status code per request. The URL is validated once at construction.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
    pub config: ClientConfig,
    pub endpoint_url: Url,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint_url: Url = config.endpoint.parse().map_err(|e| {
            ClientError::InvalidConfiguration(format!(
                "Invalid endpoint URL '{}': {}",
                config.endpoint, e
            ))
        })?;

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connection_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ClientError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            endpoint_url,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_endpoint() {
        let config = ClientConfig {
            endpoint: "not a url".to_string(),
            ..ClientConfig::default()
        };

        match HttpClient::new(config) {
            Err(ClientError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("not a url"));
            }
            other => panic!("Expected InvalidConfiguration, got: {other:?}"),
        }
    }

    #[test]
    fn default_config_builds() {
        let client = HttpClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://biome-iot.uqcloud.net/api/monitoring_data"
        );
    }
}
