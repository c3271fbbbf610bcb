//! football-data.org v4 transport.
//!
//! Free tier accounts are limited to 10 calls per minute; pacing is the
//! fetch layer's job, this client only performs single requests.
//! API documentation: https://www.football-data.org/documentation/api

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::FootballDataConfig;
use crate::errors::TransportError;
use crate::provider::FootballTransport;

const PROVIDER_ID: &str = "FOOTBALL_DATA";

/// Header carrying the API token.
const AUTH_HEADER: &str = "X-Auth-Token";

/// HTTP client for football-data.org.
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FootballDataClient {
    /// Create a client for the given API root and optional token.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("matchday/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn from_config(config: &FootballDataConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl FootballTransport for FootballDataClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self, endpoint: &str, timeout: Duration) -> Result<Value, TransportError> {
        let url = self.url_for(endpoint);

        let mut request = self.client.get(&url).timeout(timeout);
        if let Some(api_key) = &self.api_key {
            request = request.header(AUTH_HEADER, api_key);
        } else {
            warn!("{}: no API key configured, request will likely be rejected", PROVIDER_ID);
        }

        debug!("{} request: {}", PROVIDER_ID, endpoint);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            } else {
                body
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Decode(e.to_string())
            }
        })
    }
}
