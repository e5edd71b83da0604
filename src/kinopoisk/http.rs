use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::kinopoisk::{KinopoiskError, Result};

/// HTTP client wrapper for the upstream API.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with a fixed per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("kinofetch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute a GET request carrying the API key header and parse the
    /// JSON response.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, api_key: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", api_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(KinopoiskError::Network)?;

        Self::handle_response(response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();

            return Err(KinopoiskError::Api {
                status: status_code,
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| KinopoiskError::Parse(format!("JSON parse error: {e}")))
    }
}
