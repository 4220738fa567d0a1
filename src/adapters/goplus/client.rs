//! GoPlus Security Client
//!
//! Fetches token security records from the GoPlus Labs API and normalizes
//! them into the domain model. Implements [`SecurityDataPort`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::TokenSecurityData;
use crate::ports::{ProviderError, SecurityDataPort};

use super::types::GoPlusResponse;

/// Configuration for the GoPlus client.
#[derive(Debug, Clone)]
pub struct GoPlusConfig {
    /// API base URL
    pub base_url: String,
    /// Optional API key for higher rate limits
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Number of retry attempts
    pub max_retries: u32,
    /// Base delay for exponential backoff (milliseconds)
    pub retry_base_delay_ms: u64,
}

impl Default for GoPlusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gopluslabs.io/api/v1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

impl GoPlusConfig {
    /// Create config with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }
}

/// Client for the GoPlus token_security endpoint.
#[derive(Debug, Clone)]
pub struct GoPlusClient {
    config: GoPlusConfig,
    http: Client,
}

impl GoPlusClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(GoPlusConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: GoPlusConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn fetch_security(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<GoPlusResponse, ProviderError> {
        let url = format!("{}/token_security/{}", self.config.base_url, chain_id);
        let address = address.to_lowercase();

        self.execute_with_retry(|| async {
            let mut request = self
                .http
                .get(&url)
                .query(&[("contract_addresses", address.as_str())]);

            if let Some(ref key) = self.config.api_key {
                request = request.bearer_auth(key);
            }

            request.send().await.map_err(ProviderError::from)
        })
        .await
    }

    /// Execute request with retry logic and exponential backoff.
    async fn execute_with_retry<F, Fut>(&self, request_fn: F) -> Result<GoPlusResponse, ProviderError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, ProviderError>>,
    {
        let mut last_error = None;

        for attempt in 0..self.config.max_retries {
            match request_fn().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let backoff = Duration::from_millis(
                            self.config.retry_base_delay_ms * 2u64.pow(attempt + 1),
                        );
                        tracing::warn!(
                            "GoPlus rate limited (429), backing off for {:?} (attempt {}/{})",
                            backoff,
                            attempt + 1,
                            self.config.max_retries
                        );
                        last_error = Some(ProviderError::RateLimited);
                        tokio::time::sleep(backoff).await;
                        continue;
                    }

                    if status.is_server_error() {
                        let backoff = Duration::from_millis(
                            self.config.retry_base_delay_ms * (attempt as u64 + 1),
                        );
                        last_error =
                            Some(ProviderError::Api(format!("Server error: {}", status)));
                        tokio::time::sleep(backoff).await;
                        continue;
                    }

                    let body: GoPlusResponse = response.json().await.map_err(|e| {
                        ProviderError::Parse(format!("Failed to parse JSON: {}", e))
                    })?;

                    return Ok(body);
                }
                Err(e) => {
                    last_error = Some(e);
                    let backoff = Duration::from_millis(
                        self.config.retry_base_delay_ms * (attempt as u64 + 1),
                    );
                    tokio::time::sleep(backoff).await;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::Api("Max retries exceeded".into())))
    }

    /// Extract and normalize the token record from a response envelope.
    fn normalize_response(
        address: &str,
        chain_id: &str,
        body: GoPlusResponse,
    ) -> Result<Option<TokenSecurityData>, ProviderError> {
        // GoPlus uses code 1 for success, everything else is an error.
        if body.code != 1 {
            return Err(ProviderError::Api(format!(
                "GoPlus API error: {}",
                body.message
            )));
        }

        let key = address.to_lowercase();
        Ok(body
            .result
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, raw)| raw.normalize(address, chain_id)))
    }
}

#[async_trait]
impl SecurityDataPort for GoPlusClient {
    async fn get_token_security(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<TokenSecurityData>, ProviderError> {
        let body = self.fetch_security(chain_id, address).await?;
        Self::normalize_response(address, chain_id, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> GoPlusResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = GoPlusConfig::default();
        assert_eq!(config.base_url, "https://api.gopluslabs.io/api/v1");
        assert_eq!(config.max_retries, 3);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_with_api_key() {
        let config = GoPlusConfig::with_api_key("secret");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_client_creation() {
        assert!(GoPlusClient::new().is_ok());
    }

    #[test]
    fn test_normalize_response_success() {
        let body = envelope(
            r#"{
                "code": 1,
                "message": "OK",
                "result": {
                    "0xabc": {
                        "token_name": "Test",
                        "token_symbol": "TST",
                        "is_honeypot": "1"
                    }
                }
            }"#,
        );

        let data = GoPlusClient::normalize_response("0xABC", "1", body)
            .unwrap()
            .unwrap();
        assert_eq!(data.token_symbol, "TST");
        assert_eq!(data.is_honeypot, "1");
        // Original casing is preserved on the normalized record.
        assert_eq!(data.contract_address, "0xABC");
    }

    #[test]
    fn test_normalize_response_missing_token_is_none() {
        let body = envelope(r#"{"code": 1, "message": "OK", "result": {}}"#);
        let result = GoPlusClient::normalize_response("0xabc", "1", body).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_normalize_response_api_error() {
        let body = envelope(r#"{"code": 0, "message": "chain not supported", "result": {}}"#);
        let err = GoPlusClient::normalize_response("0xabc", "1", body).unwrap_err();
        assert!(matches!(err, ProviderError::Api(_)));
        assert!(err.to_string().contains("chain not supported"));
    }
}
