//! CoinGecko Price Client
//!
//! Fetches aggregate USD token prices via the simple token_price endpoint.
//! Chains are mapped to CoinGecko platform slugs through the chain
//! registry; an unsupported chain yields `None` rather than an error.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;

use crate::domain::chains::chain_info;
use crate::ports::{PriceData, ProviderError};

/// Configuration for the CoinGecko client.
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Client for CoinGecko's simple token price lookup.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    http: Client,
}

impl CoinGeckoClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch the USD price record for a token, if CoinGecko tracks it.
    pub async fn get_token_price(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<PriceData>, ProviderError> {
        let platform = match chain_info(chain_id) {
            Some(chain) => chain.coingecko_platform,
            None => return Ok(None),
        };

        let url = format!("{}/simple/token_price/{}", self.config.base_url, platform);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("contract_addresses", address),
                ("vs_currencies", "usd"),
                ("include_market_cap", "true"),
                ("include_24hr_vol", "true"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let body: HashMap<String, PriceData> = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse JSON: {}", e)))?;

        Ok(body.into_iter().find_map(|(k, v)| {
            (k.to_lowercase() == address.to_lowercase()).then_some(v)
        }))
    }
}
