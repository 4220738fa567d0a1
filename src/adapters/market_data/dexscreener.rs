//! DEXScreener Pair Client
//!
//! Looks up a token's trading pairs and reports the one with the deepest
//! USD liquidity. DEXScreener resolves the chain from the token address,
//! so the chain id is not part of the request.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::ports::{DexData, ProviderError};

/// Configuration for the DEXScreener client.
#[derive(Debug, Clone)]
pub struct DexScreenerConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dexscreener.com".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<RawPair>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawPair {
    #[serde(default)]
    price_usd: String,
    #[serde(default)]
    liquidity: RawLiquidity,
    #[serde(default)]
    fdv: f64,
    #[serde(default)]
    market_cap: f64,
    #[serde(default)]
    volume: RawWindowed,
    #[serde(default)]
    price_change: RawWindowed,
    #[serde(default)]
    txns: RawTxns,
}

#[derive(Debug, Deserialize, Default)]
struct RawLiquidity {
    #[serde(default)]
    usd: f64,
}

#[derive(Debug, Deserialize, Default)]
struct RawWindowed {
    #[serde(default)]
    h24: f64,
}

#[derive(Debug, Deserialize, Default)]
struct RawTxns {
    #[serde(default)]
    h24: RawTxnCounts,
}

#[derive(Debug, Deserialize, Default)]
struct RawTxnCounts {
    #[serde(default)]
    buys: u64,
    #[serde(default)]
    sells: u64,
}

impl RawPair {
    fn into_dex_data(self) -> DexData {
        DexData {
            price_usd: self.price_usd,
            liquidity_usd: self.liquidity.usd,
            fdv: self.fdv,
            market_cap: self.market_cap,
            volume_24h: self.volume.h24,
            price_change_24h: self.price_change.h24,
            buys_24h: self.txns.h24.buys,
            sells_24h: self.txns.h24.sells,
        }
    }
}

/// Client for DEXScreener's token pairs endpoint.
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerConfig,
    http: Client,
}

impl DexScreenerClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(DexScreenerConfig::default())
    }

    pub fn with_config(config: DexScreenerConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch the deepest-liquidity pair for a token, if any pair exists.
    pub async fn get_dex_data(&self, address: &str) -> Result<Option<DexData>, ProviderError> {
        let url = format!("{}/latest/dex/tokens/{}", self.config.base_url, address);
        let response = self.http.get(&url).send().await?;

        let body: PairsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse JSON: {}", e)))?;

        Ok(Self::deepest_pair(body))
    }

    fn deepest_pair(body: PairsResponse) -> Option<DexData> {
        body.pairs?
            .into_iter()
            .max_by(|a, b| {
                a.liquidity
                    .usd
                    .partial_cmp(&b.liquidity.usd)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(RawPair::into_dex_data)
    }
}
