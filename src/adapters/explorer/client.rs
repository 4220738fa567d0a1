//! Chain Explorer History Client
//!
//! Looks up a contract's first transaction through the per-chain
//! Etherscan-compatible explorer API and feeds it to the pure history
//! scorer. Chains without a configured explorer resolve to `None`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::chains::chain_info;
use crate::domain::ContractHistory;
use crate::ports::{HistoryPort, ProviderError};

/// Configuration for the explorer client.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Optional explorer API key, shared across chains
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TxListResponse {
    status: String,
    /// A list of transactions on success, an error string otherwise.
    #[serde(default)]
    result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTx {
    block_number: String,
    time_stamp: String,
}

/// Client for Etherscan-compatible explorer APIs.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    config: ExplorerConfig,
    http: Client,
}

impl ExplorerClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(ExplorerConfig::default())
    }

    pub fn with_config(config: ExplorerConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    async fn fetch_first_tx(
        &self,
        api_url: &str,
        address: &str,
    ) -> Result<Option<RawTx>, ProviderError> {
        let mut query = vec![
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", address.to_string()),
            ("startblock", "0".to_string()),
            ("endblock", "99999999".to_string()),
            ("page", "1".to_string()),
            ("offset", "1".to_string()),
            ("sort", "asc".to_string()),
        ];
        if let Some(ref key) = self.config.api_key {
            query.push(("apikey", key.clone()));
        }

        let response = self.http.get(api_url).query(&query).send().await?;
        let body: TxListResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse JSON: {}", e)))?;

        Ok(Self::first_tx(body))
    }

    fn first_tx(body: TxListResponse) -> Option<RawTx> {
        // Explorers report status "1" on success; on error `result` holds
        // a message string instead of a transaction list.
        if body.status != "1" {
            return None;
        }
        let txs: Vec<RawTx> = serde_json::from_value(body.result).ok()?;
        txs.into_iter().next()
    }

    fn evaluate(tx: RawTx, now: DateTime<Utc>) -> Option<ContractHistory> {
        let first_block: u64 = tx.block_number.parse().ok()?;
        let first_seen = tx
            .time_stamp
            .parse::<i64>()
            .ok()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))?;

        Some(ContractHistory::evaluate(first_block, first_seen, now))
    }
}

#[async_trait]
impl HistoryPort for ExplorerClient {
    async fn analyze_history(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<ContractHistory>, ProviderError> {
        let api_url = match chain_info(chain_id) {
            Some(chain) => chain.explorer_api,
            None => return Ok(None),
        };

        let first_tx = self.fetch_first_tx(api_url, address).await?;
        Ok(first_tx.and_then(|tx| Self::evaluate(tx, Utc::now())))
    }
}
