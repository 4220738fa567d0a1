//! Common data structures and error types for all ports

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provider error type shared by all ports.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    Parse(String),

    #[error("Rate limited, try again later")]
    RateLimited,

    #[error("Provider API error: {0}")]
    Api(String),
}

/// Aggregate market price for a token, as reported by the price provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceData {
    pub usd: f64,
    #[serde(default)]
    pub usd_24h_change: f64,
    #[serde(default)]
    pub usd_market_cap: f64,
    #[serde(default)]
    pub usd_24h_vol: f64,
}

/// Market data for the token's deepest DEX pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexData {
    pub price_usd: String,
    pub liquidity_usd: f64,
    pub fdv: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub buys_24h: u64,
    pub sells_24h: u64,
}
