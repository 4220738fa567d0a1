//! Market Data Adapters
//!
//! External price sources for the optional scan enrichments:
//! - `CoinGeckoClient`: aggregate USD price lookup
//! - `DexScreenerClient`: deepest-liquidity DEX pair lookup
//! - `MarketDataClient`: composes both behind the market data port

use async_trait::async_trait;

use crate::ports::{DexData, MarketDataPort, PriceData, ProviderError};

mod coingecko;
mod dexscreener;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use dexscreener::{DexScreenerClient, DexScreenerConfig};

/// Market data port implementation backed by CoinGecko for prices and
/// DEXScreener for pair data.
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    coingecko: CoinGeckoClient,
    dexscreener: DexScreenerClient,
}

impl MarketDataClient {
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            coingecko: CoinGeckoClient::new()?,
            dexscreener: DexScreenerClient::new()?,
        })
    }

    pub fn with_clients(coingecko: CoinGeckoClient, dexscreener: DexScreenerClient) -> Self {
        Self { coingecko, dexscreener }
    }
}

#[async_trait]
impl MarketDataPort for MarketDataClient {
    async fn get_token_price(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<PriceData>, ProviderError> {
        self.coingecko.get_token_price(chain_id, address).await
    }

    async fn get_dex_data(
        &self,
        _chain_id: &str,
        address: &str,
    ) -> Result<Option<DexData>, ProviderError> {
        // DEXScreener resolves the chain from the address itself.
        self.dexscreener.get_dex_data(address).await
    }
}
