//! Market Data Port
//!
//! Trait abstraction over the optional price/DEX enrichment providers.
//! Both lookups are best-effort: `Ok(None)` means the provider simply has
//! nothing for the token, and callers degrade gracefully.

use async_trait::async_trait;

use super::models::{DexData, PriceData, ProviderError};

/// Source of aggregate price and DEX pair data.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Aggregate USD price data, if the provider tracks the token.
    async fn get_token_price(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<PriceData>, ProviderError>;

    /// Market data for the token's deepest DEX pair, if any pair exists.
    async fn get_dex_data(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<DexData>, ProviderError>;
}
