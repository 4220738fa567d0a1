//! History Port
//!
//! Trait abstraction over the chain-explorer history provider. Optional
//! enrichment: the composite scan tolerates its absence.

use async_trait::async_trait;

use crate::domain::ContractHistory;
use super::models::ProviderError;

/// Source of contract deployment-age history.
#[async_trait]
pub trait HistoryPort: Send + Sync {
    /// Evaluate the contract's on-chain history. `Ok(None)` when the chain
    /// has no configured explorer or the contract has no transactions.
    async fn analyze_history(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<ContractHistory>, ProviderError>;
}
