//! Security Data Port
//!
//! Trait abstraction over the upstream token security provider. This is
//! the one mandatory provider: a scan cannot proceed without its data.

use async_trait::async_trait;

use crate::domain::TokenSecurityData;
use super::models::ProviderError;

/// Source of normalized token security attributes.
#[async_trait]
pub trait SecurityDataPort: Send + Sync {
    /// Fetch the security record for a token contract.
    ///
    /// `Ok(None)` means the provider has no record for the address - the
    /// token may not exist or the address may be malformed.
    async fn get_token_security(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<TokenSecurityData>, ProviderError>;
}
