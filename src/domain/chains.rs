//! Supported Chain Registry
//!
//! Immutable table of the chains the scanner understands, with the
//! per-chain identifiers the adapters need: the CoinGecko platform slug
//! and the Etherscan-compatible explorer API endpoint.

/// One supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// Numeric chain id as a string, as used by the providers.
    pub id: &'static str,
    pub name: &'static str,
    pub coingecko_platform: &'static str,
    pub explorer_api: &'static str,
}

/// All chains the scanner supports.
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        id: "1",
        name: "Ethereum",
        coingecko_platform: "ethereum",
        explorer_api: "https://api.etherscan.io/api",
    },
    ChainInfo {
        id: "8453",
        name: "Base",
        coingecko_platform: "base",
        explorer_api: "https://api.basescan.org/api",
    },
    ChainInfo {
        id: "56",
        name: "BSC",
        coingecko_platform: "binance-smart-chain",
        explorer_api: "https://api.bscscan.com/api",
    },
    ChainInfo {
        id: "137",
        name: "Polygon",
        coingecko_platform: "polygon-pos",
        explorer_api: "https://api.polygonscan.com/api",
    },
    ChainInfo {
        id: "42161",
        name: "Arbitrum",
        coingecko_platform: "arbitrum-one",
        explorer_api: "https://api.arbiscan.io/api",
    },
];

/// Look up a chain by id. `None` for chains the scanner does not support.
pub fn chain_info(chain_id: &str) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == chain_id)
}
