//! Known Contract Addresses
//!
//! Static registries used by the analyzers: well-known DEX/aggregator
//! contracts for smart-money classification, and the major-token symbol
//! allow-lists behind the social heuristics. Components take these as
//! immutable registries at construction so alternative tables can be
//! injected in tests or per-deployment.

use std::collections::HashMap;

/// Known smart contract addresses (DEX routers, aggregators) on Ethereum
/// mainnet, lowercased.
pub const KNOWN_DEX_CONTRACTS: &[(&str, &str)] = &[
    ("0x7a250d5630b4cf539739df2c5dacb4c659f2488d", "Uniswap V2 Router"),
    ("0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45", "Uniswap V3 Router"),
    ("0x1111111254fb6c44bac0bed2854e76f90643097d", "1inch Aggregator"),
];

/// Major token symbols assumed to maintain a public GitHub presence.
pub const MAJOR_TOKEN_SYMBOLS: &[&str] = &["USDC", "USDT", "WETH", "DAI", "LINK", "UNI"];

/// Symbols assumed to carry a large community.
pub const LARGE_COMMUNITY_SYMBOLS: &[&str] = &["USDC", "USDT", "WETH", "DAI"];

/// Immutable address -> label registry for smart-money classification.
/// Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct KnownContractRegistry {
    contracts: HashMap<String, String>,
}

impl KnownContractRegistry {
    /// Build a registry from `(address, label)` pairs.
    pub fn new<I, A, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, L)>,
        A: Into<String>,
        L: Into<String>,
    {
        let contracts = entries
            .into_iter()
            .map(|(addr, label)| (addr.into().to_lowercase(), label.into()))
            .collect();
        Self { contracts }
    }

    /// The built-in mainnet DEX/aggregator table.
    pub fn mainnet() -> Self {
        Self::new(KNOWN_DEX_CONTRACTS.iter().copied())
    }

    /// Whether the address is a known contract.
    pub fn contains(&self, address: &str) -> bool {
        self.contracts.contains_key(&address.to_lowercase())
    }

    /// Label of a known contract, if registered.
    pub fn label(&self, address: &str) -> Option<&str> {
        self.contracts.get(&address.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl Default for KnownContractRegistry {
    fn default() -> Self {
        Self::mainnet()
    }
}
