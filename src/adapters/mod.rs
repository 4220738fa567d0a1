//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - GoPlus: token security API client (the mandatory provider)
//! - Market Data: CoinGecko price and DEXScreener pair lookups
//! - Explorer: Etherscan-compatible deployment history lookups
//! - CLI: command-line interface definitions

pub mod cli;
pub mod explorer;
pub mod goplus;
pub mod market_data;

pub use cli::CliApp;
pub use explorer::ExplorerClient;
pub use goplus::GoPlusClient;
pub use market_data::MarketDataClient;
