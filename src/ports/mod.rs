//! Ports Layer - Trait definitions for external data providers
//!
//! This module defines the interfaces (ports) that provider adapters must
//! implement. Following hexagonal architecture, these traits abstract:
//! - Token security data (the mandatory scan input)
//! - Market data (price and DEX pair enrichment)
//! - Contract history (explorer-based deployment age)

pub mod history;
pub mod market_data;
pub mod mocks;
pub mod models;
pub mod security_data;

pub use history::HistoryPort;
pub use market_data::MarketDataPort;
pub use models::{DexData, PriceData, ProviderError};
pub use security_data::SecurityDataPort;
