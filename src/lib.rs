//! Tokensentry - Token Security Scanner Library
//!
//! Aggregates third-party blockchain security data for a token contract
//! and computes a composite risk score with secondary analyses.
//!
//! # Modules
//!
//! - `domain`: Pure scoring logic (risk engine, rug pull, liquidity,
//!   whales, smart money, social, verdict)
//! - `ports`: Trait abstractions for the data providers, plus mocks
//! - `adapters`: Provider implementations (GoPlus, CoinGecko,
//!   DEXScreener, chain explorers) and the CLI
//! - `config`: Configuration loading and validation
//! - `application`: The scan orchestrator

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
