//! Chain Explorer Adapter
//!
//! Implements the history port against Etherscan-compatible explorer APIs.

mod client;

pub use client::{ExplorerClient, ExplorerConfig};
