//! GoPlus Security Adapter
//!
//! Implements the security data port against the GoPlus Labs API.

mod client;
mod types;

pub use client::{GoPlusClient, GoPlusConfig};
pub use types::{GoPlusResponse, RawHolder, RawTokenSecurity};
