//! Recording mocks for the provider ports.
//!
//! Used by application and integration tests: canned responses are set up
//! with builder methods, and every call is recorded for assertion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{ContractHistory, TokenSecurityData};
use super::history::HistoryPort;
use super::market_data::MarketDataPort;
use super::models::{DexData, PriceData, ProviderError};
use super::security_data::SecurityDataPort;

fn key(chain_id: &str, address: &str) -> String {
    format!("{}:{}", chain_id, address.to_lowercase())
}

/// Mock security data provider with canned per-token responses.
#[derive(Debug, Default, Clone)]
pub struct MockSecurityData {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, TokenSecurityData>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockSecurityData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to can a security record for a token.
    pub fn with_token(self, chain_id: &str, address: &str, data: TokenSecurityData) -> Self {
        self.responses.lock().unwrap().insert(key(chain_id, address), data);
        self
    }

    /// Builder method to make every call fail with an API error.
    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// All recorded `chain:address` calls.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SecurityDataPort for MockSecurityData {
    async fn get_token_security(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<TokenSecurityData>, ProviderError> {
        let k = key(chain_id, address);
        self.calls.lock().unwrap().push(k.clone());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Api(message));
        }
        Ok(self.responses.lock().unwrap().get(&k).cloned())
    }
}

/// Mock market data provider with canned price and DEX responses.
#[derive(Debug, Default, Clone)]
pub struct MockMarketData {
    calls: Arc<Mutex<Vec<String>>>,
    prices: Arc<Mutex<HashMap<String, PriceData>>>,
    dex: Arc<Mutex<HashMap<String, DexData>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, chain_id: &str, address: &str, price: PriceData) -> Self {
        self.prices.lock().unwrap().insert(key(chain_id, address), price);
        self
    }

    pub fn with_dex(self, chain_id: &str, address: &str, dex: DexData) -> Self {
        self.dex.lock().unwrap().insert(key(chain_id, address), dex);
        self
    }

    /// Builder method to make every call fail with an API error.
    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataPort for MockMarketData {
    async fn get_token_price(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<PriceData>, ProviderError> {
        let k = key(chain_id, address);
        self.calls.lock().unwrap().push(format!("price:{}", k));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Api(message));
        }
        Ok(self.prices.lock().unwrap().get(&k).cloned())
    }

    async fn get_dex_data(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<DexData>, ProviderError> {
        let k = key(chain_id, address);
        self.calls.lock().unwrap().push(format!("dex:{}", k));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Api(message));
        }
        Ok(self.dex.lock().unwrap().get(&k).cloned())
    }
}

/// Mock history provider with canned contract histories.
#[derive(Debug, Default, Clone)]
pub struct MockHistory {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, ContractHistory>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(self, chain_id: &str, address: &str, history: ContractHistory) -> Self {
        self.responses.lock().unwrap().insert(key(chain_id, address), history);
        self
    }

    /// Builder method to make every call fail with an API error.
    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryPort for MockHistory {
    async fn analyze_history(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<ContractHistory>, ProviderError> {
        let k = key(chain_id, address);
        self.calls.lock().unwrap().push(k.clone());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Api(message));
        }
        Ok(self.responses.lock().unwrap().get(&k).cloned())
    }
}
