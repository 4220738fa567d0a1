//! GoPlus API response types
//!
//! Raw wire shapes for the token_security endpoint, plus normalization
//! into the domain's [`TokenSecurityData`]. Every field the API may omit
//! defaults per the data-model rules: flags to "0", numerics to 0.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{TokenHolder, TokenSecurityData};

/// Top-level envelope of every GoPlus response.
#[derive(Debug, Deserialize)]
pub struct GoPlusResponse {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// Keyed by lowercased contract address.
    #[serde(default)]
    pub result: HashMap<String, RawTokenSecurity>,
}

/// One holder entry as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHolder {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub percent: String,
    /// The API encodes this as 0/1.
    #[serde(default)]
    pub is_contract: u8,
}

/// Raw token security record, all fields optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTokenSecurity {
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    pub holder_count: Option<String>,
    pub total_supply: Option<String>,

    pub is_open_source: Option<String>,
    pub is_proxy: Option<String>,
    pub is_mintable: Option<String>,
    pub can_take_back_ownership: Option<String>,
    pub owner_change_balance: Option<String>,
    pub hidden_owner: Option<String>,
    #[serde(rename = "selfdestruct")]
    pub self_destruct: Option<String>,
    pub external_call: Option<String>,

    pub buy_tax: Option<String>,
    pub sell_tax: Option<String>,
    pub cannot_buy: Option<String>,
    pub cannot_sell_all: Option<String>,
    pub slippage_modifiable: Option<String>,
    pub is_honeypot: Option<String>,
    pub transfer_pausable: Option<String>,
    pub is_blacklisted: Option<String>,

    pub lp_holder_count: Option<String>,
    pub lp_total_supply: Option<String>,

    pub holders: Option<Vec<RawHolder>>,
    pub creator_percent: Option<String>,
}

fn flag(field: Option<String>) -> String {
    field.unwrap_or_else(|| "0".to_string())
}

fn decimal(field: Option<String>) -> String {
    field.unwrap_or_else(|| "0".to_string())
}

fn count(field: &Option<String>) -> u64 {
    field.as_deref().and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl RawTokenSecurity {
    /// Normalize into the domain model, filling every absent field with
    /// its safe default.
    pub fn normalize(self, contract_address: &str, chain_id: &str) -> TokenSecurityData {
        let holder_count = count(&self.holder_count);
        let lp_holder_count = count(&self.lp_holder_count);

        let holders = self
            .holders
            .unwrap_or_default()
            .into_iter()
            .map(|h| TokenHolder {
                address: h.address,
                balance: h.balance,
                percent: h.percent,
                is_contract: h.is_contract != 0,
            })
            .collect();

        TokenSecurityData {
            contract_address: contract_address.to_string(),
            chain_id: chain_id.to_string(),
            token_name: self.token_name.unwrap_or_else(|| "Unknown".to_string()),
            token_symbol: self.token_symbol.unwrap_or_else(|| "Unknown".to_string()),
            holder_count,
            total_supply: decimal(self.total_supply),

            is_open_source: flag(self.is_open_source),
            is_proxy: flag(self.is_proxy),
            is_mintable: flag(self.is_mintable),
            can_take_back_ownership: flag(self.can_take_back_ownership),
            owner_change_balance: flag(self.owner_change_balance),
            hidden_owner: flag(self.hidden_owner),
            self_destruct: flag(self.self_destruct),
            external_call: flag(self.external_call),

            buy_tax: decimal(self.buy_tax),
            sell_tax: decimal(self.sell_tax),
            cannot_buy: flag(self.cannot_buy),
            cannot_sell_all: flag(self.cannot_sell_all),
            slippage_modifiable: flag(self.slippage_modifiable),
            is_honeypot: flag(self.is_honeypot),
            transfer_pausable: flag(self.transfer_pausable),
            is_blacklisted: flag(self.is_blacklisted),

            lp_holder_count,
            lp_total_supply: decimal(self.lp_total_supply),

            holders,
            creator_percent: decimal(self.creator_percent),
        }
    }
}
