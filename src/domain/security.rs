//! Token Security Data Model
//!
//! Normalized shape of the security attributes returned by the upstream
//! security provider. Binary attributes arrive as the strings "0"/"1" and
//! are kept that way; percent fields arrive as decimal strings. Helpers in
//! this module parse both defensively so the scoring pipeline is total over
//! whatever the provider sends.

use serde::{Deserialize, Serialize};

/// A single entry in the token's holder list.
///
/// The upstream provider supplies holders sorted descending by balance.
/// Analyzers that sum "top N" holdings trust that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolder {
    /// Holder address
    pub address: String,
    /// Raw balance as a decimal string
    pub balance: String,
    /// Share of total supply as a decimal-string percentage
    pub percent: String,
    /// Whether the address is a contract
    #[serde(default)]
    pub is_contract: bool,
}

impl TokenHolder {
    /// Holder share of supply as a float, 0.0 when unparseable.
    pub fn percent_value(&self) -> f64 {
        parse_percent(&self.percent)
    }
}

/// Normalized security attributes for one token contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSecurityData {
    pub contract_address: String,
    pub chain_id: String,
    pub token_name: String,
    pub token_symbol: String,
    #[serde(default)]
    pub holder_count: u64,
    #[serde(default = "zero_string")]
    pub total_supply: String,

    // Contract security flags, "0"/"1"
    #[serde(default = "flag_off")]
    pub is_open_source: String,
    #[serde(default = "flag_off")]
    pub is_proxy: String,
    #[serde(default = "flag_off")]
    pub is_mintable: String,
    #[serde(default = "flag_off")]
    pub can_take_back_ownership: String,
    #[serde(default = "flag_off")]
    pub owner_change_balance: String,
    #[serde(default = "flag_off")]
    pub hidden_owner: String,
    #[serde(default = "flag_off")]
    pub self_destruct: String,
    #[serde(default = "flag_off")]
    pub external_call: String,

    // Trading attributes
    #[serde(default = "zero_string")]
    pub buy_tax: String,
    #[serde(default = "zero_string")]
    pub sell_tax: String,
    #[serde(default = "flag_off")]
    pub cannot_buy: String,
    #[serde(default = "flag_off")]
    pub cannot_sell_all: String,
    #[serde(default = "flag_off")]
    pub slippage_modifiable: String,
    #[serde(default = "flag_off")]
    pub is_honeypot: String,
    #[serde(default = "flag_off")]
    pub transfer_pausable: String,
    #[serde(default = "flag_off")]
    pub is_blacklisted: String,

    // Liquidity
    #[serde(default)]
    pub lp_holder_count: u64,
    #[serde(default = "zero_string")]
    pub lp_total_supply: String,

    // Holders, sorted descending by balance by the provider
    #[serde(default)]
    pub holders: Vec<TokenHolder>,
    #[serde(default = "zero_string")]
    pub creator_percent: String,
}

fn flag_off() -> String {
    "0".to_string()
}

fn zero_string() -> String {
    "0".to_string()
}

/// True iff the flag field is exactly "1". Anything else is treated as safe.
pub fn flag_set(field: &str) -> bool {
    field == "1"
}

/// Parse a decimal-string percentage, defaulting to 0.0 on garbage.
///
/// The scoring pipeline must never fail on malformed provider data, so this
/// is the only way percent/tax fields are read.
pub fn parse_percent(field: &str) -> f64 {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
}

impl TokenSecurityData {
    /// Buy tax as a float percentage.
    pub fn buy_tax_value(&self) -> f64 {
        parse_percent(&self.buy_tax)
    }

    /// Sell tax as a float percentage.
    pub fn sell_tax_value(&self) -> f64 {
        parse_percent(&self.sell_tax)
    }

    /// Creator share of supply as a float percentage.
    pub fn creator_percent_value(&self) -> f64 {
        parse_percent(&self.creator_percent)
    }

    /// LP total supply as a float, 0.0 when unparseable.
    pub fn lp_total_supply_value(&self) -> f64 {
        parse_percent(&self.lp_total_supply)
    }

    /// Sum of the first `min(10, len)` holders' percent values, in the
    /// order supplied by the provider. Not re-sorted: the provider
    /// guarantees descending balance order, and re-sorting here would
    /// silently change scores if that guarantee ever slips.
    pub fn top10_holder_percent(&self) -> f64 {
        self.holders.iter().take(10).map(TokenHolder::percent_value).sum()
    }
}

#[cfg(test)]
impl TokenSecurityData {
    /// Baseline clean token used as the starting point for analyzer tests.
    pub(crate) fn clean_fixture() -> Self {
        Self {
            contract_address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            chain_id: "1".to_string(),
            token_name: "Sample Token".to_string(),
            token_symbol: "SMPL".to_string(),
            holder_count: 1500,
            total_supply: "1000000000".to_string(),
            is_open_source: "1".to_string(),
            is_proxy: "0".to_string(),
            is_mintable: "0".to_string(),
            can_take_back_ownership: "0".to_string(),
            owner_change_balance: "0".to_string(),
            hidden_owner: "0".to_string(),
            self_destruct: "0".to_string(),
            external_call: "0".to_string(),
            buy_tax: "0".to_string(),
            sell_tax: "0".to_string(),
            cannot_buy: "0".to_string(),
            cannot_sell_all: "0".to_string(),
            slippage_modifiable: "0".to_string(),
            is_honeypot: "0".to_string(),
            transfer_pausable: "0".to_string(),
            is_blacklisted: "0".to_string(),
            lp_holder_count: 120,
            lp_total_supply: "500000".to_string(),
            holders: Vec::new(),
            creator_percent: "2".to_string(),
        }
    }
}
