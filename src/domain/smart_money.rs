//! Smart Money Tracker
//!
//! Flags holders that match the known-contract registry (or carry the
//! contract flag) and derives coarse buy/sell pressure from the size of the
//! holder list. The pressure heuristic is an approximation - it stands in
//! for real transaction-flow data, which the security provider does not
//! supply.

use serde::{Deserialize, Serialize};

use super::known_contracts::KnownContractRegistry;
use super::security::TokenSecurityData;

/// Classification of a known wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    Dex,
    Cex,
    Whale,
    Developer,
    Unknown,
}

/// Market pressure grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pressure {
    Strong,
    Moderate,
    Weak,
}

/// A holder recognized as a known contract or protocol address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownWallet {
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub address: String,
    pub percentage: f64,
}

/// Smart-money assessment for one token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMoneyAnalysis {
    pub smart_money_presence: bool,
    pub known_wallets: Vec<KnownWallet>,
    pub buy_pressure: Pressure,
    pub sell_pressure: Pressure,
    pub insights: Vec<String>,
}

/// Classifies holders against an injected known-contract registry.
#[derive(Debug, Clone)]
pub struct SmartMoneyTracker {
    registry: KnownContractRegistry,
}

impl SmartMoneyTracker {
    /// Build a tracker over a specific registry.
    pub fn new(registry: KnownContractRegistry) -> Self {
        Self { registry }
    }

    /// Compute the smart-money assessment.
    pub fn analyze_smart_money(&self, data: &TokenSecurityData) -> SmartMoneyAnalysis {
        let known_wallets: Vec<KnownWallet> = data
            .holders
            .iter()
            .filter(|h| h.is_contract || self.registry.contains(&h.address))
            .map(|h| KnownWallet {
                wallet_type: self.classify_wallet(&h.address, h.is_contract),
                address: h.address.clone(),
                percentage: h.percent_value(),
            })
            .collect();

        let smart_money_presence = !known_wallets.is_empty();
        let (buy_pressure, sell_pressure) = Self::analyze_pressure(data.holders.len());
        let insights = Self::insights(&known_wallets, buy_pressure, sell_pressure);

        SmartMoneyAnalysis {
            smart_money_presence,
            known_wallets,
            buy_pressure,
            sell_pressure,
            insights,
        }
    }

    fn classify_wallet(&self, address: &str, is_contract: bool) -> WalletType {
        if self.registry.contains(address) {
            WalletType::Dex
        } else if is_contract {
            WalletType::Dex
        } else {
            WalletType::Unknown
        }
    }

    /// Pressure from holder-list size alone; a stand-in for tx-flow data.
    fn analyze_pressure(holder_count: usize) -> (Pressure, Pressure) {
        if holder_count > 1000 {
            (Pressure::Strong, Pressure::Weak)
        } else if holder_count < 100 {
            (Pressure::Weak, Pressure::Strong)
        } else {
            (Pressure::Moderate, Pressure::Moderate)
        }
    }

    fn insights(known_wallets: &[KnownWallet], buy: Pressure, sell: Pressure) -> Vec<String> {
        let mut insights = Vec::new();

        if !known_wallets.is_empty() {
            insights.push(format!(
                "Detected {} known addresses (DEX/protocols)",
                known_wallets.len()
            ));
        }

        match buy {
            Pressure::Strong => {
                insights.push("Strong buying pressure detected - positive sentiment".to_string())
            }
            Pressure::Weak => {
                insights.push("Weak buying pressure - caution advised".to_string())
            }
            Pressure::Moderate => {}
        }

        if sell == Pressure::Strong {
            insights.push("High selling pressure - potential price decline".to_string());
        }

        insights
    }
}

impl Default for SmartMoneyTracker {
    fn default() -> Self {
        Self::new(KnownContractRegistry::mainnet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::TokenHolder;

    fn holder(address: &str, percent: &str, is_contract: bool) -> TokenHolder {
        TokenHolder {
            address: address.to_string(),
            balance: "1000".to_string(),
            percent: percent.to_string(),
            is_contract,
        }
    }

    #[test]
    fn test_registry_match_is_case_insensitive() {
        let tracker = SmartMoneyTracker::default();
        let mut data = TokenSecurityData::clean_fixture();
        data.holders = vec![
            holder("0x7A250D5630B4CF539739DF2C5DACB4C659F2488D", "3", false),
            holder("0xplainwallet", "2", false),
        ];

        let analysis = tracker.analyze_smart_money(&data);
        assert!(analysis.smart_money_presence);
        assert_eq!(analysis.known_wallets.len(), 1);
        assert_eq!(analysis.known_wallets[0].wallet_type, WalletType::Dex);
    }

    #[test]
    fn test_contract_flag_counts_as_known() {
        let tracker = SmartMoneyTracker::default();
        let mut data = TokenSecurityData::clean_fixture();
        data.holders = vec![holder("0xsomecontract", "4", true)];

        let analysis = tracker.analyze_smart_money(&data);
        assert_eq!(analysis.known_wallets.len(), 1);
        assert_eq!(analysis.known_wallets[0].wallet_type, WalletType::Dex);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("Detected 1 known addresses")));
    }

    #[test]
    fn test_pressure_from_holder_list_size() {
        let tracker = SmartMoneyTracker::default();
        let mut data = TokenSecurityData::clean_fixture();

        data.holders = (0..50).map(|i| holder(&format!("0x{}", i), "0.1", false)).collect();
        let analysis = tracker.analyze_smart_money(&data);
        assert_eq!(analysis.buy_pressure, Pressure::Weak);
        assert_eq!(analysis.sell_pressure, Pressure::Strong);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("High selling pressure")));

        data.holders = (0..500).map(|i| holder(&format!("0x{}", i), "0.1", false)).collect();
        let analysis = tracker.analyze_smart_money(&data);
        assert_eq!(analysis.buy_pressure, Pressure::Moderate);
        assert_eq!(analysis.sell_pressure, Pressure::Moderate);

        data.holders = (0..1001).map(|i| holder(&format!("0x{}", i), "0.01", false)).collect();
        let analysis = tracker.analyze_smart_money(&data);
        assert_eq!(analysis.buy_pressure, Pressure::Strong);
        assert_eq!(analysis.sell_pressure, Pressure::Weak);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("Strong buying pressure")));
    }

    #[test]
    fn test_custom_registry_injection() {
        let registry = KnownContractRegistry::new([("0xcustomrouter", "Custom Router")]);
        let tracker = SmartMoneyTracker::new(registry);
        let mut data = TokenSecurityData::clean_fixture();
        data.holders = vec![holder("0xCustomRouter", "8", false)];

        let analysis = tracker.analyze_smart_money(&data);
        assert!(analysis.smart_money_presence);
        assert_eq!(analysis.known_wallets[0].percentage, 8.0);
    }

    #[test]
    fn test_no_known_wallets() {
        let tracker = SmartMoneyTracker::default();
        let mut data = TokenSecurityData::clean_fixture();
        data.holders = vec![holder("0xnobody", "2", false)];

        let analysis = tracker.analyze_smart_money(&data);
        assert!(!analysis.smart_money_presence);
        assert!(analysis.known_wallets.is_empty());
    }
}
