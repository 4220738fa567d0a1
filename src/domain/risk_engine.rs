//! Risk Engine
//!
//! Computes the composite risk score for a token from its security data:
//! four weighted factor scores, an overall 0-100 score, a category tier,
//! and plain-language warning/critical-issue lists. Pure and total - every
//! lookup defaults safely, so scoring never fails on partial data.

use serde::{Deserialize, Serialize};

use super::bands::pick_band;
use super::security::{flag_set, TokenSecurityData};

/// Factor weights for the overall score.
const WEIGHT_CONTRACT_SECURITY: f64 = 0.30;
const WEIGHT_LIQUIDITY_SAFETY: f64 = 0.25;
const WEIGHT_HOLDER_DISTRIBUTION: f64 = 0.20;
const WEIGHT_TRADING_RESTRICTIONS: f64 = 0.25;

/// Overall risk tier. Boundaries are half-open: a score of exactly 20 is
/// already `MediumRisk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "LOW_RISK")]
    LowRisk,
    #[serde(rename = "MEDIUM_RISK")]
    MediumRisk,
    #[serde(rename = "HIGH_RISK")]
    HighRisk,
    #[serde(rename = "CRITICAL_RISK")]
    CriticalRisk,
}

impl RiskCategory {
    /// Category ladder shared with the presentation layer: <20 low,
    /// <50 medium, <80 high, else critical.
    pub fn from_score(score: u8) -> Self {
        pick_band(
            score as f64,
            &[
                (20.0, RiskCategory::LowRisk),
                (50.0, RiskCategory::MediumRisk),
                (80.0, RiskCategory::HighRisk),
            ],
            RiskCategory::CriticalRisk,
        )
    }

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::LowRisk => "LOW_RISK",
            RiskCategory::MediumRisk => "MEDIUM_RISK",
            RiskCategory::HighRisk => "HIGH_RISK",
            RiskCategory::CriticalRisk => "CRITICAL_RISK",
        }
    }
}

/// The four named factor sub-scores, each 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub contract_security: u8,
    pub liquidity_safety: u8,
    pub holder_distribution: u8,
    pub trading_restrictions: u8,
}

/// Composite risk score. Computed once per scan, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    pub overall: u8,
    pub category: RiskCategory,
    pub factors: RiskFactors,
    pub warnings: Vec<String>,
    pub critical_issues: Vec<String>,
}

/// Maps security attributes to the composite risk score.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full risk score for a token.
    pub fn calculate_risk_score(&self, data: &TokenSecurityData) -> RiskScore {
        let factors = RiskFactors {
            contract_security: self.score_contract_security(data),
            liquidity_safety: self.score_liquidity_safety(data),
            holder_distribution: self.score_holder_distribution(data),
            trading_restrictions: self.score_trading_restrictions(data),
        };

        let overall = (factors.contract_security as f64 * WEIGHT_CONTRACT_SECURITY
            + factors.liquidity_safety as f64 * WEIGHT_LIQUIDITY_SAFETY
            + factors.holder_distribution as f64 * WEIGHT_HOLDER_DISTRIBUTION
            + factors.trading_restrictions as f64 * WEIGHT_TRADING_RESTRICTIONS)
            .round() as u8;

        RiskScore {
            overall,
            category: RiskCategory::from_score(overall),
            factors,
            warnings: self.collect_warnings(data),
            critical_issues: self.collect_critical_issues(data),
        }
    }

    fn score_contract_security(&self, data: &TokenSecurityData) -> u8 {
        let mut score: u32 = 0;
        if !flag_set(&data.is_open_source) {
            score += 20;
        }
        if flag_set(&data.is_proxy) {
            score += 10;
        }
        if flag_set(&data.is_mintable) {
            score += 15;
        }
        if flag_set(&data.can_take_back_ownership) {
            score += 25;
        }
        if flag_set(&data.owner_change_balance) {
            score += 30;
        }
        if flag_set(&data.hidden_owner) {
            score += 20;
        }
        if flag_set(&data.self_destruct) {
            score += 40;
        }
        if flag_set(&data.external_call) {
            score += 10;
        }
        score.min(100) as u8
    }

    fn score_liquidity_safety(&self, data: &TokenSecurityData) -> u8 {
        let lp_count = data.lp_holder_count;
        let score: u32 = if lp_count < 10 {
            40
        } else if lp_count < 50 {
            20
        } else if lp_count < 100 {
            10
        } else {
            0
        };
        score.min(100) as u8
    }

    fn score_holder_distribution(&self, data: &TokenSecurityData) -> u8 {
        let mut score: u32 = 0;

        if !data.holders.is_empty() {
            let top10 = data.top10_holder_percent();
            if top10 > 80.0 {
                score += 40;
            } else if top10 > 60.0 {
                score += 25;
            } else if top10 > 40.0 {
                score += 10;
            }
        }

        let creator_percent = data.creator_percent_value();
        if creator_percent > 50.0 {
            score += 30;
        } else if creator_percent > 30.0 {
            score += 15;
        } else if creator_percent > 10.0 {
            score += 5;
        }

        if data.holder_count < 100 {
            score += 25;
        } else if data.holder_count < 500 {
            score += 10;
        }

        score.min(100) as u8
    }

    fn score_trading_restrictions(&self, data: &TokenSecurityData) -> u8 {
        // A honeypot dominates every other restriction.
        if flag_set(&data.is_honeypot) {
            return 100;
        }

        let mut score: u32 = 0;
        if flag_set(&data.cannot_buy) {
            score += 50;
        }
        if flag_set(&data.cannot_sell_all) {
            score += 50;
        }
        if flag_set(&data.transfer_pausable) {
            score += 30;
        }
        if flag_set(&data.is_blacklisted) {
            score += 40;
        }
        if flag_set(&data.slippage_modifiable) {
            score += 20;
        }

        let buy_tax = data.buy_tax_value();
        let sell_tax = data.sell_tax_value();
        if buy_tax > 20.0 || sell_tax > 20.0 {
            score += 30;
        } else if buy_tax > 10.0 || sell_tax > 10.0 {
            score += 15;
        }

        score.min(100) as u8
    }

    fn collect_warnings(&self, data: &TokenSecurityData) -> Vec<String> {
        let mut warnings = Vec::new();

        if !flag_set(&data.is_open_source) {
            warnings.push("Contract not verified".to_string());
        }
        if flag_set(&data.is_mintable) {
            warnings.push("Token supply can be increased".to_string());
        }
        if flag_set(&data.is_proxy) {
            warnings.push("Proxy contract - can be upgraded".to_string());
        }

        let buy_tax = data.buy_tax_value();
        let sell_tax = data.sell_tax_value();
        if buy_tax > 5.0 || sell_tax > 5.0 {
            warnings.push(format!("Tax: {}% buy / {}% sell", buy_tax, sell_tax));
        }

        if flag_set(&data.transfer_pausable) {
            warnings.push("Transfers can be paused".to_string());
        }
        if data.lp_holder_count < 50 {
            warnings.push(format!("Low LP count: {} holders", data.lp_holder_count));
        }

        warnings
    }

    fn collect_critical_issues(&self, data: &TokenSecurityData) -> Vec<String> {
        let mut critical = Vec::new();

        if flag_set(&data.is_honeypot) {
            critical.push("HONEYPOT - Cannot sell!".to_string());
        }
        if flag_set(&data.cannot_buy) {
            critical.push("Buying disabled".to_string());
        }
        if flag_set(&data.cannot_sell_all) {
            critical.push("Cannot sell all tokens".to_string());
        }
        if flag_set(&data.self_destruct) {
            critical.push("Self-destruct function exists".to_string());
        }
        if flag_set(&data.owner_change_balance) {
            critical.push("Owner can modify balances".to_string());
        }
        if flag_set(&data.can_take_back_ownership) {
            critical.push("Ownership can be reclaimed".to_string());
        }

        critical
    }
}
