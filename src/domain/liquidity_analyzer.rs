//! Liquidity Analyzer
//!
//! Scores LP holder count, diversity and locked supply into a 0-100 health
//! score with a status tier, risk callouts and recommendations.
//!
//! The concentration figure is a banded estimate from the LP holder count
//! alone - the provider does not expose per-holder LP balances, so this is
//! a stated approximation rather than a measurement.

use serde::{Deserialize, Serialize};

use super::bands::pick_band_at_least;
use super::security::TokenSecurityData;

/// LP holder diversity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LpDiversity {
    High,
    Medium,
    Low,
}

/// Overall liquidity status tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiquidityStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl LiquidityStatus {
    /// Status ladder: >=90 excellent, >=70 good, >=50 fair, >=30 poor,
    /// else critical.
    pub fn from_score(score: u8) -> Self {
        pick_band_at_least(
            score as f64,
            &[
                (90.0, LiquidityStatus::Excellent),
                (70.0, LiquidityStatus::Good),
                (50.0, LiquidityStatus::Fair),
                (30.0, LiquidityStatus::Poor),
            ],
            LiquidityStatus::Critical,
        )
    }

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityStatus::Excellent => "EXCELLENT",
            LiquidityStatus::Good => "GOOD",
            LiquidityStatus::Fair => "FAIR",
            LiquidityStatus::Poor => "POOR",
            LiquidityStatus::Critical => "CRITICAL",
        }
    }
}

/// LP metrics reported alongside the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityMetrics {
    pub lp_holders: u64,
    /// Estimated share held by the top LP holders, from count bands only.
    pub concentration: u8,
    pub diversity: LpDiversity,
}

/// Liquidity health assessment for one token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityHealth {
    pub health_score: u8,
    pub status: LiquidityStatus,
    pub metrics: LiquidityMetrics,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scores liquidity structure from the security data's LP fields.
#[derive(Debug, Clone, Default)]
pub struct LiquidityAnalyzer;

impl LiquidityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the liquidity health assessment.
    pub fn analyze_liquidity(&self, data: &TokenSecurityData) -> LiquidityHealth {
        let lp_count = data.lp_holder_count;
        let lp_supply = data.lp_total_supply_value();

        // LP holder count term, max 40.
        let mut health_score: u32 = if lp_count >= 100 {
            40
        } else if lp_count >= 50 {
            30
        } else if lp_count >= 20 {
            20
        } else if lp_count >= 10 {
            10
        } else {
            0
        };

        // Diversity term, max 30.
        let diversity = Self::diversity(lp_count);
        health_score += match diversity {
            LpDiversity::High => 30,
            LpDiversity::Medium => 20,
            LpDiversity::Low => 10,
        };

        // Supply-locked term, max 30.
        health_score += if lp_supply > 0.0 { 30 } else { 15 };

        // The three bands sum to at most 100 by construction.
        let health_score = health_score as u8;
        let status = LiquidityStatus::from_score(health_score);
        let concentration = Self::estimate_concentration(lp_count);

        LiquidityHealth {
            health_score,
            status,
            metrics: LiquidityMetrics {
                lp_holders: lp_count,
                concentration,
                diversity,
            },
            risks: Self::identify_risks(lp_count, concentration),
            recommendations: Self::recommendations(status),
        }
    }

    fn diversity(lp_count: u64) -> LpDiversity {
        if lp_count >= 50 {
            LpDiversity::High
        } else if lp_count >= 20 {
            LpDiversity::Medium
        } else {
            LpDiversity::Low
        }
    }

    /// Banded estimate of top-LP-holder share. Real per-holder LP data is
    /// not available from the provider.
    fn estimate_concentration(lp_count: u64) -> u8 {
        if lp_count < 5 {
            90
        } else if lp_count < 20 {
            70
        } else if lp_count < 50 {
            50
        } else {
            30
        }
    }

    fn identify_risks(lp_count: u64, concentration: u8) -> Vec<String> {
        let mut risks = Vec::new();

        if lp_count < 10 {
            risks.push(
                "CRITICAL: Very few LP holders - liquidity can be pulled anytime".to_string(),
            );
        } else if lp_count < 20 {
            risks.push("LOW LP holder count - vulnerable to rug pull".to_string());
        }

        if concentration > 70 {
            risks.push("High concentration - few holders control most liquidity".to_string());
        }

        if lp_count == 1 {
            risks.push("SINGLE LP PROVIDER - EXTREME RUG PULL RISK!".to_string());
        }

        risks
    }

    fn recommendations(status: LiquidityStatus) -> Vec<String> {
        match status {
            LiquidityStatus::Critical | LiquidityStatus::Poor => vec![
                "DO NOT INVEST - Liquidity structure is unsafe".to_string(),
                "Wait for more LP providers before considering investment".to_string(),
            ],
            LiquidityStatus::Fair => vec![
                "Use extreme caution - only invest small amounts".to_string(),
                "Set tight stop losses and monitor liquidity changes".to_string(),
            ],
            LiquidityStatus::Good => {
                vec!["Acceptable liquidity - proceed with normal caution".to_string()]
            }
            LiquidityStatus::Excellent => {
                vec!["Excellent liquidity health - safer for investment".to_string()]
            }
        }
    }
}
