//! Whale Detector
//!
//! Partitions the holder list into whales (>1% of supply), measures top-10
//! concentration and assigns a per-whale risk grade.
//!
//! Concentration sums the first ten holders in the order the provider
//! supplied them. The provider sorts holders descending by balance; this
//! module deliberately does not re-sort, so a provider that breaks that
//! guarantee degrades the "top 10" semantics rather than producing
//! different numbers here than upstream consumers see.

use serde::{Deserialize, Serialize};

use super::bands::pick_band;
use super::security::TokenSecurityData;

/// Risk grade for an individual whale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WhaleRisk {
    Low,
    Medium,
    High,
}

/// Supply concentration tier from the top-10 holder share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConcentrationLevel {
    Healthy,
    Moderate,
    Dangerous,
}

impl ConcentrationLevel {
    /// Tier ladder: <30 healthy, <60 moderate, else dangerous.
    pub fn from_top10(top10_percent: f64) -> Self {
        pick_band(
            top10_percent,
            &[
                (30.0, ConcentrationLevel::Healthy),
                (60.0, ConcentrationLevel::Moderate),
            ],
            ConcentrationLevel::Dangerous,
        )
    }

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcentrationLevel::Healthy => "HEALTHY",
            ConcentrationLevel::Moderate => "MODERATE",
            ConcentrationLevel::Dangerous => "DANGEROUS",
        }
    }
}

/// One of the largest whale positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhaleHolding {
    pub address: String,
    pub percentage: f64,
    pub is_contract: bool,
    pub risk: WhaleRisk,
}

/// Whale structure assessment for one token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhaleAnalysis {
    pub has_whales: bool,
    pub whale_count: usize,
    /// Top-10 holder share, summed in supplied order.
    pub whale_percentage: f64,
    /// The first five whales, graded individually.
    pub top_whales: Vec<WhaleHolding>,
    pub concentration: ConcentrationLevel,
    pub warnings: Vec<String>,
}

/// Whale share threshold: a holder above 1% of supply counts as a whale.
const WHALE_THRESHOLD_PCT: f64 = 1.0;

/// Analyzes holder concentration from the security data's holder list.
#[derive(Debug, Clone, Default)]
pub struct WhaleDetector;

impl WhaleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Compute the whale analysis.
    pub fn analyze_whales(&self, data: &TokenSecurityData) -> WhaleAnalysis {
        let whales: Vec<_> = data
            .holders
            .iter()
            .filter(|h| h.percent_value() > WHALE_THRESHOLD_PCT)
            .collect();

        let top10_percent = data.top10_holder_percent();

        let top_whales: Vec<WhaleHolding> = whales
            .iter()
            .take(5)
            .map(|h| {
                let percentage = h.percent_value();
                WhaleHolding {
                    address: h.address.clone(),
                    percentage,
                    is_contract: h.is_contract,
                    risk: Self::assess_whale_risk(percentage, h.is_contract),
                }
            })
            .collect();

        let concentration = ConcentrationLevel::from_top10(top10_percent);
        let warnings = Self::warnings(&top_whales, whales.len(), top10_percent);

        WhaleAnalysis {
            has_whales: !whales.is_empty(),
            whale_count: whales.len(),
            whale_percentage: top10_percent,
            top_whales,
            concentration,
            warnings,
        }
    }

    /// Contract holders grade LOW: they are usually DEX pools or protocol
    /// vaults, not wallets that can dump.
    fn assess_whale_risk(percentage: f64, is_contract: bool) -> WhaleRisk {
        if is_contract {
            WhaleRisk::Low
        } else if percentage > 10.0 {
            WhaleRisk::High
        } else if percentage > 5.0 {
            WhaleRisk::Medium
        } else {
            WhaleRisk::Low
        }
    }

    fn warnings(top_whales: &[WhaleHolding], whale_count: usize, top10: f64) -> Vec<String> {
        let mut warnings = Vec::new();

        if top10 > 70.0 {
            warnings.push(format!(
                "EXTREME concentration: Top 10 holders control {:.1}%",
                top10
            ));
        }

        let high_risk = top_whales.iter().filter(|w| w.risk == WhaleRisk::High).count();
        if high_risk > 0 {
            warnings.push(format!(
                "{} high-risk whales detected (>10% each)",
                high_risk
            ));
        }

        if whale_count > 10 {
            warnings.push(format!("{} whales identified (>1% ownership)", whale_count));
        }

        warnings
    }
}
