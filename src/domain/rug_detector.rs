//! Rug Pull Detector
//!
//! Evaluates ten independent indicators over the token's security data and
//! folds the detected ones into a 0-100 probability with a risk tier and a
//! recommendation. The liquidity-lock and concentration indicators are
//! estimates derived from the LP holder count alone, not from inspecting
//! actual lock contracts - the provider does not expose lock status.

use serde::{Deserialize, Serialize};

use super::bands::pick_band;
use super::security::{flag_set, TokenSecurityData};

/// Severity weight of an indicator when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Contribution to the aggregate probability.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 15,
            Severity::High => 25,
            Severity::Critical => 40,
        }
    }
}

/// Rug pull probability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RugPullRisk {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RugPullRisk {
    /// Tier ladder: <20 minimal, <40 low, <60 medium, <80 high, else critical.
    pub fn from_probability(probability: u8) -> Self {
        pick_band(
            probability as f64,
            &[
                (20.0, RugPullRisk::Minimal),
                (40.0, RugPullRisk::Low),
                (60.0, RugPullRisk::Medium),
                (80.0, RugPullRisk::High),
            ],
            RugPullRisk::Critical,
        )
    }

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RugPullRisk::Minimal => "MINIMAL",
            RugPullRisk::Low => "LOW",
            RugPullRisk::Medium => "MEDIUM",
            RugPullRisk::High => "HIGH",
            RugPullRisk::Critical => "CRITICAL",
        }
    }

    fn recommendation(&self) -> &'static str {
        match self {
            RugPullRisk::Minimal => {
                "Low rug pull risk. Token appears relatively safe for investment."
            }
            RugPullRisk::Low => {
                "Some minor concerns. Invest with caution and proper risk management."
            }
            RugPullRisk::Medium => {
                "Moderate rug pull risk detected. Only invest what you can afford to lose."
            }
            RugPullRisk::High => "HIGH RUG PULL RISK! Strongly recommend avoiding this token.",
            RugPullRisk::Critical => {
                "CRITICAL DANGER! This token has extreme rug pull characteristics. DO NOT INVEST."
            }
        }
    }
}

/// One indicator check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub detected: bool,
    pub severity: Severity,
    pub description: String,
}

/// Aggregate rug pull assessment. `indicators` holds only the checks that
/// fired, in check order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RugPullScore {
    pub probability: u8,
    pub risk: RugPullRisk,
    pub indicators: Vec<Indicator>,
    pub recommendation: String,
}

/// Runs the indicator battery over a token's security data.
#[derive(Debug, Clone, Default)]
pub struct RugPullDetector;

impl RugPullDetector {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all indicators and aggregate into a probability and tier.
    pub fn calculate_rug_pull_risk(&self, data: &TokenSecurityData) -> RugPullScore {
        let indicators = [
            self.check_liquidity_lock(data),
            self.check_owner_privileges(data),
            self.check_mint_function(data),
            self.check_hidden_functions(data),
            self.check_tax_manipulation(data),
            self.check_liquidity_concentration(data),
            self.check_creator_holdings(data),
            self.check_contract_verification(data),
            self.check_proxy_pattern(data),
            self.check_blacklist_function(data),
        ];

        let detected: Vec<Indicator> = indicators.into_iter().filter(|i| i.detected).collect();

        let raw_score: u32 = detected.iter().map(|i| i.severity.weight()).sum();
        let probability = raw_score.min(100) as u8;
        let risk = RugPullRisk::from_probability(probability);
        let recommendation = format!(
            "{} ({} risk indicators detected)",
            risk.recommendation(),
            detected.len()
        );

        RugPullScore {
            probability,
            risk,
            indicators: detected,
            recommendation,
        }
    }

    /// LP-count proxy for a liquidity lock. Fewer than 5 LP holders usually
    /// means the pool tokens sit in a locker contract, so the suspicious
    /// window is 5..20: enough holders to rule out a locker, too few to
    /// call the liquidity distributed.
    fn check_liquidity_lock(&self, data: &TokenSecurityData) -> Indicator {
        let lp_count = data.lp_holder_count;
        let looks_locked = lp_count < 5;
        let detected = !looks_locked && lp_count < 20;

        Indicator {
            name: "Liquidity Lock".to_string(),
            detected,
            severity: Severity::High,
            description: if lp_count < 20 {
                format!("Low LP holder count ({}) - liquidity may not be locked", lp_count)
            } else {
                "Liquidity appears properly distributed".to_string()
            },
        }
    }

    fn check_owner_privileges(&self, data: &TokenSecurityData) -> Indicator {
        let has_privileges = flag_set(&data.can_take_back_ownership)
            || flag_set(&data.owner_change_balance)
            || flag_set(&data.hidden_owner);

        Indicator {
            name: "Owner Privileges".to_string(),
            detected: has_privileges,
            severity: Severity::Critical,
            description: if has_privileges {
                "Owner retains dangerous privileges (can modify balances/ownership)".to_string()
            } else {
                "Owner privileges appear limited".to_string()
            },
        }
    }

    fn check_mint_function(&self, data: &TokenSecurityData) -> Indicator {
        let mintable = flag_set(&data.is_mintable);

        Indicator {
            name: "Mint Function".to_string(),
            detected: mintable,
            severity: Severity::High,
            description: if mintable {
                "Token supply can be increased - potential dilution risk".to_string()
            } else {
                "Supply is fixed".to_string()
            },
        }
    }

    fn check_hidden_functions(&self, data: &TokenSecurityData) -> Indicator {
        let has_hidden = flag_set(&data.hidden_owner) || flag_set(&data.self_destruct);

        Indicator {
            name: "Hidden Functions".to_string(),
            detected: has_hidden,
            severity: Severity::Critical,
            description: if has_hidden {
                "Hidden owner or self-destruct detected - EXTREME RUG PULL RISK".to_string()
            } else {
                "No hidden functions detected".to_string()
            },
        }
    }

    fn check_tax_manipulation(&self, data: &TokenSecurityData) -> Indicator {
        let buy_tax = data.buy_tax_value();
        let sell_tax = data.sell_tax_value();
        let can_modify = flag_set(&data.slippage_modifiable);
        let suspicious = (buy_tax > 15.0 || sell_tax > 15.0) && can_modify;

        Indicator {
            name: "Tax Manipulation".to_string(),
            detected: suspicious,
            severity: Severity::High,
            description: if suspicious {
                format!(
                    "High taxes ({}%/{}%) with modifiable slippage - rug pull vector",
                    buy_tax, sell_tax
                )
            } else {
                "Tax structure appears reasonable".to_string()
            },
        }
    }

    fn check_liquidity_concentration(&self, data: &TokenSecurityData) -> Indicator {
        let lp_count = data.lp_holder_count;
        let dangerous = lp_count < 10;

        Indicator {
            name: "Liquidity Concentration".to_string(),
            detected: dangerous,
            severity: Severity::Critical,
            description: if dangerous {
                format!("Only {} LP holders - single entity controls liquidity", lp_count)
            } else {
                "Liquidity is well distributed".to_string()
            },
        }
    }

    fn check_creator_holdings(&self, data: &TokenSecurityData) -> Indicator {
        let creator_percent = data.creator_percent_value();
        let suspicious = creator_percent > 30.0;

        Indicator {
            name: "Creator Holdings".to_string(),
            detected: suspicious,
            severity: Severity::Medium,
            description: if suspicious {
                format!("Creator holds {:.1}% - potential dump risk", creator_percent)
            } else {
                "Creator holdings are reasonable".to_string()
            },
        }
    }

    fn check_contract_verification(&self, data: &TokenSecurityData) -> Indicator {
        let unverified = !flag_set(&data.is_open_source);

        Indicator {
            name: "Contract Verification".to_string(),
            detected: unverified,
            severity: Severity::Medium,
            description: if unverified {
                "Contract not verified - impossible to audit code".to_string()
            } else {
                "Contract is verified and auditable".to_string()
            },
        }
    }

    fn check_proxy_pattern(&self, data: &TokenSecurityData) -> Indicator {
        let is_proxy = flag_set(&data.is_proxy);

        Indicator {
            name: "Proxy Pattern".to_string(),
            detected: is_proxy,
            severity: Severity::Medium,
            description: if is_proxy {
                "Proxy contract - logic can be changed post-deployment".to_string()
            } else {
                "Direct implementation (non-upgradeable)".to_string()
            },
        }
    }

    fn check_blacklist_function(&self, data: &TokenSecurityData) -> Indicator {
        let can_blacklist = flag_set(&data.is_blacklisted);

        Indicator {
            name: "Blacklist Capability".to_string(),
            detected: can_blacklist,
            severity: Severity::High,
            description: if can_blacklist {
                "Contract can blacklist addresses - prevents selling".to_string()
            } else {
                "No blacklist function detected".to_string()
            },
        }
    }
}
