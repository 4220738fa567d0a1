//! Overall Verdict
//!
//! Folds the three high-level scores - composite risk, rug pull
//! probability and liquidity health - into a single rating with a
//! confidence percentage and a recommendation.

use serde::{Deserialize, Serialize};

use super::bands::pick_band;

/// Final rating tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictRating {
    Safe,
    Moderate,
    Risky,
    Dangerous,
}

impl VerdictRating {
    /// Rating ladder over the averaged risk: <25 safe, <50 moderate,
    /// <75 risky, else dangerous.
    pub fn from_avg_risk(avg_risk: f64) -> Self {
        pick_band(
            avg_risk,
            &[
                (25.0, VerdictRating::Safe),
                (50.0, VerdictRating::Moderate),
                (75.0, VerdictRating::Risky),
            ],
            VerdictRating::Dangerous,
        )
    }

    /// Display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictRating::Safe => "SAFE",
            VerdictRating::Moderate => "MODERATE",
            VerdictRating::Risky => "RISKY",
            VerdictRating::Dangerous => "DANGEROUS",
        }
    }

    fn recommendation(&self) -> &'static str {
        match self {
            VerdictRating::Safe => {
                "All signals look healthy. Standard due diligence still applies."
            }
            VerdictRating::Moderate => {
                "Mixed signals. Keep positions small and watch liquidity closely."
            }
            VerdictRating::Risky => {
                "Multiple elevated risk signals. Avoid unless you accept losing the position."
            }
            VerdictRating::Dangerous => {
                "Severe risk across the board. Do not interact with this token."
            }
        }
    }
}

/// Final aggregated verdict for a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub rating: VerdictRating,
    /// Confidence percentage; grows with liquidity health, capped at 95.
    pub confidence: f64,
    pub recommendation: String,
}

/// Average the composite risk, the rug pull probability and the inverted
/// liquidity health into the final verdict.
pub fn calculate_verdict(
    risk_score: u8,
    rug_pull_probability: u8,
    liquidity_health: u8,
) -> Verdict {
    let avg_risk = (risk_score as f64
        + rug_pull_probability as f64
        + (100.0 - liquidity_health as f64))
        / 3.0;

    let rating = VerdictRating::from_avg_risk(avg_risk);
    let confidence = (70.0 + liquidity_health as f64 / 10.0).min(95.0);

    Verdict {
        rating,
        confidence,
        recommendation: rating.recommendation().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_low_risk_token_is_safe() {
        // avg = (10 + 10 + 10) / 3 = 10.
        let verdict = calculate_verdict(10, 10, 90);
        assert_eq!(verdict.rating, VerdictRating::Safe);
        assert_relative_eq!(verdict.confidence, 79.0);
    }

    #[test]
    fn test_rating_ladder() {
        assert_eq!(VerdictRating::from_avg_risk(24.9), VerdictRating::Safe);
        assert_eq!(VerdictRating::from_avg_risk(25.0), VerdictRating::Moderate);
        assert_eq!(VerdictRating::from_avg_risk(49.9), VerdictRating::Moderate);
        assert_eq!(VerdictRating::from_avg_risk(50.0), VerdictRating::Risky);
        assert_eq!(VerdictRating::from_avg_risk(74.9), VerdictRating::Risky);
        assert_eq!(VerdictRating::from_avg_risk(75.0), VerdictRating::Dangerous);
    }

    #[test]
    fn test_poor_liquidity_drags_verdict_down() {
        // avg = (0 + 0 + 100) / 3 = 33.3 despite perfect risk scores.
        let verdict = calculate_verdict(0, 0, 0);
        assert_eq!(verdict.rating, VerdictRating::Moderate);
        assert_relative_eq!(verdict.confidence, 70.0);
    }

    #[test]
    fn test_confidence_caps_at_95() {
        // 70 + 100/10 = 80, under the cap.
        let verdict = calculate_verdict(0, 0, 100);
        assert_relative_eq!(verdict.confidence, 80.0);

        // The cap only binds for hypothetical health beyond the scale, so
        // every real input stays below it.
        assert!(verdict.confidence <= 95.0);
    }

    #[test]
    fn test_worst_case_is_dangerous() {
        let verdict = calculate_verdict(100, 100, 0);
        assert_eq!(verdict.rating, VerdictRating::Dangerous);
        assert!(verdict.recommendation.contains("Do not interact"));
    }

    #[test]
    fn test_confidence_may_be_fractional() {
        let verdict = calculate_verdict(50, 50, 25);
        assert_relative_eq!(verdict.confidence, 72.5);
    }
}
