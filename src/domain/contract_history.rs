//! Contract History Scoring
//!
//! Turns a contract's first-seen timestamp into an age-based trust score
//! and deployment-age warnings. The raw first-transaction lookup lives in
//! the explorer adapter; everything here is pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contract younger than this many days counts as brand new.
const NEW_CONTRACT_AGE_DAYS: u64 = 7;

/// Age-derived history assessment for one contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractHistory {
    /// Days since the first on-chain transaction.
    pub age_days: u64,
    pub first_block: u64,
    /// Total transaction count; 0 until the explorer adapter grows a
    /// second lookup for it.
    pub transaction_count: u64,
    pub last_activity: DateTime<Utc>,
    pub is_new: bool,
    pub trust_score: u8,
    pub warnings: Vec<String>,
}

impl ContractHistory {
    /// Score a contract from its first transaction.
    pub fn evaluate(first_block: u64, first_seen: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let age_days = (now - first_seen).num_days().max(0) as u64;
        let is_new = age_days < NEW_CONTRACT_AGE_DAYS;

        Self {
            age_days,
            first_block,
            transaction_count: 0,
            last_activity: now,
            is_new,
            trust_score: trust_score(age_days, is_new),
            warnings: age_warnings(age_days, is_new),
        }
    }
}

/// Trust ladder by deployment age: brand new contracts start at 20 and
/// trust grows to 90 past six months.
fn trust_score(age_days: u64, is_new: bool) -> u8 {
    if is_new {
        20
    } else if age_days < 30 {
        40
    } else if age_days < 90 {
        60
    } else if age_days < 180 {
        75
    } else {
        90
    }
}

fn age_warnings(age_days: u64, is_new: bool) -> Vec<String> {
    let mut warnings = Vec::new();

    if is_new {
        warnings.push("VERY NEW TOKEN (less than 7 days old) - EXTREME CAUTION!".to_string());
    } else if age_days < 30 {
        warnings.push("Recently deployed (less than 1 month) - higher risk".to_string());
    }

    if age_days > 365 {
        warnings.push("Established token (over 1 year old) - more reliable".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(days_ago: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        (now - Duration::days(days_ago), now)
    }

    #[test]
    fn test_brand_new_contract() {
        let (first_seen, now) = at(2);
        let history = ContractHistory::evaluate(19_000_000, first_seen, now);

        assert_eq!(history.age_days, 2);
        assert!(history.is_new);
        assert_eq!(history.trust_score, 20);
        assert!(history.warnings[0].contains("VERY NEW TOKEN"));
    }

    #[test]
    fn test_trust_ladder() {
        let cases = [(3, 20), (10, 40), (45, 60), (120, 75), (200, 90)];
        for (days, expected) in cases {
            let (first_seen, now) = at(days);
            let history = ContractHistory::evaluate(1, first_seen, now);
            assert_eq!(history.trust_score, expected, "age {} days", days);
        }
    }

    #[test]
    fn test_recently_deployed_warning() {
        let (first_seen, now) = at(14);
        let history = ContractHistory::evaluate(1, first_seen, now);

        assert!(!history.is_new);
        assert!(history.warnings[0].contains("Recently deployed"));
    }

    #[test]
    fn test_established_token_note() {
        let (first_seen, now) = at(400);
        let history = ContractHistory::evaluate(1, first_seen, now);

        assert_eq!(history.trust_score, 90);
        assert!(history.warnings.iter().any(|w| w.contains("Established token")));
    }

    #[test]
    fn test_mid_age_has_no_warnings() {
        let (first_seen, now) = at(120);
        let history = ContractHistory::evaluate(1, first_seen, now);
        assert!(history.warnings.is_empty());
    }

    #[test]
    fn test_future_first_seen_clamps_to_zero_age() {
        // A skewed explorer clock must not underflow the age.
        let (first_seen, now) = at(-3);
        let history = ContractHistory::evaluate(1, first_seen, now);
        assert_eq!(history.age_days, 0);
        assert!(history.is_new);
    }
}
