//! Scanner Integration Tests
//!
//! Exercise the full scan flow against mock providers:
//! 1. Security fetch -> risk engine -> scan result
//! 2. Advanced scan assembling all analyzer sections and the verdict
//! 3. Error taxonomy and graceful degradation of optional enrichments
//!
//! All tests are deterministic (no real network calls) and use mock data.

use std::sync::Arc;

use tokensentry::application::{ScanError, TokenScanner};
use tokensentry::domain::{
    ConcentrationLevel, RiskCategory, RugPullRisk, TokenHolder, TokenSecurityData, VerdictRating,
};
use tokensentry::ports::mocks::{MockMarketData, MockSecurityData};
use tokensentry::ports::{DexData, PriceData};

// ============================================================================
// Test Fixtures
// ============================================================================

/// A clean, well-distributed token with nothing to flag.
fn clean_token() -> TokenSecurityData {
    TokenSecurityData {
        contract_address: "0x1111111111111111111111111111111111111111".to_string(),
        chain_id: "1".to_string(),
        token_name: "Clean Token".to_string(),
        token_symbol: "CLEAN".to_string(),
        holder_count: 5000,
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
        lp_holder_count: 150,
        lp_total_supply: "750000".to_string(),
        holders: Vec::new(),
        creator_percent: "1".to_string(),
    }
}

fn holder(percent: &str) -> TokenHolder {
    TokenHolder {
        address: format!("0xholder{}", percent),
        balance: "1000".to_string(),
        percent: percent.to_string(),
        is_contract: false,
    }
}

/// The reference scenario: unverified mintable contract, 3 LP holders,
/// one 40% holder, creator at 35%, 50 total holders.
fn suspicious_token() -> TokenSecurityData {
    let mut data = clean_token();
    data.contract_address = "0x2222222222222222222222222222222222222222".to_string();
    data.token_name = "Sus Token".to_string();
    data.token_symbol = "SUS".to_string();
    data.is_open_source = "0".to_string();
    data.is_mintable = "1".to_string();
    data.lp_holder_count = 3;
    data.holders = vec![holder("40")];
    data.creator_percent = "35".to_string();
    data.holder_count = 50;
    data
}

fn honeypot_token() -> TokenSecurityData {
    let mut data = clean_token();
    data.contract_address = "0x3333333333333333333333333333333333333333".to_string();
    data.token_name = "Trap Token".to_string();
    data.token_symbol = "TRAP".to_string();
    data.is_honeypot = "1".to_string();
    data.cannot_sell_all = "1".to_string();
    data.hidden_owner = "1".to_string();
    data.lp_holder_count = 2;
    data
}

fn scanner_for(data: TokenSecurityData) -> TokenScanner {
    let address = data.contract_address.clone();
    let mock = MockSecurityData::new().with_token("1", &address, data);
    TokenScanner::new(Arc::new(mock))
}

// ============================================================================
// Basic scan flow
// ============================================================================

#[tokio::test]
async fn clean_token_scans_low_risk() {
    let data = clean_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan("1", &address).await.unwrap();
    assert_eq!(result.risk_score.overall, 0);
    assert_eq!(result.risk_score.category, RiskCategory::LowRisk);
    assert!(result.risk_score.warnings.is_empty());
    assert!(result.risk_score.critical_issues.is_empty());
}

#[tokio::test]
async fn suspicious_token_hits_reference_factor_scores() {
    let data = suspicious_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan("1", &address).await.unwrap();
    let factors = &result.risk_score.factors;

    assert_eq!(factors.contract_security, 35);
    assert_eq!(factors.liquidity_safety, 40);
    assert_eq!(factors.holder_distribution, 40);
    assert_eq!(factors.trading_restrictions, 0);
    assert_eq!(result.risk_score.overall, 29);
    assert_eq!(result.risk_score.category, RiskCategory::MediumRisk);
}

#[tokio::test]
async fn honeypot_dominates_trading_restrictions() {
    let data = honeypot_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan("1", &address).await.unwrap();
    assert_eq!(result.risk_score.factors.trading_restrictions, 100);
    assert!(result
        .risk_score
        .critical_issues
        .iter()
        .any(|c| c.contains("HONEYPOT")));
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[tokio::test]
async fn missing_input_is_invalid_input() {
    let scanner = TokenScanner::new(Arc::new(MockSecurityData::new()));
    assert!(matches!(
        scanner.scan("1", "").await,
        Err(ScanError::InvalidInput)
    ));
    assert!(matches!(
        scanner.scan("", "0xabc").await,
        Err(ScanError::InvalidInput)
    ));
}

#[tokio::test]
async fn unknown_address_is_token_not_found() {
    let scanner = TokenScanner::new(Arc::new(MockSecurityData::new()));
    assert!(matches!(
        scanner.scan("1", "0xdoesnotexist").await,
        Err(ScanError::TokenNotFound)
    ));
}

#[tokio::test]
async fn security_provider_failure_aborts_scan() {
    let mock = MockSecurityData::new().with_failure("upstream exploded");
    let scanner = TokenScanner::new(Arc::new(mock));

    let err = scanner.scan("1", "0xabc").await.unwrap_err();
    assert!(matches!(err, ScanError::Provider(_)));
}

// ============================================================================
// Advanced scan
// ============================================================================

#[tokio::test]
async fn advanced_scan_builds_every_section() {
    let data = honeypot_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan_advanced("1", &address).await.unwrap();
    let advanced = result.advanced.expect("advanced sections");

    // hidden owner fires Owner Privileges + Hidden Functions (40 + 40),
    // 2 LP holders stay under the lock window but trip concentration (40).
    assert_eq!(advanced.rug_pull.probability, 100);
    assert_eq!(advanced.rug_pull.risk, RugPullRisk::Critical);

    // 2 LP holders: 0 + 10 + 30 (lp supply set) = 40.
    assert_eq!(advanced.liquidity.health_score, 40);

    assert_eq!(advanced.whales.whale_count, 0);
    assert_eq!(advanced.whales.concentration, ConcentrationLevel::Healthy);

    // TRAP is not on the major-token allow-list.
    assert!(!advanced.social.has_github);

    let verdict = result.verdict.expect("verdict");
    // avg = (risk 41 + rug 100 + (100 - 40)) / 3 = 67 -> RISKY.
    assert_eq!(verdict.rating, VerdictRating::Risky);
}

#[tokio::test]
async fn advanced_scan_attaches_market_data() {
    let data = clean_token();
    let address = data.contract_address.clone();
    let security = MockSecurityData::new().with_token("1", &address, data);
    let market = MockMarketData::new()
        .with_price(
            "1",
            &address,
            PriceData {
                usd: 2.34,
                usd_24h_change: -1.2,
                usd_market_cap: 10_000_000.0,
                usd_24h_vol: 450_000.0,
            },
        )
        .with_dex(
            "1",
            &address,
            DexData {
                price_usd: "2.33".to_string(),
                liquidity_usd: 320_000.0,
                fdv: 12_000_000.0,
                market_cap: 10_000_000.0,
                volume_24h: 440_000.0,
                price_change_24h: -1.1,
                buys_24h: 210,
                sells_24h: 180,
            },
        );

    let scanner =
        TokenScanner::new(Arc::new(security)).with_market_data(Arc::new(market.clone()));

    let result = scanner.scan_advanced("1", &address).await.unwrap();
    let advanced = result.advanced.unwrap();

    assert_eq!(advanced.price.unwrap().usd, 2.34);
    assert_eq!(advanced.dex.unwrap().buys_24h, 210);
    // Both enrichments were requested.
    assert_eq!(market.calls().len(), 2);
}

#[tokio::test]
async fn failed_enrichment_never_fails_the_scan() {
    let data = clean_token();
    let address = data.contract_address.clone();
    let security = MockSecurityData::new().with_token("1", &address, data);
    let market = MockMarketData::new().with_failure("rate limited");

    let scanner = TokenScanner::new(Arc::new(security)).with_market_data(Arc::new(market));

    let result = scanner.scan_advanced("1", &address).await.unwrap();
    let advanced = result.advanced.unwrap();

    assert!(advanced.price.is_none());
    assert!(advanced.dex.is_none());
    assert!(result.verdict.is_some());
}

#[tokio::test]
async fn clean_token_verdict_is_safe_with_expected_confidence() {
    let data = clean_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan_advanced("1", &address).await.unwrap();
    let verdict = result.verdict.unwrap();

    // risk 0, rug 0, liquidity 100: avg = (0 + 0 + 0) / 3 = 0 -> SAFE,
    // confidence = min(95, 70 + 100/10) = 80.
    assert_eq!(verdict.rating, VerdictRating::Safe);
    assert!((verdict.confidence - 80.0).abs() < f64::EPSILON);
}

// ============================================================================
// Result shape
// ============================================================================

#[tokio::test]
async fn scan_result_serializes_presentation_shape() {
    let data = suspicious_token();
    let address = data.contract_address.clone();
    let scanner = scanner_for(data);

    let result = scanner.scan_advanced("1", &address).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["tokenAddress"], address);
    assert_eq!(json["chainId"], "1");
    assert_eq!(json["riskScore"]["category"], "MEDIUM_RISK");
    assert_eq!(json["riskScore"]["factors"]["contractSecurity"], 35);
    assert!(json["scannedAt"].is_string());
    assert!(json["advanced"]["rugPull"]["probability"].is_number());
    assert!(json["verdict"]["rating"].is_string());
    // Absent market sections are omitted entirely.
    assert!(json["advanced"].get("price").is_none());
}
