//! Token Scanner
//!
//! Orchestrates one scan: fetches the mandatory security record through
//! the security port, runs the pure scoring pipeline, and optionally
//! enriches the result with market data and the secondary analyzers.
//!
//! Enrichment failures are caught here and logged; only the mandatory
//! security fetch can fail a scan.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    calculate_verdict, ContractHistory, LiquidityAnalyzer, LiquidityHealth, RiskEngine,
    RiskScore, RugPullDetector, RugPullScore, SmartMoneyAnalysis, SmartMoneyTracker,
    SocialAnalyzer, SocialMetrics, TokenSecurityData, Verdict, WhaleAnalysis, WhaleDetector,
};
use crate::ports::{
    DexData, HistoryPort, MarketDataPort, PriceData, ProviderError, SecurityDataPort,
};

/// Scan failure taxonomy. All variants are terminal for the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Caller-correctable: the request was missing the address or chain.
    #[error("Missing token address or chain id")]
    InvalidInput,

    /// The security provider has no record for the address - the token may
    /// not exist or the address may be malformed.
    #[error("Token not found or invalid address")]
    TokenNotFound,

    /// The mandatory security fetch failed.
    #[error("Security provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Optional enrichment sections, assembled by [`TokenScanner::scan_advanced`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex: Option<DexData>,
    pub whales: WhaleAnalysis,
    pub rug_pull: RugPullScore,
    pub smart_money: SmartMoneyAnalysis,
    pub liquidity: LiquidityHealth,
    pub social: SocialMetrics,
}

/// One complete scan result, the shape consumed by presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub token_address: String,
    pub chain_id: String,
    pub security_data: TokenSecurityData,
    pub risk_score: RiskScore,
    pub scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

/// Scan orchestrator wiring the provider ports to the scoring pipeline.
pub struct TokenScanner {
    security: Arc<dyn SecurityDataPort>,
    market: Option<Arc<dyn MarketDataPort>>,
    history: Option<Arc<dyn HistoryPort>>,
    risk_engine: RiskEngine,
    rug_detector: RugPullDetector,
    liquidity_analyzer: LiquidityAnalyzer,
    whale_detector: WhaleDetector,
    smart_money: SmartMoneyTracker,
    social: SocialAnalyzer,
}

impl TokenScanner {
    /// Build a scanner over the mandatory security provider. Enrichment
    /// providers are attached with the builder methods.
    pub fn new(security: Arc<dyn SecurityDataPort>) -> Self {
        Self {
            security,
            market: None,
            history: None,
            risk_engine: RiskEngine::new(),
            rug_detector: RugPullDetector::new(),
            liquidity_analyzer: LiquidityAnalyzer::new(),
            whale_detector: WhaleDetector::new(),
            smart_money: SmartMoneyTracker::default(),
            social: SocialAnalyzer::default(),
        }
    }

    /// Attach the optional market data provider.
    pub fn with_market_data(mut self, market: Arc<dyn MarketDataPort>) -> Self {
        self.market = Some(market);
        self
    }

    /// Attach the optional history provider.
    pub fn with_history(mut self, history: Arc<dyn HistoryPort>) -> Self {
        self.history = Some(history);
        self
    }

    /// Run a basic scan: security data plus the composite risk score.
    pub async fn scan(&self, chain_id: &str, address: &str) -> Result<ScanResult, ScanError> {
        Self::validate_input(chain_id, address)?;

        tracing::info!("Scanning token {} on chain {}", address, chain_id);

        let security_data = self
            .security
            .get_token_security(chain_id, address)
            .await?
            .ok_or(ScanError::TokenNotFound)?;

        let risk_score = self.risk_engine.calculate_risk_score(&security_data);
        tracing::debug!(
            "Risk score {} ({:?}) for {}",
            risk_score.overall,
            risk_score.category,
            address
        );

        Ok(ScanResult {
            token_address: address.to_string(),
            chain_id: chain_id.to_string(),
            security_data,
            risk_score,
            scanned_at: Utc::now(),
            advanced: None,
            verdict: None,
        })
    }

    /// Run a full scan: the basic scan plus every secondary analyzer, the
    /// optional market enrichments and the overall verdict.
    pub async fn scan_advanced(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<ScanResult, ScanError> {
        let mut result = self.scan(chain_id, address).await?;
        let data = &result.security_data;

        let rug_pull = self.rug_detector.calculate_rug_pull_risk(data);
        let liquidity = self.liquidity_analyzer.analyze_liquidity(data);
        let whales = self.whale_detector.analyze_whales(data);
        let smart_money = self.smart_money.analyze_smart_money(data);
        let social = self.social.analyze_social(&data.token_name, &data.token_symbol);

        let (price, dex) = self.fetch_market_data(chain_id, address).await;

        let verdict = calculate_verdict(
            result.risk_score.overall,
            rug_pull.probability,
            liquidity.health_score,
        );

        result.advanced = Some(AdvancedData {
            price,
            dex,
            whales,
            rug_pull,
            smart_money,
            liquidity,
            social,
        });
        result.verdict = Some(verdict);

        Ok(result)
    }

    /// Contract deployment history, when a history provider is attached.
    /// Failures degrade to `None`; history never fails a caller.
    pub async fn contract_history(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Option<ContractHistory> {
        let history = self.history.as_ref()?;
        match history.analyze_history(chain_id, address).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("History lookup failed for {}: {}", address, e);
                None
            }
        }
    }

    /// Fetch both market enrichments, degrading each failure to `None`.
    async fn fetch_market_data(
        &self,
        chain_id: &str,
        address: &str,
    ) -> (Option<PriceData>, Option<DexData>) {
        let Some(market) = self.market.as_ref() else {
            return (None, None);
        };

        let price = match market.get_token_price(chain_id, address).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("Price enrichment failed for {}: {}", address, e);
                None
            }
        };

        let dex = match market.get_dex_data(chain_id, address).await {
            Ok(dex) => dex,
            Err(e) => {
                tracing::warn!("DEX enrichment failed for {}: {}", address, e);
                None
            }
        };

        (price, dex)
    }

    fn validate_input(chain_id: &str, address: &str) -> Result<(), ScanError> {
        if chain_id.trim().is_empty() || address.trim().is_empty() {
            return Err(ScanError::InvalidInput);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskCategory, VerdictRating};
    use crate::ports::mocks::{MockMarketData, MockSecurityData};

    fn scanner_with(mock: MockSecurityData) -> TokenScanner {
        TokenScanner::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_empty_input_is_invalid() {
        let scanner = scanner_with(MockSecurityData::new());

        assert!(matches!(
            scanner.scan("", "0xabc").await,
            Err(ScanError::InvalidInput)
        ));
        assert!(matches!(
            scanner.scan("1", "  ").await,
            Err(ScanError::InvalidInput)
        ));
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let scanner = scanner_with(MockSecurityData::new());

        let err = scanner.scan("1", "0xmissing").await.unwrap_err();
        assert!(matches!(err, ScanError::TokenNotFound));
    }

    #[tokio::test]
    async fn test_mandatory_provider_failure_is_terminal() {
        let scanner = scanner_with(MockSecurityData::new().with_failure("goplus down"));

        let err = scanner.scan("1", "0xabc").await.unwrap_err();
        assert!(matches!(err, ScanError::Provider(_)));
        assert!(err.to_string().contains("goplus down"));
    }

    #[tokio::test]
    async fn test_basic_scan_computes_risk_score() {
        let mock = MockSecurityData::new().with_token(
            "1",
            "0xabc",
            TokenSecurityData::clean_fixture(),
        );
        let scanner = scanner_with(mock);

        let result = scanner.scan("1", "0xabc").await.unwrap();
        assert_eq!(result.token_address, "0xabc");
        assert_eq!(result.chain_id, "1");
        assert_eq!(result.risk_score.category, RiskCategory::LowRisk);
        assert!(result.advanced.is_none());
        assert!(result.verdict.is_none());
    }

    #[tokio::test]
    async fn test_advanced_scan_assembles_all_sections() {
        let mock = MockSecurityData::new().with_token(
            "1",
            "0xabc",
            TokenSecurityData::clean_fixture(),
        );
        let scanner = scanner_with(mock);

        let result = scanner.scan_advanced("1", "0xabc").await.unwrap();
        let advanced = result.advanced.expect("advanced data");
        assert!(advanced.price.is_none()); // no market provider attached
        assert!(advanced.rug_pull.probability <= 100);
        assert_eq!(advanced.liquidity.health_score, 100);

        let verdict = result.verdict.expect("verdict");
        assert_eq!(verdict.rating, VerdictRating::Safe);
    }

    #[tokio::test]
    async fn test_market_failure_degrades_gracefully() {
        let mock = MockSecurityData::new().with_token(
            "1",
            "0xabc",
            TokenSecurityData::clean_fixture(),
        );
        let market = MockMarketData::new().with_failure("coingecko down");
        let scanner = scanner_with(mock).with_market_data(Arc::new(market));

        let result = scanner.scan_advanced("1", "0xabc").await.unwrap();
        let advanced = result.advanced.expect("advanced data");
        assert!(advanced.price.is_none());
        assert!(advanced.dex.is_none());
        // The verdict is still computed from the pure scores.
        assert!(result.verdict.is_some());
    }

    #[tokio::test]
    async fn test_market_enrichment_attached_when_available() {
        let mock = MockSecurityData::new().with_token(
            "1",
            "0xabc",
            TokenSecurityData::clean_fixture(),
        );
        let market = MockMarketData::new().with_price(
            "1",
            "0xabc",
            PriceData {
                usd: 1.5,
                usd_24h_change: 2.0,
                usd_market_cap: 1_000_000.0,
                usd_24h_vol: 50_000.0,
            },
        );
        let scanner = scanner_with(mock).with_market_data(Arc::new(market));

        let result = scanner.scan_advanced("1", "0xabc").await.unwrap();
        let advanced = result.advanced.unwrap();
        assert_eq!(advanced.price.unwrap().usd, 1.5);
        assert!(advanced.dex.is_none());
    }

    #[tokio::test]
    async fn test_history_absent_without_provider() {
        let scanner = scanner_with(MockSecurityData::new());
        assert!(scanner.contract_history("1", "0xabc").await.is_none());
    }

    #[tokio::test]
    async fn test_scan_result_serializes_camel_case() {
        let mock = MockSecurityData::new().with_token(
            "1",
            "0xabc",
            TokenSecurityData::clean_fixture(),
        );
        let scanner = scanner_with(mock);

        let result = scanner.scan("1", "0xabc").await.unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"tokenAddress\""));
        assert!(json.contains("\"riskScore\""));
        assert!(json.contains("\"scannedAt\""));
        // Absent optional sections are omitted, not null.
        assert!(!json.contains("\"advanced\""));
    }
}
