//! Tokensentry - Token Security Scanner
//!
//! Aggregates third-party security data for a token contract and computes
//! a composite risk score with rug pull, liquidity and whale analysis.

mod adapters;
mod application;
mod config;
mod domain;
mod ports;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::cli::{ChainsCmd, CliApp, Command, HistoryCmd, ScanCmd};
use crate::adapters::explorer::{ExplorerClient, ExplorerConfig};
use crate::adapters::goplus::{GoPlusClient, GoPlusConfig};
use crate::adapters::market_data::{
    CoinGeckoClient, CoinGeckoConfig, DexScreenerClient, DexScreenerConfig, MarketDataClient,
};
use crate::application::{ScanResult, TokenScanner};
use crate::config::{load_config, Config};
use crate::domain::{chain_info, SUPPORTED_CHAINS};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (API keys go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    // Expand ~ in the config path before loading
    let config_path = shellexpand::tilde(&app.command.config_path().display().to_string())
        .to_string();
    let config = if std::path::Path::new(&config_path).exists() {
        load_config(&config_path).context("Failed to load configuration")?
    } else {
        // No config file is fine: every field has a default.
        Config::default()
    };

    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Scan(cmd) => scan_command(cmd, &config).await,
        Command::History(cmd) => history_command(cmd, &config).await,
        Command::Chains(cmd) => chains_command(cmd),
    }
}

fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        config_level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

/// Wire the provider adapters into a scanner from the loaded config.
fn build_scanner(config: &Config) -> Result<TokenScanner> {
    let timeout = Duration::from_secs(config.providers.timeout_secs);

    let goplus = GoPlusClient::with_config(GoPlusConfig {
        base_url: config.providers.goplus_base_url.clone(),
        api_key: config.providers.get_goplus_api_key(),
        timeout,
        max_retries: config.providers.max_retries,
        ..Default::default()
    })
    .context("Failed to create GoPlus client")?;

    let coingecko = CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url: config.providers.coingecko_base_url.clone(),
        timeout,
    })
    .context("Failed to create CoinGecko client")?;

    let dexscreener = DexScreenerClient::with_config(DexScreenerConfig {
        base_url: config.providers.dexscreener_base_url.clone(),
        timeout,
    })
    .context("Failed to create DEXScreener client")?;

    let explorer = ExplorerClient::with_config(ExplorerConfig {
        api_key: config.providers.get_explorer_api_key(),
        timeout,
    })
    .context("Failed to create explorer client")?;

    Ok(TokenScanner::new(Arc::new(goplus))
        .with_market_data(Arc::new(MarketDataClient::with_clients(coingecko, dexscreener)))
        .with_history(Arc::new(explorer)))
}

async fn scan_command(cmd: ScanCmd, config: &Config) -> Result<()> {
    let chain_id = cmd.chain.unwrap_or_else(|| config.scan.default_chain.clone());
    let scanner = build_scanner(config)?;

    let advanced = cmd.advanced || config.scan.advanced;
    let result = if advanced {
        scanner.scan_advanced(&chain_id, &cmd.address).await
    } else {
        scanner.scan(&chain_id, &cmd.address).await
    }
    .with_context(|| format!("Scan failed for {} on chain {}", cmd.address, chain_id))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_scan_result(&result);
    }

    Ok(())
}

fn print_scan_result(result: &ScanResult) {
    let data = &result.security_data;
    let risk = &result.risk_score;
    let chain_name = chain_info(&result.chain_id).map(|c| c.name).unwrap_or("Unknown");

    println!();
    println!("Token:    {} ({})", data.token_name, data.token_symbol);
    println!("Address:  {}", result.token_address);
    println!("Chain:    {} ({})", chain_name, result.chain_id);
    println!("Scanned:  {}", result.scanned_at.to_rfc3339());
    println!();
    println!("Risk Score: {}/100 [{}]", risk.overall, risk.category.as_str());
    println!("  Contract Security:    {}/100", risk.factors.contract_security);
    println!("  Liquidity Safety:     {}/100", risk.factors.liquidity_safety);
    println!("  Holder Distribution:  {}/100", risk.factors.holder_distribution);
    println!("  Trading Restrictions: {}/100", risk.factors.trading_restrictions);

    if !risk.critical_issues.is_empty() {
        println!();
        println!("Critical Issues:");
        for issue in &risk.critical_issues {
            println!("  ! {}", issue);
        }
    }

    if !risk.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &risk.warnings {
            println!("  - {}", warning);
        }
    }

    if let Some(ref advanced) = result.advanced {
        println!();
        println!(
            "Rug Pull:  {}% [{}]",
            advanced.rug_pull.probability,
            advanced.rug_pull.risk.as_str()
        );
        println!("  {}", advanced.rug_pull.recommendation);
        for indicator in &advanced.rug_pull.indicators {
            println!("  * {}: {}", indicator.name, indicator.description);
        }

        println!();
        println!(
            "Liquidity: {}/100 [{}]",
            advanced.liquidity.health_score,
            advanced.liquidity.status.as_str()
        );
        for note in &advanced.liquidity.risks {
            println!("  - {}", note);
        }

        println!();
        println!(
            "Whales:    {} whales, top-10 hold {:.1}% [{}]",
            advanced.whales.whale_count,
            advanced.whales.whale_percentage,
            advanced.whales.concentration.as_str()
        );
        for warning in &advanced.whales.warnings {
            println!("  - {}", warning);
        }

        if !advanced.smart_money.insights.is_empty() {
            println!();
            println!("Smart Money:");
            for insight in &advanced.smart_money.insights {
                println!("  - {}", insight);
            }
        }

        if let Some(ref price) = advanced.price {
            println!();
            println!(
                "Price:     ${:.6} ({:+.2}% 24h)",
                price.usd, price.usd_24h_change
            );
        }
        if let Some(ref dex) = advanced.dex {
            println!(
                "DEX:       ${} liquidity, {} buys / {} sells 24h",
                dex.liquidity_usd, dex.buys_24h, dex.sells_24h
            );
        }
    }

    if let Some(ref verdict) = result.verdict {
        println!();
        println!(
            "Verdict:   {} (confidence {:.0}%)",
            verdict.rating.as_str(),
            verdict.confidence
        );
        println!("  {}", verdict.recommendation);
    }
    println!();
}

async fn history_command(cmd: HistoryCmd, config: &Config) -> Result<()> {
    let chain_id = cmd.chain.unwrap_or_else(|| config.scan.default_chain.clone());
    let scanner = build_scanner(config)?;

    match scanner.contract_history(&chain_id, &cmd.address).await {
        Some(history) => {
            println!();
            println!("Contract:     {}", cmd.address);
            println!("First block:  {}", history.first_block);
            println!("Age:          {} days", history.age_days);
            println!("Trust score:  {}/100", history.trust_score);
            for warning in &history.warnings {
                println!("  - {}", warning);
            }
            println!();
        }
        None => {
            println!("No history available for {} on chain {}", cmd.address, chain_id);
        }
    }

    Ok(())
}

fn chains_command(_cmd: ChainsCmd) -> Result<()> {
    println!();
    println!("Supported chains:");
    for chain in SUPPORTED_CHAINS {
        println!("  {:>6}  {}", chain.id, chain.name);
    }
    println!();
    Ok(())
}
