//! CLI Command Definitions
//!
//! Argument parsing for the tokensentry scanner CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tokensentry - Token Security Scanner
#[derive(Parser, Debug)]
#[command(
    name = "tokensentry",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Token security scanner and risk aggregator",
    long_about = "Tokensentry aggregates third-party security data for a token \
                  contract and computes a composite risk score, rug pull probability, \
                  liquidity health and holder concentration analysis."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a token contract and print its risk assessment
    Scan(ScanCmd),

    /// Look up a contract's deployment history
    History(HistoryCmd),

    /// List the supported chains
    Chains(ChainsCmd),
}

/// Scan a token contract
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Token contract address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Chain id (e.g. 1 for Ethereum, 8453 for Base)
    #[arg(short, long, value_name = "ID")]
    pub chain: Option<String>,

    /// Run the advanced analyzers (rug pull, whales, liquidity, verdict)
    #[arg(short, long)]
    pub advanced: bool,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,
}

/// Look up deployment history
#[derive(Parser, Debug)]
pub struct HistoryCmd {
    /// Token contract address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Chain id (e.g. 1 for Ethereum, 8453 for Base)
    #[arg(short, long, value_name = "ID")]
    pub chain: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,
}

/// List supported chains
#[derive(Parser, Debug)]
pub struct ChainsCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,
}

impl Command {
    /// Path of the config file the command was given.
    pub fn config_path(&self) -> &PathBuf {
        match self {
            Command::Scan(cmd) => &cmd.config,
            Command::History(cmd) => &cmd.config,
            Command::Chains(cmd) => &cmd.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let args = vec!["tokensentry", "scan", "0xabc", "--chain", "1"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert_eq!(cmd.address, "0xabc");
                assert_eq!(cmd.chain.as_deref(), Some("1"));
                assert!(!cmd.advanced);
                assert!(!cmd.json);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_parse_scan_advanced_json() {
        let args = vec!["tokensentry", "scan", "0xabc", "--advanced", "--json"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert!(cmd.advanced);
                assert!(cmd.json);
                assert!(cmd.chain.is_none());
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_parse_scan_requires_address() {
        let args = vec!["tokensentry", "scan"];
        assert!(CliApp::try_parse_from(args).is_err());
    }

    #[test]
    fn test_default_config_path() {
        let args = vec!["tokensentry", "scan", "0xabc"];
        let app = CliApp::try_parse_from(args).unwrap();
        assert_eq!(
            app.command.config_path(),
            &PathBuf::from("config/default.toml")
        );
    }

    #[test]
    fn test_parse_history() {
        let args = vec!["tokensentry", "history", "0xdef", "--chain", "8453"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::History(cmd) => {
                assert_eq!(cmd.address, "0xdef");
                assert_eq!(cmd.chain.as_deref(), Some("8453"));
            }
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_parse_chains() {
        let args = vec!["tokensentry", "chains"];
        let app = CliApp::try_parse_from(args).unwrap();
        assert!(matches!(app.command, Command::Chains(_)));
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["tokensentry", "-v", "--debug", "chains"];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }
}
