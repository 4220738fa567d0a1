//! CLI Adapter
//!
//! Command-line interface for the tokensentry scanner.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{ChainsCmd, CliApp, Command, HistoryCmd, ScanCmd};
