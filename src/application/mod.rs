pub mod scanner;

pub use scanner::{AdvancedData, ScanError, ScanResult, TokenScanner};
