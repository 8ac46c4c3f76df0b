pub mod document;
pub mod editing;
pub mod label;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::*;
pub use editing::*;
pub use label::*;
pub use models::*;
pub use parsing::{MarkerConfig, ScannerError, TokenMatch, TokenScanner, scan_tokens};
