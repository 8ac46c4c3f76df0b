//! # Token Scanning
//!
//! Locates inline tokens in plain text. A token is the prefix (`#`), a
//! zero-width delimiter (U+200B), any characters except a newline, and the
//! delimiter again:
//!
//! ```text
//! hello #\u{200b}user:42\u{200b} there
//!       ^^^^^^^^^^^^^^^^^^^^^^^
//! ```
//!
//! ## Modules
//!
//! - **`marker`**: `MarkerConfig` owns the prefix and delimiter; the scanner
//!   never hardcodes `#` or U+200B
//! - **`scanner`**: `TokenScanner` producing lazy, non-overlapping matches
//!
//! Scanning is purely lexical. Whether a token maps to anything is decided by
//! a [`ModelResolver`](crate::models::ModelResolver).

pub mod marker;
pub mod scanner;

pub use marker::MarkerConfig;
pub use scanner::{ScannerError, TokenMatch, TokenScanner, scan_tokens};
