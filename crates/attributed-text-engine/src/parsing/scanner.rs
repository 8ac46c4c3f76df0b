use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::marker::MarkerConfig;

static DEFAULT_SCANNER: LazyLock<TokenScanner> = LazyLock::new(|| {
    let marker = MarkerConfig::default();
    let regex = Regex::new(&marker.pattern()).expect("default token pattern is valid");
    TokenScanner { regex, marker }
});

#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    #[error("Token delimiter must not be empty")]
    EmptyDelimiter,
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One token found by [`TokenScanner::scan`], with its byte range in the
/// scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> TokenMatch<'t> {
    /// The matched token, delimiters included.
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Finds inline tokens in plain text.
///
/// Matches are produced left to right and never overlap: the leftmost
/// candidate wins, consumes its full span, and scanning resumes right after
/// it. Every call to [`scan`](Self::scan) starts afresh.
#[derive(Debug, Clone)]
pub struct TokenScanner {
    regex: Regex,
    marker: MarkerConfig,
}

impl TokenScanner {
    pub fn new(marker: MarkerConfig) -> Result<Self, ScannerError> {
        if marker.delimiter.is_empty() {
            return Err(ScannerError::EmptyDelimiter);
        }
        let regex = Regex::new(&marker.pattern())?;
        Ok(Self { regex, marker })
    }

    pub fn marker(&self) -> &MarkerConfig {
        &self.marker
    }

    /// Lazily yields every token in `text`.
    pub fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = TokenMatch<'t>> {
        self.regex.find_iter(text).map(|m| TokenMatch {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
    }
}

impl Default for TokenScanner {
    fn default() -> Self {
        DEFAULT_SCANNER.clone()
    }
}

/// Convenience: token strings found by the default scanner.
pub fn scan_tokens(text: &str) -> Vec<&str> {
    DEFAULT_SCANNER
        .scan(text)
        .map(|m| m.as_str())
        .collect()
}
