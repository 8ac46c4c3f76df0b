use serde::{Deserialize, Serialize};

/// Delimiters that make up an inline token.
///
/// The scanner builds its pattern from these values, so hosts that use a
/// different prefix or invisible delimiter only change configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Character sequence opening a token.
    pub prefix: String,
    /// Invisible delimiter surrounding the token body.
    pub delimiter: String,
}

impl MarkerConfig {
    pub const PREFIX: &'static str = "#";
    pub const ZERO_WIDTH_SPACE: &'static str = "\u{200b}";

    /// Regex source matching one token, non-greedy and confined to a line.
    pub fn pattern(&self) -> String {
        let delimiter = regex::escape(&self.delimiter);
        format!("{}{delimiter}.*?{delimiter}", regex::escape(&self.prefix))
    }

    /// Wraps `body` into a canonical token string.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}{}{body}{}", self.prefix, self.delimiter, self.delimiter)
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            prefix: Self::PREFIX.to_string(),
            delimiter: Self::ZERO_WIDTH_SPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marker_wraps_with_zero_width_space() {
        let marker = MarkerConfig::default();
        assert_eq!(marker.wrap("tok"), "#\u{200b}tok\u{200b}");
    }

    #[test]
    fn pattern_escapes_regex_metacharacters() {
        let marker = MarkerConfig {
            prefix: "$".to_string(),
            delimiter: "|".to_string(),
        };
        assert_eq!(marker.pattern(), r"\$\|.*?\|");
    }
}
