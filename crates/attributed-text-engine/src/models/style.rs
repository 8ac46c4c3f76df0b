use serde::{Deserialize, Serialize};

/// Opaque style identifier attached to runs and chip text.
///
/// The engine never interprets the name; renderers map it to fonts/colours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTag(String);

impl StyleTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for StyleTag {
    fn default() -> Self {
        Self::new("default")
    }
}

impl From<&str> for StyleTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Styles a surface applies: plain text, chip text, and chip text while a
/// tap is being acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSet {
    pub default: StyleTag,
    pub link: StyleTag,
    pub pressed: StyleTag,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            default: StyleTag::default(),
            link: StyleTag::new("link"),
            pressed: StyleTag::new("link-pressed"),
        }
    }
}
