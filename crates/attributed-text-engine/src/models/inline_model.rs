use serde::{Deserialize, Serialize};

/// Opaque handle to an image shown at the start of a chip.
///
/// `width` and `height` are the image's natural dimensions; the chip's image
/// segment is sized to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRef {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Structured content a token resolves to.
///
/// Produced by a [`ModelResolver`](super::ModelResolver) once per matched
/// token and shared (never mutated) by the chip built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub text: String,
    /// Exact token text this model was resolved from.
    #[serde(rename = "token")]
    pub canonical_token: String,
}

impl InlineModel {
    pub fn new(canonical_token: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image: None,
            symbol: None,
            text: text.into(),
            canonical_token: canonical_token.into(),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Symbol followed by text, e.g. `@Alice`.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.symbol.as_deref().unwrap_or(""), self.text)
    }
}
