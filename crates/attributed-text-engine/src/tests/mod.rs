use crate::document::RichDocument;
use crate::models::{ImageRef, InlineModel, ModelRegistry, StyleSet};
use crate::parsing::{MarkerConfig, TokenScanner};

/// Canonical token for `body` using the default marker.
pub fn token(body: &str) -> String {
    MarkerConfig::default().wrap(body)
}

/// `@Alice` with a 24x24 avatar; renders as 8 positions.
pub fn alice() -> InlineModel {
    InlineModel::new(token("user:1"), "Alice")
        .with_symbol("@")
        .with_image(ImageRef::new("avatar-1", 24, 24))
}

/// `@Bob` without an image; renders as 5 positions.
pub fn bob() -> InlineModel {
    InlineModel::new(token("user:2"), "Bob").with_symbol("@")
}

/// Registry knowing `user:1` (Alice) and `user:2` (Bob).
pub fn registry() -> ModelRegistry {
    ModelRegistry::from_models([alice(), bob()])
}

/// Loads `text` with the default scanner, styles and [`registry`].
pub fn load(text: &str) -> RichDocument {
    RichDocument::load(
        text,
        &TokenScanner::default(),
        &registry(),
        &StyleSet::default(),
    )
}
