use std::sync::Arc;

use crate::models::{InlineModel, StyleTag};

use super::node::{CHIP_TRAILER, ChipUnit, Segment};

/// Builds a chip whose canonical content is the model's own token.
pub fn build_chip(model: impl Into<Arc<InlineModel>>, style: &StyleTag) -> ChipUnit {
    let model = model.into();
    let content = model.canonical_token.clone();
    build_chip_with_content(model, style, content)
}

/// Builds a chip with caller-supplied canonical content.
///
/// Segments are assembled in a fixed order:
/// 1. the image, if the model has one, sized to its natural dimensions
/// 2. `symbol + text` tagged with `style` (skipped when empty)
/// 3. one unstyled trailing space
pub fn build_chip_with_content(
    model: impl Into<Arc<InlineModel>>,
    style: &StyleTag,
    canonical_content: impl Into<String>,
) -> ChipUnit {
    let model = model.into();
    let mut segments = Vec::with_capacity(3);

    if let Some(image) = &model.image {
        segments.push(Segment::Image {
            image: image.clone(),
            width: image.width,
            height: image.height,
        });
    }

    let text = model.display_text();
    if !text.is_empty() {
        segments.push(Segment::Text {
            text,
            style: Some(style.clone()),
        });
    }

    segments.push(Segment::Text {
        text: CHIP_TRAILER.to_string(),
        style: None,
    });

    ChipUnit::from_parts(segments, canonical_content.into(), style.clone(), model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageRef;
    use crate::tests::alice;
    use pretty_assertions::assert_eq;

    #[test]
    fn chip_with_image_symbol_and_text() {
        let chip = build_chip(alice(), &StyleTag::new("link"));
        assert_eq!(chip.rendered_length(), 1 + "@Alice".len() + 1);
        assert_eq!(chip.segments().len(), 3);
        assert!(matches!(
            chip.segments()[0],
            Segment::Image {
                width: 24,
                height: 24,
                ..
            }
        ));
        assert_eq!(
            chip.segments()[1],
            Segment::Text {
                text: "@Alice".to_string(),
                style: Some(StyleTag::new("link")),
            }
        );
        assert_eq!(
            chip.segments()[2],
            Segment::Text {
                text: " ".to_string(),
                style: None,
            }
        );
        assert_eq!(chip.canonical_content(), "#\u{200b}user:1\u{200b}");
        assert_eq!(chip.rendered_text(), "\u{fffc}@Alice ");
    }

    #[test]
    fn chip_without_image_or_symbol() {
        let chip = build_chip(InlineModel::new("t", "Bob"), &StyleTag::new("link"));
        assert_eq!(chip.rendered_length(), 4);
        assert_eq!(chip.rendered_text(), "Bob ");
    }

    #[test]
    fn empty_model_yields_only_trailing_space() {
        let chip = build_chip(InlineModel::new("t", ""), &StyleTag::new("link"));
        assert_eq!(chip.rendered_length(), 1);
        assert_eq!(chip.segments().len(), 1);
        assert_eq!(chip.rendered_text(), " ");
    }

    #[test]
    fn image_only_model() {
        let model = InlineModel::new("t", "").with_image(ImageRef::new("star", 8, 8));
        let chip = build_chip(model, &StyleTag::new("link"));
        assert_eq!(chip.rendered_length(), 2);
    }

    #[test]
    fn caller_supplied_canonical_content() {
        let chip = build_chip_with_content(alice(), &StyleTag::new("link"), "@alice");
        assert_eq!(chip.canonical_content(), "@alice");
        assert_eq!(chip.model().canonical_token, "#\u{200b}user:1\u{200b}");
    }
}
