use std::sync::Arc;

use crate::models::{ImageRef, InlineModel, StyleTag};

/// Character standing in for an image when a document is flattened to text.
pub const OBJECT_REPLACEMENT: char = '\u{fffc}';

/// Text appended to every chip so the caret has somewhere to rest after it.
pub const CHIP_TRAILER: &str = " ";

/// One displayable piece of a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An inline image sized to its natural dimensions. Always one position.
    Image { image: ImageRef, width: u32, height: u32 },
    /// Text with an optional style; `None` means the surrounding default.
    Text { text: String, style: Option<StyleTag> },
}

impl Segment {
    pub fn len(&self) -> usize {
        match self {
            Segment::Image { .. } => 1,
            Segment::Text { text, .. } => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Segment::Image { .. } => out.push(OBJECT_REPLACEMENT),
            Segment::Text { text, .. } => out.push_str(text),
        }
    }
}

/// A run of ordinary text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainRun {
    pub text: String,
    pub style: StyleTag,
}

impl PlainRun {
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits at a character offset, keeping the head and returning the tail.
    pub(crate) fn split_off(&mut self, at: usize) -> PlainRun {
        let byte = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(byte, _)| byte);
        PlainRun {
            text: self.text.split_off(byte),
            style: self.style.clone(),
        }
    }
}

/// An atomic inline unit: image, symbol and text, then a trailing space.
///
/// A chip behaves as one indivisible span for caret placement and deletion.
/// It records its canonical content so the document can be projected back to
/// the text the user conceptually typed, and keeps the model it was built from
/// for tap activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipUnit {
    segments: Vec<Segment>,
    rendered_length: usize,
    canonical_content: String,
    style: StyleTag,
    model: Arc<InlineModel>,
}

impl ChipUnit {
    pub(crate) fn from_parts(
        segments: Vec<Segment>,
        canonical_content: String,
        style: StyleTag,
        model: Arc<InlineModel>,
    ) -> Self {
        let rendered_length = segments.iter().map(Segment::len).sum();
        Self {
            segments,
            rendered_length,
            canonical_content,
            style,
            model,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of addressable positions the chip occupies.
    pub fn rendered_length(&self) -> usize {
        self.rendered_length
    }

    pub fn canonical_content(&self) -> &str {
        &self.canonical_content
    }

    pub fn style(&self) -> &StyleTag {
        &self.style
    }

    pub fn model(&self) -> &Arc<InlineModel> {
        &self.model
    }

    /// Re-tags the chip and its styled text segments. Unstyled segments (the
    /// trailing space) keep the default style.
    pub fn restyle(&mut self, style: &StyleTag) {
        self.style = style.clone();
        for segment in &mut self.segments {
            if let Segment::Text {
                style: Some(tag), ..
            } = segment
            {
                *tag = style.clone();
            }
        }
    }

    pub fn rendered_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.render_into(&mut out);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Plain(PlainRun),
    Chip(ChipUnit),
}

impl ContentNode {
    pub fn len(&self) -> usize {
        match self {
            ContentNode::Plain(run) => run.len(),
            ContentNode::Chip(chip) => chip.rendered_length(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_chip(&self) -> Option<&ChipUnit> {
        match self {
            ContentNode::Chip(chip) => Some(chip),
            ContentNode::Plain(_) => None,
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            ContentNode::Plain(run) => out.push_str(&run.text),
            ContentNode::Chip(chip) => {
                for segment in &chip.segments {
                    segment.render_into(out);
                }
            }
        }
    }

    pub(crate) fn project_into(&self, out: &mut String) {
        match self {
            ContentNode::Plain(run) => out.push_str(&run.text),
            ContentNode::Chip(chip) => out.push_str(&chip.canonical_content),
        }
    }
}

impl From<PlainRun> for ContentNode {
    fn from(run: PlainRun) -> Self {
        ContentNode::Plain(run)
    }
}

impl From<ChipUnit> for ContentNode {
    fn from(chip: ChipUnit) -> Self {
        ContentNode::Chip(chip)
    }
}
