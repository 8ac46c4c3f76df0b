use crate::models::{ModelResolver, StyleSet, StyleTag};
use crate::parsing::TokenScanner;

use super::{
    chip::build_chip_with_content,
    error::DocumentError,
    node::{ChipUnit, ContentNode, PlainRun},
    projection::project,
    span::Span,
};

/// A chip located in a document: its node index and the span it occupies.
#[derive(Debug, Clone, Copy)]
pub struct ChipRef<'a> {
    pub index: usize,
    pub span: Span,
    pub chip: &'a ChipUnit,
}

/// Ordered sequence of plain runs and chips.
///
/// Invariants maintained by every mutation:
/// - no empty plain runs
/// - no two adjacent plain runs with the same style
/// - a chip's span is never split; edits inside it fail or widen to the whole chip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichDocument {
    nodes: Vec<ContentNode>,
}

impl RichDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = ContentNode>) -> Self {
        let mut doc = Self::new();
        for node in nodes {
            doc.push_node(node);
        }
        doc
    }

    /// Builds a document from plain text, turning every token the resolver
    /// knows into a chip.
    ///
    /// Plain text takes `styles.default`, chip text takes `styles.link`.
    /// A chip's canonical content is the exact matched token, so projecting
    /// the result reproduces `plain`. Unresolved tokens stay literal and do
    /// not affect their neighbours.
    pub fn load<R>(plain: &str, scanner: &TokenScanner, resolver: &R, styles: &StyleSet) -> Self
    where
        R: ModelResolver + ?Sized,
    {
        let mut doc = Self::new();
        let mut literal_start = 0;

        for token in scanner.scan(plain) {
            let Some(model) = resolver.resolve(token.as_str()) else {
                log::debug!("Unresolved token {:?} left as text", token.as_str());
                continue;
            };
            doc.push_node(
                PlainRun::new(&plain[literal_start..token.start()], styles.default.clone()).into(),
            );
            doc.push_node(build_chip_with_content(model, &styles.link, token.as_str()).into());
            literal_start = token.end();
        }

        doc.push_node(PlainRun::new(&plain[literal_start..], styles.default.clone()).into());
        doc
    }

    /// Total number of addressable positions.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(ContentNode::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    /// Every node with the span it occupies, in order.
    pub fn spans(&self) -> impl Iterator<Item = (Span, &ContentNode)> {
        let mut offset = 0;
        self.nodes.iter().map(move |node| {
            let start = offset;
            offset += node.len();
            (Span::new(start, offset), node)
        })
    }

    pub fn chips(&self) -> impl Iterator<Item = ChipRef<'_>> {
        self.spans()
            .enumerate()
            .filter_map(|(index, (span, node))| {
                node.as_chip().map(|chip| ChipRef { index, span, chip })
            })
    }

    /// The chip covering `position`, if any.
    pub fn attribute_at(&self, position: usize) -> Option<ChipRef<'_>> {
        self.chips().find(|chip| chip.span.contains(position))
    }

    /// The chip that `position` would split, if any.
    pub fn chip_splitting(&self, position: usize) -> Option<ChipRef<'_>> {
        self.chips().find(|chip| chip.span.strictly_contains(position))
    }

    /// The chip stored at node `index`.
    pub fn chip(&self, index: usize) -> Option<ChipRef<'_>> {
        self.chips().find(|chip| chip.index == index)
    }

    /// Text as displayed: chip images become U+FFFC.
    pub fn rendered_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.render_into(&mut out);
        }
        out
    }

    pub fn canonical_text(&self) -> String {
        project(self)
    }

    /// Inserts `node` so that it starts at `position`.
    ///
    /// Returns the span the node now occupies. `position` must be a valid
    /// boundary: within `[0, len]` and not strictly inside a chip.
    pub fn insert_at(
        &mut self,
        position: usize,
        node: impl Into<ContentNode>,
    ) -> Result<Span, DocumentError> {
        self.check_boundary(position)?;
        let node = node.into();
        let span = Span::new(position, position + node.len());
        let index = self.split_at(position);
        self.nodes.insert(index, node);
        self.normalize();
        Ok(span)
    }

    /// Removes `length` positions starting at `position`.
    ///
    /// If either end falls strictly inside a chip the deletion widens to cover
    /// the whole chip. Returns the span actually removed.
    pub fn delete_range(&mut self, position: usize, length: usize) -> Result<Span, DocumentError> {
        let len = self.len();
        let end = position.saturating_add(length);
        if position > len {
            return Err(DocumentError::InvalidPosition { position, len });
        }
        if end > len {
            return Err(DocumentError::InvalidPosition { position: end, len });
        }
        if length == 0 {
            return Ok(Span::empty(position));
        }

        let start = self
            .chip_splitting(position)
            .map_or(position, |chip| chip.span.start);
        let end = self.chip_splitting(end).map_or(end, |chip| chip.span.end);

        let first = self.split_at(start);
        let last = self.split_at(end);
        let chips_removed = self.nodes[first..last]
            .iter()
            .filter(|node| node.as_chip().is_some())
            .count();
        self.nodes.drain(first..last);
        self.normalize();

        if chips_removed > 0 {
            log::debug!("Deleted {start}..{end} including {chips_removed} chip(s)");
        }
        Ok(Span::new(start, end))
    }

    /// Re-tags the chip at node `index`. Returns false if there is no chip there.
    pub fn restyle_chip(&mut self, index: usize, style: &StyleTag) -> bool {
        match self.nodes.get_mut(index) {
            Some(ContentNode::Chip(chip)) => {
                chip.restyle(style);
                true
            }
            _ => false,
        }
    }

    fn check_boundary(&self, position: usize) -> Result<(), DocumentError> {
        let len = self.len();
        if position > len {
            return Err(DocumentError::InvalidPosition { position, len });
        }
        if let Some(chip) = self.chip_splitting(position) {
            return Err(DocumentError::SplitsChip {
                position,
                chip: chip.span,
            });
        }
        Ok(())
    }

    /// Ensures a node boundary at `position` and returns the index of the node
    /// starting there. Callers guarantee `position` does not split a chip.
    fn split_at(&mut self, position: usize) -> usize {
        let mut offset = 0;
        for index in 0..self.nodes.len() {
            if position == offset {
                return index;
            }
            let len = self.nodes[index].len();
            if position < offset + len {
                debug_assert!(self.nodes[index].as_chip().is_none(), "split inside chip");
                if let ContentNode::Plain(run) = &mut self.nodes[index] {
                    let tail = run.split_off(position - offset);
                    self.nodes.insert(index + 1, ContentNode::Plain(tail));
                }
                return index + 1;
            }
            offset += len;
        }
        self.nodes.len()
    }

    fn normalize(&mut self) {
        let nodes = std::mem::take(&mut self.nodes);
        for node in nodes {
            self.push_node(node);
        }
    }

    /// Appends a node, dropping empty runs and merging same-style neighbours.
    fn push_node(&mut self, node: ContentNode) {
        match node {
            ContentNode::Plain(run) if run.is_empty() => {}
            ContentNode::Plain(run) => {
                if let Some(ContentNode::Plain(last)) = self.nodes.last_mut()
                    && last.style == run.style
                {
                    last.text.push_str(&run.text);
                } else {
                    self.nodes.push(ContentNode::Plain(run));
                }
            }
            chip => self.nodes.push(chip),
        }
    }
}
