use crate::document::Span;

/// Caret or selection over addressable positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub position: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Zero-length selection at `position`.
    pub fn caret(position: usize) -> Self {
        Self::new(position, 0)
    }

    /// Selection covering `span`.
    pub fn from_span(span: Span) -> Self {
        Self::new(span.start, span.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// End position, or `None` if `position + length` overflows.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.position.checked_add(self.length)
    }

    pub fn span(&self) -> Option<Span> {
        self.end().map(|end| Span::new(self.position, end))
    }
}
