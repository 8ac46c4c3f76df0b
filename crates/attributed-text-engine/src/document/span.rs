/// A range `[start, end)` of addressable positions in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start position.
    pub start: usize,
    /// Exclusive end position.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-length span at `position`.
    pub fn empty(position: usize) -> Self {
        Self::new(position, position)
    }

    /// Returns the length in positions. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// `start <= position < end`
    pub fn contains(self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    /// `start < position < end`: the position would split the span.
    pub fn strictly_contains(self, position: usize) -> bool {
        self.start < position && position < self.end
    }
}
