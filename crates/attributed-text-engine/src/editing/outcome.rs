use crate::document::Span;

/// Result of applying an edit to a [`ChipEditor`](super::ChipEditor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Positions removed from the document before the edit, widened to chip
    /// boundaries.
    pub removed: Span,
    /// Positions the inserted content occupies afterwards.
    pub inserted: Span,
    /// Caret after the edit.
    pub caret: usize,
    /// A whole chip was removed by a backward delete.
    pub unit_deleted: bool,
    pub version: u64,
}
