use super::span::Span;

/// Precondition violations on document edits.
///
/// These indicate a host bug (a position the host should have validated or
/// snapped first), so they are reported rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Position {position} is outside the document (length {len})")]
    InvalidPosition { position: usize, len: usize },
    #[error("Position {position} falls inside the chip at {}..{}", .chip.start, .chip.end)]
    SplitsChip { position: usize, chip: Span },
}
