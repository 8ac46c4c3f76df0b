use serde::{Deserialize, Serialize};

use crate::document::{DocumentError, RichDocument, Span};

use super::selection::Selection;

/// How a caret strictly inside a chip is moved to one of its boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapPolicy {
    /// Nearer boundary; a tie goes to the right boundary.
    #[default]
    Nearest,
    /// Left boundary whenever the left distance is at least the right
    /// distance, otherwise right. Matches older input views.
    Legacy,
}

impl SnapPolicy {
    /// Boundary of `chip` to use for a caret at `position`.
    pub fn snap(self, chip: Span, position: usize) -> usize {
        let left = position.saturating_sub(chip.start);
        let right = chip.end.saturating_sub(position);
        let snap_left = match self {
            SnapPolicy::Nearest => right > left,
            SnapPolicy::Legacy => left >= right,
        };
        if snap_left { chip.start } else { chip.end }
    }
}

/// Moves a proposed caret out of any chip it would split.
pub fn adjust_caret(doc: &RichDocument, proposed: usize, policy: SnapPolicy) -> usize {
    match doc.chip_splitting(proposed) {
        Some(chip) => {
            let snapped = policy.snap(chip.span, proposed);
            log::trace!("Caret {proposed} snapped to {snapped} around chip {:?}", chip.span);
            snapped
        }
        None => proposed,
    }
}

/// Snaps a selection so it never partially covers a chip.
///
/// A caret follows [`adjust_caret`]; a ranged selection widens outwards to
/// the boundaries of any chip either end would split. Fails if the selection
/// reaches past the end of the document.
pub fn adjust_selection(
    doc: &RichDocument,
    selection: Selection,
    policy: SnapPolicy,
) -> Result<Selection, DocumentError> {
    let len = doc.len();
    let Some(span) = selection.span() else {
        return Err(DocumentError::InvalidPosition {
            position: selection.position,
            len,
        });
    };
    if span.end > len {
        return Err(DocumentError::InvalidPosition {
            position: span.end,
            len,
        });
    }
    if span.is_empty() {
        return Ok(Selection::caret(adjust_caret(doc, span.start, policy)));
    }
    let start = doc
        .chip_splitting(span.start)
        .map_or(span.start, |chip| chip.span.start);
    let end = doc
        .chip_splitting(span.end)
        .map_or(span.end, |chip| chip.span.end);
    Ok(Selection::from_span(Span::new(start, end)))
}

/// Result of a guarded backward delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub removed: Span,
    pub caret: usize,
    pub unit_deleted: bool,
}

/// Deletes one position backwards from `caret`.
///
/// If the position before the caret belongs to a chip, the whole chip goes
/// and the caret lands at its start. Otherwise a single position is removed.
/// A caret at 0 deletes nothing.
pub fn guard_deletion(
    doc: &mut RichDocument,
    caret: usize,
) -> Result<DeletionOutcome, DocumentError> {
    let len = doc.len();
    if caret > len {
        return Err(DocumentError::InvalidPosition {
            position: caret,
            len,
        });
    }
    if caret == 0 {
        return Ok(DeletionOutcome {
            removed: Span::empty(0),
            caret: 0,
            unit_deleted: false,
        });
    }

    if let Some(span) = doc.attribute_at(caret - 1).map(|chip| chip.span) {
        let removed = doc.delete_range(span.start, span.len())?;
        log::debug!("Backward delete at {caret} removed chip {}..{}", removed.start, removed.end);
        return Ok(DeletionOutcome {
            removed,
            caret: removed.start,
            unit_deleted: true,
        });
    }

    let removed = doc.delete_range(caret - 1, 1)?;
    Ok(DeletionOutcome {
        removed,
        caret: removed.start,
        unit_deleted: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{load, token};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // "hi " (0..3), Alice chip (3..11), " and" (11..15)
    fn sample() -> RichDocument {
        load(&format!("hi {} and", token("user:1")))
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(4, 3)]
    #[case(6, 3)]
    #[case(7, 11)]
    #[case(8, 11)]
    #[case(10, 11)]
    #[case(11, 11)]
    #[case(14, 14)]
    fn nearest_caret_snap(#[case] proposed: usize, #[case] expected: usize) {
        assert_eq!(adjust_caret(&sample(), proposed, SnapPolicy::Nearest), expected);
    }

    #[rstest]
    #[case(4, 11)]
    #[case(7, 3)]
    #[case(8, 3)]
    #[case(11, 11)]
    fn legacy_caret_snap(#[case] proposed: usize, #[case] expected: usize) {
        assert_eq!(adjust_caret(&sample(), proposed, SnapPolicy::Legacy), expected);
    }

    #[test]
    fn nearest_snap_matches_distance_rule_for_every_interior_position() {
        let chip = Span::new(10, 17);
        for q in 11..17 {
            let expected = if (chip.end - q) > (q - chip.start) {
                chip.start
            } else {
                chip.end
            };
            assert_eq!(SnapPolicy::Nearest.snap(chip, q), expected, "q = {q}");
        }
    }

    #[test]
    fn ranged_selection_widens_to_chip() {
        let doc = sample();
        let adjusted = adjust_selection(&doc, Selection::new(1, 4), SnapPolicy::Nearest);
        assert_eq!(adjusted, Ok(Selection::new(1, 10)));

        let adjusted = adjust_selection(&doc, Selection::new(5, 8), SnapPolicy::Nearest);
        assert_eq!(adjusted, Ok(Selection::new(3, 10)));
    }

    #[test]
    fn selection_past_end_is_rejected() {
        let doc = sample();
        assert_eq!(
            adjust_selection(&doc, Selection::new(10, 6), SnapPolicy::Nearest),
            Err(DocumentError::InvalidPosition { position: 16, len: 15 })
        );
        assert_eq!(
            adjust_selection(&doc, Selection::new(usize::MAX, 2), SnapPolicy::Nearest),
            Err(DocumentError::InvalidPosition {
                position: usize::MAX,
                len: 15
            })
        );
    }

    #[test]
    fn empty_selection_snaps_like_caret() {
        let doc = sample();
        let adjusted = adjust_selection(&doc, Selection::caret(9), SnapPolicy::Nearest);
        assert_eq!(adjusted, Ok(Selection::caret(11)));
    }

    #[test]
    fn backward_delete_after_chip_removes_it() {
        let mut doc = sample();
        let outcome = guard_deletion(&mut doc, 11).unwrap();
        assert_eq!(
            outcome,
            DeletionOutcome {
                removed: Span::new(3, 11),
                caret: 3,
                unit_deleted: true,
            }
        );
        assert_eq!(doc.rendered_text(), "hi  and");
    }

    #[test]
    fn backward_delete_from_inside_chip_removes_it() {
        let mut doc = sample();
        let outcome = guard_deletion(&mut doc, 6).unwrap();
        assert!(outcome.unit_deleted);
        assert_eq!(outcome.caret, 3);
    }

    #[test]
    fn backward_delete_in_plain_text() {
        let mut doc = sample();
        let outcome = guard_deletion(&mut doc, 3).unwrap();
        assert_eq!(
            outcome,
            DeletionOutcome {
                removed: Span::new(2, 3),
                caret: 2,
                unit_deleted: false,
            }
        );
        assert_eq!(doc.chips().next().map(|c| c.span), Some(Span::new(2, 10)));
    }

    #[test]
    fn backward_delete_at_start_is_noop() {
        let mut doc = sample();
        let outcome = guard_deletion(&mut doc, 0).unwrap();
        assert_eq!(outcome.caret, 0);
        assert!(!outcome.unit_deleted);
        assert_eq!(doc, sample());
    }

    #[test]
    fn backward_delete_past_end_fails() {
        let mut doc = sample();
        assert_eq!(
            guard_deletion(&mut doc, 16),
            Err(DocumentError::InvalidPosition {
                position: 16,
                len: 15
            })
        );
    }
}
