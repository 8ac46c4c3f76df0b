use std::fmt;

use serde::Serialize;

use crate::document::{DocumentError, PlainRun, RichDocument, Span, build_chip, project};
use crate::models::{InlineModel, ModelResolver, StyleSet};
use crate::parsing::TokenScanner;

use super::{
    guard::{SnapPolicy, adjust_caret, adjust_selection, guard_deletion},
    outcome::EditOutcome,
    selection::Selection,
};

/// Settings for a [`ChipEditor`].
#[derive(Debug, Clone, Default)]
pub struct EditorSettings {
    pub scanner: TokenScanner,
    pub styles: StyleSet,
    pub snap: SnapPolicy,
    pub placeholder: Option<String>,
}

/// What the host reads back from the editor, e.g. on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outputs {
    /// Text with every chip replaced by its canonical content.
    pub canonical_text: String,
    /// Text as rendered, chips included.
    pub text: String,
}

/// Editable chip input.
///
/// Owns the [`RichDocument`] and the current selection. Every host event is
/// an explicit call; chips are kept atomic for caret movement and deletion.
pub struct ChipEditor {
    document: RichDocument,
    selection: Selection,
    settings: EditorSettings,
    resolver: Box<dyn ModelResolver>,
    text_changed: Option<Box<dyn FnMut(&str)>>,
    version: u64,
}

impl fmt::Debug for ChipEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipEditor")
            .field("document", &self.document)
            .field("selection", &self.selection)
            .field("settings", &self.settings)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl ChipEditor {
    pub fn new(settings: EditorSettings, resolver: impl ModelResolver + 'static) -> Self {
        Self {
            document: RichDocument::new(),
            selection: Selection::default(),
            settings,
            resolver: Box::new(resolver),
            text_changed: None,
            version: 0,
        }
    }

    /// Registers the callback receiving each raw replacement string before the
    /// chip policy is applied.
    pub fn on_text_changed(&mut self, callback: impl FnMut(&str) + 'static) {
        self.text_changed = Some(Box::new(callback));
    }

    /// Replaces the whole content, resolving tokens into chips. The caret
    /// moves to the end.
    pub fn set_text(&mut self, text: &str) {
        self.document = RichDocument::load(
            text,
            &self.settings.scanner,
            self.resolver.as_ref(),
            &self.settings.styles,
        );
        self.selection = Selection::caret(self.document.len());
        self.version += 1;
    }

    /// Inserts a chip for `model` at the selection.
    ///
    /// With `delete_trigger`, the position before an empty selection is
    /// removed first; this is the character (e.g. `@`) that opened the picker.
    /// The caret ends up right after the chip.
    pub fn insert_chip(
        &mut self,
        model: InlineModel,
        delete_trigger: bool,
    ) -> Result<EditOutcome, DocumentError> {
        let target = adjust_selection(&self.document, self.selection, self.settings.snap)?;
        let mut removed = self.document.delete_range(target.position, target.length)?;
        let mut unit_deleted = false;

        if delete_trigger && target.is_empty() && removed.start > 0 {
            let deletion = guard_deletion(&mut self.document, removed.start)?;
            removed = deletion.removed;
            unit_deleted = deletion.unit_deleted;
        }

        let chip = build_chip(model, &self.settings.styles.link);
        let inserted = self.document.insert_at(removed.start, chip)?;
        Ok(self.finish(removed, inserted, inserted.end, unit_deleted))
    }

    /// Applies a raw text change from the host.
    ///
    /// An empty replacement over an empty selection is a backward delete and
    /// removes an adjacent chip as a whole. Anything else deletes the
    /// selection (widened to chip boundaries) and inserts `replacement` as
    /// plain text in the default style.
    pub fn replace(
        &mut self,
        selection: Selection,
        replacement: &str,
    ) -> Result<EditOutcome, DocumentError> {
        if let Some(callback) = self.text_changed.as_mut() {
            callback(replacement);
        }

        if replacement.is_empty() && selection.is_empty() {
            let deletion = guard_deletion(&mut self.document, selection.position)?;
            return Ok(self.finish(
                deletion.removed,
                Span::empty(deletion.caret),
                deletion.caret,
                deletion.unit_deleted,
            ));
        }

        let target = adjust_selection(&self.document, selection, self.settings.snap)?;
        let removed = self.document.delete_range(target.position, target.length)?;
        let run = PlainRun::new(replacement, self.settings.styles.default.clone());
        let inserted = self.document.insert_at(removed.start, run)?;
        Ok(self.finish(removed, inserted, inserted.end, false))
    }

    /// Types `text` over the current selection.
    pub fn insert_text(&mut self, text: &str) -> Result<EditOutcome, DocumentError> {
        self.replace(self.selection, text)
    }

    /// Backspace at the current selection.
    pub fn delete_backward(&mut self) -> Result<EditOutcome, DocumentError> {
        self.replace(self.selection, "")
    }

    /// Moves the caret, snapping out of chips. Returns the caret actually set.
    pub fn move_caret(&mut self, proposed: usize) -> Result<usize, DocumentError> {
        self.check_position(proposed)?;
        let caret = adjust_caret(&self.document, proposed, self.settings.snap);
        self.selection = Selection::caret(caret);
        Ok(caret)
    }

    /// Sets the selection, widening it so no chip is partially covered.
    pub fn select(&mut self, selection: Selection) -> Result<Selection, DocumentError> {
        self.selection = adjust_selection(&self.document, selection, self.settings.snap)?;
        Ok(self.selection)
    }

    pub fn outputs(&self) -> Outputs {
        Outputs {
            canonical_text: project(&self.document),
            text: self.document.rendered_text(),
        }
    }

    pub fn document(&self) -> &RichDocument {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn caret(&self) -> usize {
        self.selection.position
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.settings.placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.settings.placeholder = placeholder;
    }

    /// The placeholder shows only while there is no content.
    pub fn placeholder_visible(&self) -> bool {
        self.document.is_empty()
    }

    fn check_position(&self, position: usize) -> Result<(), DocumentError> {
        let len = self.document.len();
        if position > len {
            return Err(DocumentError::InvalidPosition { position, len });
        }
        Ok(())
    }

    fn finish(
        &mut self,
        removed: Span,
        inserted: Span,
        caret: usize,
        unit_deleted: bool,
    ) -> EditOutcome {
        self.selection = Selection::caret(caret);
        self.version += 1;
        EditOutcome {
            removed,
            inserted,
            caret,
            unit_deleted,
            version: self.version,
        }
    }
}
