/*!
 * # Editing
 *
 * Keeps the caret and edits consistent around atomic chips and exposes the
 * editable surface used by input views.
 *
 * ## Event contract
 *
 * Hosts call in explicitly; nothing is observed implicitly:
 *
 * - caret or selection moved → [`ChipEditor::move_caret`] / [`ChipEditor::select`],
 *   which snap out of chips via [`guard::adjust_caret`]
 * - text about to change → [`ChipEditor::replace`], which reports the raw
 *   replacement to the text-changed callback and then applies the chip policy
 *   (a backward delete next to a chip removes the whole chip)
 * - programmatic chip insertion → [`ChipEditor::insert_chip`]
 *
 * ## Modules
 *
 * - **`selection`**: `Selection` (position + length)
 * - **`guard`**: caret snapping and atomic backward deletion
 * - **`outcome`**: `EditOutcome` describing an applied edit
 * - **`editor`**: `ChipEditor`, `EditorSettings`, `Outputs`
 */

pub mod editor;
pub mod guard;
pub mod outcome;
pub mod selection;

pub use editor::{ChipEditor, EditorSettings, Outputs};
pub use guard::{DeletionOutcome, SnapPolicy, adjust_caret, adjust_selection, guard_deletion};
pub use outcome::EditOutcome;
pub use selection::Selection;
