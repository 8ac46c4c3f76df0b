//! # Rich Document
//!
//! The editable model behind both surfaces: an ordered sequence of plain runs
//! and atomic chips addressed by position.
//!
//! ## Addressable positions
//!
//! Every Unicode scalar value of a plain run is one position. A chip occupies
//! `rendered_length` positions: one for its image (if any), one per character
//! of `symbol + text`, and one for the trailing space. Positions inside a chip
//! are never valid edit boundaries; see [`crate::editing::guard`].
//!
//! ## Modules
//!
//! - **`span`**: `Span` half-open position ranges
//! - **`node`**: `Segment`, `PlainRun`, `ChipUnit`, `ContentNode`
//! - **`chip`**: builds a `ChipUnit` from an `InlineModel`
//! - **`rich`**: `RichDocument` with load, insert, delete and chip queries
//! - **`projection`**: reconstructs canonical text from a document
//! - **`error`**: `DocumentError`

pub mod chip;
pub mod error;
pub mod node;
pub mod projection;
pub mod rich;
pub mod span;

pub use chip::{build_chip, build_chip_with_content};
pub use error::DocumentError;
pub use node::{CHIP_TRAILER, ChipUnit, ContentNode, OBJECT_REPLACEMENT, PlainRun, Segment};
pub use projection::project;
pub use rich::{ChipRef, RichDocument};
pub use span::Span;
