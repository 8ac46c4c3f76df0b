//! # Label
//!
//! Read-only chip label. Taps on a chip report the chip's model to the host
//! and briefly show the chip in the pressed style.
//!
//! Time is driven by the host: [`ChipLabel::tap`] and [`ChipLabel::tick`]
//! take the current `Instant`, and the pending style revert lives in a
//! cancelable [`FeedbackTimer`].

pub mod chip_label;
pub mod feedback;

pub use chip_label::{ChipLabel, LabelSettings};
pub use feedback::{FeedbackHandle, FeedbackTimer, PendingRevert};
