use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::document::RichDocument;
use crate::models::{InlineModel, ModelResolver, StyleSet};
use crate::parsing::TokenScanner;

use super::feedback::{FeedbackTimer, PendingRevert};

#[derive(Debug, Clone)]
pub struct LabelSettings {
    pub scanner: TokenScanner,
    pub styles: StyleSet,
    pub feedback_delay: Duration,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            scanner: TokenScanner::default(),
            styles: StyleSet::default(),
            feedback_delay: FeedbackTimer::DEFAULT_DELAY,
        }
    }
}

type ActivateCallback = Box<dyn FnMut(Option<Arc<InlineModel>>)>;

/// Tappable, read-only chip label.
pub struct ChipLabel {
    document: RichDocument,
    styles: StyleSet,
    scanner: TokenScanner,
    resolver: Box<dyn ModelResolver>,
    activate: Option<ActivateCallback>,
    feedback: FeedbackTimer,
}

impl fmt::Debug for ChipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipLabel")
            .field("document", &self.document)
            .field("styles", &self.styles)
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

impl ChipLabel {
    pub fn new(settings: LabelSettings, resolver: impl ModelResolver + 'static) -> Self {
        Self {
            document: RichDocument::new(),
            styles: settings.styles,
            scanner: settings.scanner,
            resolver: Box::new(resolver),
            activate: None,
            feedback: FeedbackTimer::new(settings.feedback_delay),
        }
    }

    /// Registers the callback run on every tap, with the tapped chip's model
    /// or `None` when the tap missed all chips.
    pub fn on_activate(&mut self, callback: impl FnMut(Option<Arc<InlineModel>>) + 'static) {
        self.activate = Some(Box::new(callback));
    }

    /// Displays `text`, resolving tokens into chips. Any pending tap feedback
    /// is dropped with the old content.
    pub fn set_text(&mut self, text: &str) {
        self.feedback.clear();
        self.document = self.load(text);
    }

    /// Renders `text` the way [`set_text`](Self::set_text) would, without
    /// touching the label.
    pub fn format_text(&self, text: &str) -> String {
        self.load(text).rendered_text()
    }

    pub fn display_text(&self) -> String {
        self.document.rendered_text()
    }

    pub fn document(&self) -> &RichDocument {
        &self.document
    }

    pub fn pending_feedback(&self) -> Option<&PendingRevert> {
        self.feedback.pending()
    }

    /// Handles a tap that hit text `position`.
    ///
    /// Every position a chip covers counts as a hit, its leading image
    /// included: `start <= position < end`.
    ///
    /// A hit shows the chip pressed until [`tick`](Self::tick) passes the
    /// feedback delay. A chip still pressed from an earlier tap is restored
    /// immediately.
    pub fn tap(&mut self, position: usize, now: Instant) -> Option<Arc<InlineModel>> {
        let hit = self
            .document
            .attribute_at(position)
            .map(|chip| (chip.index, Arc::clone(chip.chip.model())));

        if let Some((index, _)) = &hit {
            if let Some(previous) = self.feedback.schedule(*index, now) {
                self.document.restyle_chip(previous.chip, &self.styles.link);
            }
            self.document.restyle_chip(*index, &self.styles.pressed);
        }

        let model = hit.map(|(_, model)| model);
        if let Some(callback) = self.activate.as_mut() {
            callback(model.clone());
        }
        model
    }

    /// Restores a pressed chip whose feedback delay has elapsed. Returns true
    /// if a chip was restored.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.feedback.take_due(now) {
            Some(due) => self.document.restyle_chip(due.chip, &self.styles.link),
            None => false,
        }
    }

    fn load(&self, text: &str) -> RichDocument {
        RichDocument::load(text, &self.scanner, self.resolver.as_ref(), &self.styles)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::StyleTag;
    use crate::tests::{registry, token};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // "hi " (0..3), Alice (3..11), "& " (11..13), Bob (13..18)
    fn label() -> ChipLabel {
        let mut label = ChipLabel::new(LabelSettings::default(), registry());
        label.set_text(&format!("hi {}& {}", token("user:1"), token("user:2")));
        label
    }

    fn chip_style(label: &ChipLabel, index: usize) -> StyleTag {
        label.document().chip(index).unwrap().chip.style().clone()
    }

    #[test]
    fn display_text_renders_chips() {
        assert_eq!(label().display_text(), "hi \u{fffc}@Alice & @Bob ");
    }

    #[test]
    fn format_text_leaves_label_untouched() {
        let label = label();
        assert_eq!(label.format_text(&token("user:2")), "@Bob ");
        assert_eq!(label.display_text(), "hi \u{fffc}@Alice & @Bob ");
    }

    #[test]
    fn tap_on_chip_reports_model() {
        let taps = Rc::new(RefCell::new(Vec::new()));
        let mut label = label();
        let sink = Rc::clone(&taps);
        label.on_activate(move |model| sink.borrow_mut().push(model.map(|m| m.text.clone())));

        let now = Instant::now();
        let model = label.tap(5, now);
        assert_eq!(model.map(|m| m.text.clone()), Some("Alice".to_string()));
        label.tap(1, now);

        assert_eq!(*taps.borrow(), vec![Some("Alice".to_string()), None]);
    }

    #[rstest]
    #[case(2, None)]
    #[case(3, Some("Alice"))]
    #[case(10, Some("Alice"))]
    #[case(11, None)]
    #[case(13, Some("Bob"))]
    #[case(17, Some("Bob"))]
    #[case(18, None)]
    fn tap_hits_every_position_a_chip_covers(
        #[case] position: usize,
        #[case] expected: Option<&str>,
    ) {
        let mut label = label();
        let model = label.tap(position, Instant::now());
        assert_eq!(model.as_deref().map(|m| m.text.as_str()), expected);
    }

    #[test]
    fn tap_feedback_reverts_after_delay() {
        let mut label = label();
        let now = Instant::now();
        label.tap(4, now);
        assert_eq!(chip_style(&label, 1), StyleTag::new("link-pressed"));

        assert!(!label.tick(now + Duration::from_millis(100)));
        assert_eq!(chip_style(&label, 1), StyleTag::new("link-pressed"));

        assert!(label.tick(now + Duration::from_millis(200)));
        assert_eq!(chip_style(&label, 1), StyleTag::new("link"));
        assert!(label.pending_feedback().is_none());
    }

    #[test]
    fn second_tap_restores_first_chip_immediately() {
        let mut label = label();
        let now = Instant::now();
        label.tap(4, now);
        label.tap(14, now + Duration::from_millis(50));

        assert_eq!(chip_style(&label, 1), StyleTag::new("link"));
        assert_eq!(chip_style(&label, 3), StyleTag::new("link-pressed"));
        assert_eq!(label.pending_feedback().map(|p| p.chip), Some(3));
    }

    #[test]
    fn tap_on_plain_text_schedules_nothing() {
        let mut label = label();
        assert!(label.tap(0, Instant::now()).is_none());
        assert!(label.pending_feedback().is_none());
    }

    #[test]
    fn set_text_drops_pending_feedback() {
        let mut label = label();
        label.tap(4, Instant::now());
        label.set_text("plain");
        assert!(label.pending_feedback().is_none());
        assert!(!label.tick(Instant::now() + Duration::from_secs(1)));
    }
}
