use std::time::{Duration, Instant};

/// Identifies one scheduled revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackHandle(u64);

/// A chip waiting to be restored to its link style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevert {
    pub handle: FeedbackHandle,
    /// Node index of the chip in the label's document.
    pub chip: usize,
    pub deadline: Instant,
}

/// Holds at most one pending pressed-style revert.
///
/// Scheduling a new revert replaces the pending one and hands it back, so the
/// caller can restore that chip straight away instead of leaving it pressed.
#[derive(Debug)]
pub struct FeedbackTimer {
    delay: Duration,
    pending: Option<PendingRevert>,
    next_handle: u64,
}

impl FeedbackTimer {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn pending(&self) -> Option<&PendingRevert> {
        self.pending.as_ref()
    }

    /// Arms a revert of `chip` at `now + delay`. Returns the revert it replaced.
    pub fn schedule(&mut self, chip: usize, now: Instant) -> Option<PendingRevert> {
        let handle = FeedbackHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.replace(PendingRevert {
            handle,
            chip,
            deadline: now + self.delay,
        })
    }

    /// Cancels the revert identified by `handle`, if it is still pending.
    pub fn cancel(&mut self, handle: FeedbackHandle) -> Option<PendingRevert> {
        if self.pending.is_some_and(|pending| pending.handle == handle) {
            return self.pending.take();
        }
        None
    }

    /// Takes the pending revert once its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingRevert> {
        if self.pending.is_some_and(|pending| pending.deadline <= now) {
            return self.pending.take();
        }
        None
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
