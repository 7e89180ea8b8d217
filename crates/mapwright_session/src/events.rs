//! Change notifications for the host presentation layer
//!
//! Events accumulate in a queue the host drains after each entry-point
//! call, decoupling the engine from any UI binding mechanism.

/// A change the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The set of selected entities changed
    SelectionChanged,
    /// The bandbox rectangle changed (possibly to empty)
    BandboxChanged,
    /// Whether anything at all is selected flipped
    HasSelectionChanged(bool),
}

/// Drain-style queue of pending [`SessionEvent`]s
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<SessionEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: SessionEvent) {
        self.pending.push(event);
    }

    /// Take every pending event, leaving the queue empty
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
