//! Move notifications
//!
//! Every committed navigation emits a [`MoveEvent`]. Dependent UI (buttons,
//! pagination, page scripts) subscribes through [`MoveSubscribers`] and derives
//! its own state from the event, so the engine stays free of control-specific
//! knowledge.

use serde::Serialize;

/// Snapshot of the carousel position after a committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvent {
    /// New current index (padded)
    pub index: usize,
    /// Total slide count, clones included
    pub len: usize,
    /// Effective number of visible slides
    pub slides_visible: usize,
    /// Clones on each end (0 unless infinite)
    pub padding: usize,
    /// Whether the carousel wraps around
    pub looping: bool,
}

impl MoveEvent {
    /// True when a full page exists after the current index
    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.index + self.slides_visible < self.len
    }

    /// True at the very first slide
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// Number of genuine slides
    #[inline]
    pub fn source_len(&self) -> usize {
        self.len.saturating_sub(2 * self.padding)
    }
}

/// Callback invoked after each committed move
pub type MoveCallback = Box<dyn FnMut(&MoveEvent)>;

/// Ordered list of move callbacks
///
/// Callbacks run synchronously in subscription order. There is no removal;
/// the list lives as long as the engine.
#[derive(Default)]
pub struct MoveSubscribers {
    callbacks: Vec<MoveCallback>,
}

impl MoveSubscribers {
    /// Create an empty list
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    /// Append a callback
    pub fn subscribe(&mut self, callback: MoveCallback) {
        self.callbacks.push(callback);
    }

    /// Invoke every callback with the event
    pub fn emit(&mut self, event: &MoveEvent) {
        for callback in self.callbacks.iter_mut() {
            callback(event);
        }
    }

    /// Number of subscribers
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// True when nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Drop every subscriber (teardown only)
    pub(crate) fn clear(&mut self) {
        self.callbacks.clear();
    }
}

impl std::fmt::Debug for MoveSubscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSubscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
