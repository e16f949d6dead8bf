use viewport_window::{ConfigError, FixedLayout, Spacers, ViewportMetrics, Window};

use crate::Signal;

/// Lifecycle of a mounted list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No viewport measurement yet; the window is empty.
    Uninitialized,
    /// Measured; the window tracks every scroll/resize/item-count change.
    Ready,
}

/// A snapshot of a list's derived state.
///
/// Transitions are pure and `O(1)`; the live list stores this in a `Cell` shared with its signal
/// listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListState {
    phase: Phase,
    metrics: ViewportMetrics,
    item_count: usize,
    window: Window,
    revision: u64,
    changed: bool,
    fault: Option<ConfigError>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            metrics: ViewportMetrics::default(),
            item_count: 0,
            window: Window::EMPTY,
            revision: 0,
            changed: false,
            fault: None,
        }
    }
}

impl ListState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Bumped each time the stored window actually changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the window changed since the flag was last taken.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// The last rejected host measurement, if no valid one has arrived since.
    pub fn fault(&self) -> Option<ConfigError> {
        self.fault
    }

    pub fn spacers(&self, layout: &FixedLayout) -> Spacers {
        layout.spacers(self.window, self.item_count)
    }

    pub(crate) fn apply(&mut self, signal: Signal, layout: &FixedLayout) {
        match signal {
            Signal::Scroll { offset } => {
                self.metrics.scroll_offset = ViewportMetrics::scroll_offset_from_css_px(offset);
            }
            Signal::Resize { viewport_height } => {
                match ViewportMetrics::viewport_height_from_css_px(viewport_height) {
                    Ok(h) => {
                        self.metrics.viewport_height = h;
                        self.phase = Phase::Ready;
                        self.fault = None;
                    }
                    Err(err) => {
                        self.fault = Some(err);
                        return;
                    }
                }
            }
        }
        self.recompute(layout);
    }

    pub(crate) fn measured(&mut self, metrics: ViewportMetrics, layout: &FixedLayout) {
        self.metrics = metrics;
        self.phase = Phase::Ready;
        self.fault = None;
        self.recompute(layout);
    }

    pub(crate) fn defer_measurement(&mut self, scroll_offset: u64) {
        self.metrics.scroll_offset = scroll_offset;
    }

    pub(crate) fn set_item_count(&mut self, item_count: usize, layout: &FixedLayout) {
        if self.item_count == item_count {
            return;
        }
        self.item_count = item_count;
        self.recompute(layout);
    }

    pub(crate) fn recompute(&mut self, layout: &FixedLayout) {
        if self.phase == Phase::Uninitialized {
            return;
        }
        let next = layout.window(self.metrics, self.item_count);
        if next == self.window {
            return;
        }
        rtrace!(
            start = next.start_index,
            end = next.end_index,
            revision = self.revision + 1,
            "window changed"
        );
        self.window = next;
        self.revision = self.revision.wrapping_add(1);
        self.changed = true;
    }

    pub(crate) fn take_changed(&mut self) -> bool {
        core::mem::replace(&mut self.changed, false)
    }
}
