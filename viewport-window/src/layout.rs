use core::num::NonZeroU32;

use crate::metrics::ceil_px;
use crate::{Align, ConfigError, Spacers, ViewportMetrics, Window};

/// Rows rendered beyond each viewport edge unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 1;

/// A validated fixed-row layout: row height plus overscan.
///
/// Every query is `O(1)` in the row count; nothing here iterates the list. Because the row height
/// is a [`NonZeroU32`], a `FixedLayout` can only exist for a valid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedLayout {
    item_size: NonZeroU32,
    overscan: usize,
}

impl FixedLayout {
    /// Creates a layout with [`DEFAULT_OVERSCAN`].
    pub fn new(item_size: u32) -> Result<Self, ConfigError> {
        let Some(item_size) = NonZeroU32::new(item_size) else {
            wwarn!("FixedLayout::new: zero item size");
            return Err(ConfigError::ZeroItemSize);
        };
        wdebug!(item_size = item_size.get(), "FixedLayout::new");
        Ok(Self {
            item_size,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Creates a layout from a raw CSS pixel row height (partial pixels round up).
    pub fn from_css_px(item_size: f64) -> Result<Self, ConfigError> {
        if !item_size.is_finite() || item_size <= 0.0 {
            return Err(ConfigError::InvalidItemSize(item_size));
        }
        Self::new(ceil_px(item_size).min(u32::MAX as u64) as u32)
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn item_size(&self) -> u32 {
        self.item_size.get()
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn total_size(&self, item_count: usize) -> u64 {
        (item_count as u64).saturating_mul(self.size())
    }

    pub fn max_scroll_offset(&self, item_count: usize, viewport_height: u32) -> u64 {
        self.total_size(item_count).saturating_sub(viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, item_count: usize, viewport_height: u32) -> u64 {
        offset.min(self.max_scroll_offset(item_count, viewport_height))
    }

    /// Returns the row under `offset`, clamped to the last row.
    pub fn index_at_offset(&self, offset: u64, item_count: usize) -> Option<usize> {
        let last = item_count.checked_sub(1)?;
        Some(to_index(offset / self.size()).min(last))
    }

    pub fn item_start(&self, index: usize, item_count: usize) -> Option<u64> {
        (index < item_count).then(|| (index as u64).saturating_mul(self.size()))
    }

    pub fn item_end(&self, index: usize, item_count: usize) -> Option<u64> {
        let start = self.item_start(index, item_count)?;
        Some(start.saturating_add(self.size()))
    }

    /// The rows intersecting the viewport, without overscan.
    ///
    /// An offset past the end of the content is clamped to the last full viewport, so the window
    /// always ends at the last row instead of running off the list. A zero-height viewport yields
    /// the single row under the offset.
    pub fn visible_window(&self, metrics: ViewportMetrics, item_count: usize) -> Window {
        let Some(last) = item_count.checked_sub(1) else {
            return Window::EMPTY;
        };
        let size = self.size();
        let view = metrics.viewport_height as u64;
        let offset =
            self.clamp_scroll_offset(metrics.scroll_offset, item_count, metrics.viewport_height);

        let first = to_index(offset / size).min(last);
        let last_visible = if view == 0 {
            first
        } else {
            let end_inclusive = offset.saturating_add(view - 1);
            to_index(end_inclusive / size).min(last)
        };

        Window {
            start_index: first,
            end_index: last_visible + 1,
        }
    }

    /// The rows to mount: [`Self::visible_window`] widened by `overscan` rows on each side.
    pub fn window(&self, metrics: ViewportMetrics, item_count: usize) -> Window {
        let visible = self.visible_window(metrics, item_count);
        if visible.is_empty() {
            return visible;
        }
        Window {
            start_index: visible.start_index.saturating_sub(self.overscan),
            end_index: visible
                .end_index
                .saturating_add(self.overscan)
                .min(item_count),
        }
    }

    /// Spacer heights for `window` over a list of `item_count` rows.
    ///
    /// A window that extends past `item_count` is clipped first, so the rendered height is always
    /// `item_count * item_size`. An empty window over a non-empty list pushes the whole content
    /// height into the trailing spacer.
    pub fn spacers(&self, window: Window, item_count: usize) -> Spacers {
        let end = window.end_index.min(item_count);
        let start = window.start_index.min(end);
        Spacers {
            leading: self.total_size(start),
            trailing: self.total_size(item_count - end),
        }
    }

    /// Computes the scroll offset that brings `index` into view with the requested alignment.
    ///
    /// The result is clamped to the scrollable range; an out-of-range index targets the last row.
    pub fn scroll_to_index_offset(
        &self,
        index: usize,
        align: Align,
        metrics: ViewportMetrics,
        item_count: usize,
    ) -> u64 {
        let Some(last) = item_count.checked_sub(1) else {
            return 0;
        };
        let index = index.min(last);
        let size = self.size();
        let start = (index as u64).saturating_mul(size);
        let end = start.saturating_add(size);
        let view = metrics.viewport_height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => start.saturating_add(size / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur = metrics.scroll_offset;
                if start >= cur && end <= metrics.viewport_end() {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target, item_count, metrics.viewport_height)
    }

    fn size(&self) -> u64 {
        self.item_size.get() as u64
    }
}

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
