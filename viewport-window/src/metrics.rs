use crate::ConfigError;

/// The live geometry of the scroll container, in whole pixels.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which makes it easy to
/// snapshot and restore a scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    pub scroll_offset: u64,
    pub viewport_height: u32,
}

impl ViewportMetrics {
    pub const fn new(scroll_offset: u64, viewport_height: u32) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// Builds metrics from raw CSS pixel values as reported by a host layout engine.
    ///
    /// A negative or non-finite viewport height is rejected. A negative scroll offset (elastic
    /// overscroll on some platforms) is clamped to zero.
    pub fn from_css_px(scroll_offset: f64, viewport_height: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            scroll_offset: Self::scroll_offset_from_css_px(scroll_offset),
            viewport_height: Self::viewport_height_from_css_px(viewport_height)?,
        })
    }

    /// Converts a raw scroll offset, rounding down and clamping to `0..`.
    pub fn scroll_offset_from_css_px(raw: f64) -> u64 {
        if raw.is_finite() && raw > 0.0 {
            raw as u64
        } else {
            0
        }
    }

    /// Converts a raw viewport height, rounding partial pixels up so the last row is covered.
    pub fn viewport_height_from_css_px(raw: f64) -> Result<u32, ConfigError> {
        if !raw.is_finite() || raw < 0.0 {
            wwarn!(raw, "rejecting viewport height");
            return Err(ConfigError::InvalidViewportHeight(raw));
        }
        Ok(ceil_px(raw).min(u32::MAX as u64) as u32)
    }

    pub fn with_scroll_offset(mut self, scroll_offset: u64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    /// Exclusive end of the visible pixel span.
    pub fn viewport_end(&self) -> u64 {
        self.scroll_offset.saturating_add(self.viewport_height as u64)
    }
}

// `f64::ceil` needs `std`; callers have already rejected negative and non-finite input.
pub(crate) fn ceil_px(v: f64) -> u64 {
    let truncated = v as u64;
    if (truncated as f64) < v {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
