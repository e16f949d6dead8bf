//! Fixed-row viewport windowing.
//!
//! Given a scroll offset, a viewport height and a fixed row height, this crate answers two
//! questions in `O(1)` regardless of how many rows exist:
//!
//! - which contiguous run of rows should be mounted (the [`Window`], widened by overscan), and
//! - how tall the leading/trailing spacers must be so the scroll container keeps the geometry of
//!   the full list ([`Spacers`]).
//!
//! It is UI-agnostic. The host layer provides viewport metrics and the row count; see the
//! `viewport-window-renderer` crate for a stateful renderer that subscribes to scroll/resize
//! signals.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod metrics;
mod types;

#[cfg(test)]
mod property_tests;

pub use error::{ConfigError, checked_item_count};
pub use layout::{DEFAULT_OVERSCAN, FixedLayout};
pub use metrics::ViewportMetrics;
pub use types::{Align, Spacers, Window};

/// Computes the overscanned window for a single set of inputs.
///
/// This is the one-shot form of [`FixedLayout::window`]: it validates `item_size` and fails with
/// [`ConfigError::ZeroItemSize`] instead of rendering a degenerate window.
pub fn compute_window(
    scroll_offset: u64,
    viewport_height: u32,
    item_size: u32,
    item_count: usize,
    overscan: usize,
) -> Result<Window, ConfigError> {
    let layout = FixedLayout::new(item_size)?.with_overscan(overscan);
    let window = layout.window(ViewportMetrics::new(scroll_offset, viewport_height), item_count);
    wtrace!(
        scroll_offset,
        viewport_height,
        item_size,
        item_count,
        start = window.start_index,
        end = window.end_index,
        "compute_window"
    );
    Ok(window)
}
