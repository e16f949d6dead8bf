//! A paginated user directory rendered through a windowed list.
//!
//! This crate is the application glue around `viewport-window` and `viewport-window-renderer`:
//!
//! - [`User`] and [`Page`] model the public directory's JSON payload,
//! - [`Feed`] is the append-only item store with a single-flight page loader and the
//!   "near the bottom, load more" trigger,
//! - [`DirectoryConfig`] holds the tunables (row height, page size, threshold, overscan).
//!
//! Fetching is left to the host: [`Feed::begin_load`] hands out a [`PageRequest`] and the host
//! reports the response body back with [`Feed::complete_json`].
#![forbid(unsafe_code)]

mod config;
mod error;
mod feed;
mod page;
mod user;

#[cfg(test)]
mod tests;

pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result};
pub use feed::{Feed, PageRequest, should_load_more};
pub use page::{Page, PageInfo, page_query};
pub use user::{Name, Picture, User};

pub use viewport_window::{FixedLayout, ViewportMetrics, Window};
pub use viewport_window_renderer::{Frame, ManualViewport, WindowedList};
