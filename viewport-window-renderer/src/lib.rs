//! A windowed list renderer for the `viewport-window` crate.
//!
//! [`WindowedList`] bridges the pure window calculator to a live viewport:
//!
//! - it subscribes to scroll and resize signals when mounted and releases them when dropped,
//! - it recomputes the window on every signal and records a new revision only when it changes,
//! - it renders the mounted rows between two spacers so the content keeps its full height.
//!
//! The host is abstracted by the [`Viewport`] trait. [`ManualViewport`] is an in-memory host
//! that is handy for headless simulations and tests.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod list;
mod render;
mod signal;
mod state;


pub use key::RowKey;
pub use list::WindowedList;
pub use render::{Frame, RenderItem, Row};
pub use signal::{Listener, ManualViewport, Signal, SignalKind, Subscription, Viewport};
pub use state::{ListState, Phase};
