use alloc::vec::Vec;

use viewport_window::{Spacers, Window};

/// Renders one mounted row.
///
/// Implemented for every `FnMut(&T, usize) -> O`, so a closure is usually enough. Calls are
/// statically dispatched. A renderer may be called many times for the same item over a session
/// and should produce the same output for the same item.
pub trait RenderItem<T: ?Sized> {
    type Output;

    fn render(&mut self, item: &T, index: usize) -> Self::Output;
}

impl<T: ?Sized, O, F> RenderItem<T> for F
where
    F: FnMut(&T, usize) -> O,
{
    type Output = O;

    fn render(&mut self, item: &T, index: usize) -> O {
        self(item, index)
    }
}

/// A mounted row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row<K, O> {
    /// Stable identity for reconciliation (absolute index unless the caller supplied keys).
    pub key: K,
    pub index: usize,
    /// Absolute offset of the row's top edge within the content.
    pub top: u64,
    pub content: O,
}

/// One render pass: leading spacer, mounted rows in order, trailing spacer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<K, O> {
    pub spacers: Spacers,
    pub item_size: u32,
    pub rows: Vec<Row<K, O>>,
}

impl<K, O> Frame<K, O> {
    pub fn leading_spacer(&self) -> u64 {
        self.spacers.leading
    }

    pub fn trailing_spacer(&self) -> u64 {
        self.spacers.trailing
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The window covered by the mounted rows.
    pub fn window(&self) -> Window {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Window {
                start_index: first.index,
                end_index: last.index + 1,
            },
            _ => Window::EMPTY,
        }
    }

    /// Height of everything rendered: spacers plus mounted rows.
    pub fn total_height(&self) -> u64 {
        self.spacers.total_with(self.window(), self.item_size)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.rows.iter().map(|r| &r.key)
    }
}
