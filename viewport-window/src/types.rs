use core::ops::Range;

/// Where a row should land when scrolling to it programmatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset if the row is fully visible, otherwise scroll the least amount.
    Auto,
}

/// A contiguous run of row indexes to mount.
///
/// Non-empty windows satisfy `start_index < end_index <= item_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl Window {
    /// The window of an empty list: nothing mounted, zero-height spacers.
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// The inclusive last index, or `None` for an empty window.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// Heights of the placeholder blocks rendered before and after the mounted rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacers {
    pub leading: u64,
    pub trailing: u64,
}

impl Spacers {
    pub const ZERO: Self = Self {
        leading: 0,
        trailing: 0,
    };

    /// Total rendered height: both spacers plus the mounted rows of `window`.
    pub fn total_with(&self, window: Window, item_size: u32) -> u64 {
        let rows = (window.len() as u64).saturating_mul(item_size as u64);
        self.leading.saturating_add(rows).saturating_add(self.trailing)
    }
}
