use serde::{Deserialize, Serialize};
use viewport_window::FixedLayout;

use crate::{Feed, Result};

/// Tunables for the directory list.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Height of one user card, in pixels.
    pub item_size: u32,
    /// Results requested per page.
    pub page_size: u32,
    /// Distance from the bottom of the content at which the next page is requested.
    pub load_more_threshold: u32,
    /// Rows rendered beyond each viewport edge.
    pub overscan: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            item_size: 200,
            page_size: 20,
            load_more_threshold: 100,
            overscan: 1,
        }
    }
}

impl DirectoryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The list layout for this configuration. Fails on a zero `item_size`.
    pub fn layout(&self) -> Result<FixedLayout> {
        Ok(FixedLayout::new(self.item_size)?.with_overscan(self.overscan))
    }

    pub fn feed<T>(&self) -> Feed<T> {
        Feed::new(self.page_size)
    }
}
