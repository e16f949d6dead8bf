use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use viewport_window::ViewportMetrics;

use crate::{DirectoryError, Page, Result, page_query};

/// A request for the next page, handed to whatever performs the fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u32,
    pub results: u32,
}

impl PageRequest {
    pub fn query(&self) -> String {
        page_query(self.page, self.results)
    }
}

/// Whether the bottom of the viewport is within `threshold` pixels of the end of the content.
pub fn should_load_more(metrics: ViewportMetrics, content_height: u64, threshold: u32) -> bool {
    metrics.viewport_end().saturating_add(threshold as u64) >= content_height
}

/// The append-only item store behind the list.
///
/// Items are only ever appended, one page at a time, so indexes handed to the renderer stay
/// valid for the whole session. At most one page request is in flight.
#[derive(Clone, Debug)]
pub struct Feed<T> {
    items: Vec<T>,
    page_size: u32,
    next_page: u32,
    in_flight: Option<u32>,
}

impl<T> Feed<T> {
    /// An empty feed that will request pages of `page_size` results, starting at page 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page_size,
            next_page: 1,
            in_flight: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Starts loading the next page, unless a request is already in flight.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if let Some(page) = self.in_flight {
            debug!(page, "page request already in flight");
            return None;
        }
        let request = PageRequest {
            page: self.next_page,
            results: self.page_size,
        };
        self.in_flight = Some(request.page);
        debug!(page = request.page, results = request.results, "requesting page");
        Some(request)
    }

    /// Starts loading the next page if the viewport is near the end of the content.
    pub fn maybe_load_more(
        &mut self,
        metrics: ViewportMetrics,
        content_height: u64,
        threshold: u32,
    ) -> Option<PageRequest> {
        if !should_load_more(metrics, content_height, threshold) {
            return None;
        }
        self.begin_load()
    }

    /// Appends a received page and returns how many items it added.
    pub fn complete(&mut self, page: Page<T>) -> Result<usize> {
        let Some(requested) = self.in_flight.take() else {
            return Err(DirectoryError::NotLoading {
                page: page.info.page,
            });
        };
        let added = page.results.len();
        self.items.extend(page.results);
        self.next_page = requested.saturating_add(1);
        info!(page = requested, added, total = self.items.len(), "page appended");
        Ok(added)
    }

    /// Abandons the in-flight request; the same page is requested again next time.
    pub fn fail(&mut self) {
        if let Some(page) = self.in_flight.take() {
            warn!(page, "page request failed");
        }
    }
}

impl<T: DeserializeOwned> Feed<T> {
    /// Decodes a page response body and appends it.
    ///
    /// A malformed body abandons the in-flight request so the page can be retried.
    pub fn complete_json(&mut self, body: &str) -> Result<usize> {
        match serde_json::from_str::<Page<T>>(body) {
            Ok(page) => self.complete(page),
            Err(err) => {
                warn!(error = %err, "failed to decode page");
                self.fail();
                Err(err.into())
            }
        }
    }
}
