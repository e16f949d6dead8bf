use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use viewport_window::{Align, ConfigError, FixedLayout, Spacers, ViewportMetrics, Window};

use crate::{Frame, ListState, Listener, Phase, RenderItem, Row, RowKey, Signal, SignalKind};
use crate::{Subscription, Viewport};

struct Shared {
    layout: Cell<FixedLayout>,
    state: Cell<ListState>,
}

impl Shared {
    fn update<R>(&self, f: impl FnOnce(&mut ListState, &FixedLayout) -> R) -> R {
        let layout = self.layout.get();
        let mut state = self.state.get();
        let out = f(&mut state, &layout);
        self.state.set(state);
        out
    }
}

/// A mounted, scroll-virtualized list of fixed-height rows.
///
/// The list holds exactly one scroll and one resize subscription for as long as it lives. They
/// are released when the list is dropped (or [`WindowedList::unmount`] is called), including when
/// a render callback panics.
///
/// Items are not owned: pass the current slice to [`WindowedList::render`] each time. The slice
/// may grow between renders; the window is re-derived from the new length.
pub struct WindowedList {
    shared: Rc<Shared>,
    subscriptions: Vec<Subscription>,
}

impl WindowedList {
    /// Subscribes to `viewport` and computes the initial window.
    ///
    /// If the viewport has not been laid out yet, the list starts [`Phase::Uninitialized`] and
    /// becomes ready on the first resize signal (or [`Self::remeasure`]). A measured but invalid
    /// height is returned as an error and nothing stays subscribed.
    pub fn mount<V: Viewport + ?Sized>(
        viewport: &V,
        layout: FixedLayout,
    ) -> Result<Self, ConfigError> {
        rdebug!(
            item_size = layout.item_size(),
            overscan = layout.overscan(),
            "WindowedList::mount"
        );
        let shared = Rc::new(Shared {
            layout: Cell::new(layout),
            state: Cell::new(ListState::default()),
        });
        let subscriptions = [SignalKind::Scroll, SignalKind::Resize]
            .into_iter()
            .map(|kind| viewport.subscribe(kind, listener(&shared)))
            .collect();
        let list = Self {
            shared,
            subscriptions,
        };
        list.remeasure(viewport)?;
        Ok(list)
    }

    /// Reads the viewport's current geometry and recomputes the window.
    ///
    /// Returns the resulting phase: `Uninitialized` if the viewport still cannot be measured.
    pub fn remeasure<V: Viewport + ?Sized>(&self, viewport: &V) -> Result<Phase, ConfigError> {
        let scroll_offset = ViewportMetrics::scroll_offset_from_css_px(viewport.scroll_offset());
        let Some(raw_height) = viewport.viewport_height() else {
            rdebug!("viewport not measured yet; deferring first window");
            self.shared.update(|s, _| s.defer_measurement(scroll_offset));
            return Ok(Phase::Uninitialized);
        };
        let viewport_height = ViewportMetrics::viewport_height_from_css_px(raw_height)?;
        let metrics = ViewportMetrics::new(scroll_offset, viewport_height);
        self.shared.update(|s, layout| s.measured(metrics, layout));
        Ok(Phase::Ready)
    }

    pub fn layout(&self) -> FixedLayout {
        self.shared.layout.get()
    }

    /// Replaces the row height / overscan and recomputes the window.
    pub fn set_layout(&self, layout: FixedLayout) {
        self.shared.layout.set(layout);
        self.shared.update(|s, layout| s.recompute(layout));
    }

    pub fn state(&self) -> ListState {
        self.shared.state.get()
    }

    pub fn phase(&self) -> Phase {
        self.state().phase()
    }

    pub fn window(&self) -> Window {
        self.state().window()
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.state().metrics()
    }

    pub fn revision(&self) -> u64 {
        self.state().revision()
    }

    pub fn spacers(&self) -> Spacers {
        self.state().spacers(&self.layout())
    }

    /// Returns whether the window changed since the last call, and clears the flag.
    ///
    /// Hosts can call this after a signal to skip re-rendering when nothing moved.
    pub fn take_changed(&self) -> bool {
        self.shared.update(|s, _| s.take_changed())
    }

    /// Tells the list how many items exist without rendering.
    pub fn set_item_count(&self, item_count: usize) {
        self.shared.update(|s, layout| s.set_item_count(item_count, layout));
    }

    /// The scroll offset that brings `index` into view, for hosts that scroll programmatically.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let state = self.state();
        self.layout()
            .scroll_to_index_offset(index, align, state.metrics(), state.item_count())
    }

    /// Renders the current window of `items`, keyed by absolute index.
    pub fn render<T, R>(
        &self,
        items: &[T],
        renderer: &mut R,
    ) -> Result<Frame<usize, R::Output>, ConfigError>
    where
        R: RenderItem<T>,
    {
        self.render_keyed(items, |_, index| index, renderer)
    }

    /// Renders the current window of `items` with caller-supplied stable keys.
    ///
    /// Fails if the host last reported an invalid viewport height.
    pub fn render_keyed<T, K, R>(
        &self,
        items: &[T],
        mut key: impl FnMut(&T, usize) -> K,
        renderer: &mut R,
    ) -> Result<Frame<K, R::Output>, ConfigError>
    where
        K: RowKey,
        R: RenderItem<T>,
    {
        let layout = self.layout();
        let state = self.shared.update(|s, layout| {
            s.set_item_count(items.len(), layout);
            *s
        });
        if let Some(err) = state.fault() {
            rwarn!(error = %err, "render rejected");
            return Err(err);
        }

        let window = state.window();
        let item_size = layout.item_size();
        let mut rows = Vec::with_capacity(window.len());
        for index in window.indices() {
            let Some(item) = items.get(index) else {
                break;
            };
            rows.push(Row {
                key: key(item, index),
                index,
                top: (index as u64).saturating_mul(item_size as u64),
                content: renderer.render(item, index),
            });
        }
        rtrace!(
            start = window.start_index,
            end = window.end_index,
            item_count = items.len(),
            "render"
        );

        Ok(Frame {
            spacers: layout.spacers(window, items.len()),
            item_size,
            rows,
        })
    }

    /// Releases the signal subscriptions now. Dropping the list has the same effect.
    pub fn unmount(mut self) {
        rdebug!(
            subscriptions = self.subscriptions.len(),
            "WindowedList::unmount"
        );
        for sub in &mut self.subscriptions {
            sub.dispose();
        }
    }
}

fn listener(shared: &Rc<Shared>) -> Listener {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    Rc::new(move |signal: Signal| {
        if let Some(shared) = weak.upgrade() {
            shared.update(|s, layout| s.apply(signal, layout));
        }
    })
}

impl fmt::Debug for WindowedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedList")
            .field("layout", &self.layout())
            .field("state", &self.state())
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}
