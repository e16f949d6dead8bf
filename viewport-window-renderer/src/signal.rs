use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// The kinds of viewport signals a list subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalKind {
    Scroll,
    Resize,
}

/// A viewport change, carrying the raw CSS pixel value reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    Scroll { offset: f64 },
    Resize { viewport_height: f64 },
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::Scroll { .. } => SignalKind::Scroll,
            Self::Resize { .. } => SignalKind::Resize,
        }
    }
}

/// A signal handler registered with a [`Viewport`].
pub type Listener = Rc<dyn Fn(Signal)>;

/// The disposer returned by [`Viewport::subscribe`].
///
/// Dropping it detaches the listener. Disposal runs at most once.
pub struct Subscription {
    kind: SignalKind,
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(kind: SignalKind, dispose: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.dispose.is_some()
    }

    /// Detaches the listener now instead of at drop time.
    pub fn dispose(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            rtrace!(kind = ?self.kind, "Subscription::dispose");
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("active", &self.is_active())
            .finish()
    }
}

/// The host side of a windowed list: live geometry plus scroll/resize notifications.
pub trait Viewport {
    /// Current viewport height in CSS pixels, or `None` while the host has not laid out yet.
    fn viewport_height(&self) -> Option<f64>;

    /// Current scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Registers `listener` for signals of `kind` until the returned subscription is dropped.
    fn subscribe(&self, kind: SignalKind, listener: Listener) -> Subscription;
}

/// An in-memory [`Viewport`] that dispatches signals synchronously.
///
/// Cloning yields another handle to the same host.
#[derive(Clone, Default)]
pub struct ManualViewport {
    host: Rc<RefCell<Host>>,
}

#[derive(Default)]
struct Host {
    viewport_height: Option<f64>,
    scroll_offset: f64,
    next_id: u64,
    listeners: Vec<(u64, SignalKind, Listener)>,
}

impl ManualViewport {
    /// A host that has not been laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(viewport_height: f64) -> Self {
        let v = Self::new();
        v.host.borrow_mut().viewport_height = Some(viewport_height);
        v
    }

    /// Sets the scroll offset and notifies scroll listeners.
    pub fn scroll_to(&self, offset: f64) {
        self.host.borrow_mut().scroll_offset = offset;
        self.dispatch(Signal::Scroll { offset });
    }

    /// Sets the viewport height and notifies resize listeners.
    pub fn resize(&self, viewport_height: f64) {
        self.host.borrow_mut().viewport_height = Some(viewport_height);
        self.dispatch(Signal::Resize { viewport_height });
    }

    /// Number of live listeners for `kind`.
    pub fn listener_count(&self, kind: SignalKind) -> usize {
        self.host
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }

    fn dispatch(&self, signal: Signal) {
        let kind = signal.kind();
        // Collect first: listeners may subscribe or unsubscribe while running.
        let targets: Vec<Listener> = self
            .host
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, l)| Rc::clone(l))
            .collect();
        for listener in targets {
            listener(signal);
        }
    }
}

impl Viewport for ManualViewport {
    fn viewport_height(&self) -> Option<f64> {
        self.host.borrow().viewport_height
    }

    fn scroll_offset(&self) -> f64 {
        self.host.borrow().scroll_offset
    }

    fn subscribe(&self, kind: SignalKind, listener: Listener) -> Subscription {
        let id = {
            let mut host = self.host.borrow_mut();
            let id = host.next_id;
            host.next_id = id.wrapping_add(1);
            host.listeners.push((id, kind, listener));
            id
        };
        let host: Weak<RefCell<Host>> = Rc::downgrade(&self.host);
        Subscription::new(kind, move || {
            if let Some(host) = host.upgrade() {
                host.borrow_mut().listeners.retain(|(i, _, _)| *i != id);
            }
        })
    }
}

impl fmt::Debug for ManualViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.host.borrow();
        f.debug_struct("ManualViewport")
            .field("viewport_height", &host.viewport_height)
            .field("scroll_offset", &host.scroll_offset)
            .field("listeners", &host.listeners.len())
            .finish()
    }
}
