use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Observer callback, invoked synchronously with the new `is_animating` value.
///
/// Registration is weak: the controller never keeps an observer alive. Keep
/// the `Rc` for as long as notifications should be received; dropping it is
/// the unsubscribe.
pub type Observer = Rc<dyn Fn(bool)>;

/// Shared on/off switch for one or more shimmer instances.
///
/// Semantics:
/// - Cloning shares the same underlying flag (many handles, one state).
/// - `dispose()` is permanent; every later mutator is a silent no-op, so
///   fire-and-forget callers need not track the controller's lifetime.
/// - Observers are notified synchronously on state changes and must
///   defensively re-check state: notification and disposal may interleave.
#[derive(Debug, Clone, Default)]
pub struct ShimmerController {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    animating: Cell<bool>,
    disposed: Cell<bool>,
    observers: RefCell<Vec<Weak<dyn Fn(bool)>>>,
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inner")
            .field("animating", &self.animating.get())
            .field("disposed", &self.disposed.get())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl ShimmerController {
    /// Creates a controller in the stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller that is already running.
    pub fn started() -> Self {
        let c = Self::new();
        c.inner.animating.set(true);
        c
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.inner.animating.get()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Starts animating. No-op if disposed or already running.
    pub fn start(&self) {
        self.set_animating(true);
    }

    /// Stops animating. No-op if disposed or already stopped.
    pub fn stop(&self) {
        self.set_animating(false);
    }

    /// Starts if stopped, stops if running. No-op if disposed.
    pub fn toggle(&self) {
        self.set_animating(!self.inner.animating.get());
    }

    /// Permanently retires the controller.
    ///
    /// Subsequent `start`/`stop`/`toggle` calls are silent no-ops; attached
    /// drivers observe a disposed controller as "not animating".
    pub fn dispose(&self) {
        if !self.inner.disposed.replace(true) {
            log::debug!("shimmer controller disposed");
        }
    }

    /// Registers an observer weakly. The caller keeps the returned-strength
    /// `Rc`; the subscription ends when it is dropped.
    pub fn subscribe(&self, observer: &Observer) {
        self.inner
            .observers
            .borrow_mut()
            .push(Rc::downgrade(observer));
    }

    /// True when the instances attached to this controller should advance.
    #[inline]
    pub fn drives_animation(&self) -> bool {
        !self.is_disposed() && self.is_animating()
    }

    /// Identity comparison: do two handles share one underlying flag?
    #[inline]
    pub fn same_controller(&self, other: &ShimmerController) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn set_animating(&self, value: bool) {
        if self.inner.disposed.get() {
            return;
        }
        if self.inner.animating.replace(value) == value {
            return;
        }
        log::trace!("shimmer controller -> animating={value}");
        self.notify(value);
    }

    fn notify(&self, value: bool) {
        // Snapshot live observers before invoking anything: a callback may
        // subscribe, dispose, or drop subscriptions re-entrantly, and the
        // observer list must not be borrowed while it runs.
        let live: Vec<Observer> = {
            let mut observers = self.inner.observers.borrow_mut();
            observers.retain(|w| w.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for obs in live {
            obs(value);
        }
    }
}
