//! One shimmer instance: a configured animation + compositing session bound
//! to one shape.
//!
//! Host contract (any reactive or immediate-mode host can adapt):
//! - call [`Shimmer::configure`] when configuration changes
//! - call [`Shimmer::tick`] once per frame while running
//! - call [`Shimmer::paint`] to produce the frame's pixels
//! - call [`Shimmer::teardown`] (or drop) on unmount
//!
//! The host also forwards the system reduced-motion signal through
//! [`Shimmer::set_reduced_motion`] whenever it changes.

use std::cell::Cell;
use std::rc::Rc;

use crate::anim::controller::Observer;
use crate::anim::{AnimationDriver, Phase};
use crate::config::ShimmerConfig;
use crate::coords::Vec2;
use crate::paint::{Color, SamplerCache, TextDirection};
use crate::raster::{composite, AlphaMask, Pixmap};
use crate::sweep::{self, Direction};

/// A shimmer session: owns its animation state and sampler cache, observes
/// (never owns) an optional shared controller.
pub struct Shimmer {
    driver: AnimationDriver,
    cache: SamplerCache,
    text_direction: TextDirection,
    repaint_requested: Rc<Cell<bool>>,
    // Keep-alive for the weak controller registration; dropping it is the
    // synchronous detach.
    subscription: Option<Observer>,
}

impl Shimmer {
    pub fn new(config: ShimmerConfig) -> Self {
        let mut shimmer = Self {
            driver: AnimationDriver::new(config),
            cache: SamplerCache::new(),
            text_direction: TextDirection::default(),
            repaint_requested: Rc::new(Cell::new(false)),
            subscription: None,
        };
        shimmer.attach_controller();
        shimmer
    }

    /// The canonical two-color shimmer with default timing.
    pub fn from_colors(base: Color, highlight: Color, direction: Direction) -> Self {
        let config = ShimmerConfig::from_colors(base, highlight, direction)
            .build()
            .expect("default two-color config is valid by construction");
        Self::new(config)
    }

    /// Applies a new configuration, atomic with respect to tick boundaries:
    /// the next tick and paint see the whole new config or none of it.
    ///
    /// A controller change rewires the observation: the old subscription is
    /// dropped before the new one is registered.
    pub fn configure(&mut self, config: ShimmerConfig) {
        let rewire = match (self.driver.config().controller(), config.controller()) {
            (None, None) => false,
            (Some(old), Some(new)) => !old.same_controller(new),
            _ => true,
        };
        self.driver.reconfigure(config);
        if rewire {
            self.attach_controller();
        }
    }

    #[inline]
    pub fn config(&self) -> &ShimmerConfig {
        self.driver.config()
    }

    /// Sets the inherited layout direction used to resolve direction-relative
    /// gradient anchors. Defaults to left-to-right.
    pub fn set_text_direction(&mut self, dir: TextDirection) {
        self.text_direction = dir;
    }

    /// Forwards the system reduced-motion signal.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.driver.set_reduced_motion(reduced);
    }

    // ── frame loop ────────────────────────────────────────────────────────

    /// Advances the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.driver.tick(dt);
    }

    /// Produces this frame's pixels for the given source.
    ///
    /// Returns `None` when the source has zero area (nothing to render).
    pub fn paint(&mut self, source: &Pixmap) -> Option<Pixmap> {
        if source.is_empty() {
            return None;
        }
        let size = Vec2::new(source.width() as f32, source.height() as f32);
        let progress = self.driver.render_progress();
        let config = self.driver.config();
        let rect = sweep::sample_rect(size, config.direction, progress)?;
        let gradient = self.cache.resolve(&config.gradient, rect, self.text_direction);
        composite(source, gradient, config.composite)
    }

    /// Paints directly over a coverage mask, as supplied by a shape provider.
    pub fn paint_mask(&mut self, mask: &AlphaMask) -> Option<Pixmap> {
        let source = Pixmap::from_mask(mask, Color::from_straight(1.0, 1.0, 1.0, 1.0));
        self.paint(&source)
    }

    /// True when the host should schedule a repaint of this instance.
    ///
    /// A controller notification always raises the request. With the
    /// repaint-isolation opt-in, an advancing driver raises it too: isolated
    /// instances repaint on their own schedule instead of riding the host's
    /// full-tree repaint.
    pub fn take_repaint_request(&mut self) -> bool {
        let notified = self.repaint_requested.replace(false);
        if self.driver.config().repaint_isolation {
            notified || self.driver.is_animating()
        } else {
            notified
        }
    }

    // ── imperative handle ─────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn reset(&mut self) {
        self.driver.reset();
    }

    /// Raw stored progress in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    /// Synchronously detaches the controller subscription and drops cached
    /// sampler state. After this, no notification can reach the instance.
    /// Dropping the instance has the same effect.
    pub fn teardown(&mut self) {
        self.subscription = None;
        self.cache.clear();
    }

    fn attach_controller(&mut self) {
        self.subscription = None;
        if let Some(ctl) = self.driver.config().controller() {
            let flag = self.repaint_requested.clone();
            let observer: Observer = Rc::new(move |_| flag.set(true));
            ctl.subscribe(&observer);
            self.subscription = Some(observer);
        }
    }
}

impl std::fmt::Debug for Shimmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shimmer")
            .field("driver", &self.driver)
            .field("text_direction", &self.text_direction)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
