//! Per-instance shimmer configuration.
//!
//! A [`ShimmerConfig`] is immutable once built; live updates go through
//! [`crate::shimmer::Shimmer::configure`] with a freshly built config, which
//! keeps every reconfiguration atomic with respect to a tick boundary.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::anim::{Easing, ShimmerController};
use crate::paint::{Color, GradientSpec};
use crate::raster::CompositeMode;
use crate::sweep::Direction;

/// Configuration rejected at construction time.
///
/// These are caller programming errors, surfaced fail-fast rather than
/// clamped; everything else in the core degrades silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("static percent must be within [0, 1], got {0}")]
    StaticPercentOutOfRange(f32),
    #[error("animation period must be greater than zero")]
    ZeroPeriod,
    #[error("gradient is not usable: need at least 2 finite, ordered stops in [0, 1]")]
    InvalidGradient,
}

/// Completion callback for finite runs. Invoked at most once per run.
pub type CompletionCallback = Rc<dyn Fn()>;

/// Immutable configuration for one shimmer instance.
///
/// Built through [`ShimmerConfigBuilder`]; every field is independently
/// settable there and live-updatable via `Shimmer::configure` without
/// recreating the instance.
#[derive(Clone)]
pub struct ShimmerConfig {
    pub(crate) gradient: GradientSpec,
    pub(crate) direction: Direction,
    pub(crate) period: Duration,
    pub(crate) loop_count: u32,
    pub(crate) bounce: bool,
    pub(crate) enabled: bool,
    pub(crate) controller: Option<ShimmerController>,
    pub(crate) easing: Easing,
    pub(crate) composite: CompositeMode,
    pub(crate) respect_reduced_motion: bool,
    pub(crate) static_percent: f32,
    pub(crate) repaint_isolation: bool,
    pub(crate) on_complete: Option<CompletionCallback>,
}

impl ShimmerConfig {
    /// Starts a builder from a gradient. Defaults: left-to-right, 1 s period,
    /// infinite loop, no bounce, enabled, linear easing, replace-color
    /// compositing, reduced motion not honored, static percent 0.5.
    pub fn builder(gradient: GradientSpec) -> ShimmerConfigBuilder {
        ShimmerConfigBuilder {
            config: ShimmerConfig {
                gradient,
                direction: Direction::LeftToRight,
                period: Duration::from_millis(1000),
                loop_count: 0,
                bounce: false,
                enabled: true,
                controller: None,
                easing: Easing::Linear,
                composite: CompositeMode::ReplaceColor,
                respect_reduced_motion: false,
                static_percent: 0.5,
                repaint_isolation: false,
                on_complete: None,
            },
        }
    }

    /// Builder for the canonical two-color sweep: `[base, base, highlight,
    /// base, base]` at stops `[0, 0.35, 0.5, 0.65, 1]`, oriented along the
    /// direction's gradient anchors.
    pub fn from_colors(base: Color, highlight: Color, direction: Direction) -> ShimmerConfigBuilder {
        let (begin, end) = direction.gradient_anchors();
        Self::builder(GradientSpec::sweep_between(base, highlight, begin, end)).direction(direction)
    }

    // ── read surface ──────────────────────────────────────────────────────

    #[inline]
    pub fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// 0 = infinite; any positive value is a finite forward run count.
    #[inline]
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    #[inline]
    pub fn bounce(&self) -> bool {
        self.bounce
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn controller(&self) -> Option<&ShimmerController> {
        self.controller.as_ref()
    }

    #[inline]
    pub fn composite(&self) -> CompositeMode {
        self.composite
    }

    #[inline]
    pub fn respect_reduced_motion(&self) -> bool {
        self.respect_reduced_motion
    }

    #[inline]
    pub fn static_percent(&self) -> f32 {
        self.static_percent
    }

    #[inline]
    pub fn repaint_isolation(&self) -> bool {
        self.repaint_isolation
    }
}

impl fmt::Debug for ShimmerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShimmerConfig")
            .field("direction", &self.direction)
            .field("period", &self.period)
            .field("loop_count", &self.loop_count)
            .field("bounce", &self.bounce)
            .field("enabled", &self.enabled)
            .field("controller", &self.controller.is_some())
            .field("easing", &self.easing)
            .field("composite", &self.composite)
            .field("respect_reduced_motion", &self.respect_reduced_motion)
            .field("static_percent", &self.static_percent)
            .field("repaint_isolation", &self.repaint_isolation)
            .field("on_complete", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder with single-line setters; `build` validates.
#[derive(Debug, Clone)]
pub struct ShimmerConfigBuilder {
    config: ShimmerConfig,
}

impl ShimmerConfigBuilder {
    pub fn direction(mut self, v: Direction) -> Self { self.config.direction = v; self }
    pub fn period(mut self, v: Duration) -> Self { self.config.period = v; self }
    pub fn loop_count(mut self, v: u32) -> Self { self.config.loop_count = v; self }
    pub fn bounce(mut self, v: bool) -> Self { self.config.bounce = v; self }
    pub fn enabled(mut self, v: bool) -> Self { self.config.enabled = v; self }
    pub fn controller(mut self, v: Option<ShimmerController>) -> Self { self.config.controller = v; self }
    pub fn easing(mut self, v: Easing) -> Self { self.config.easing = v; self }
    pub fn composite(mut self, v: CompositeMode) -> Self { self.config.composite = v; self }
    pub fn respect_reduced_motion(mut self, v: bool) -> Self { self.config.respect_reduced_motion = v; self }
    pub fn static_percent(mut self, v: f32) -> Self { self.config.static_percent = v; self }
    pub fn repaint_isolation(mut self, v: bool) -> Self { self.config.repaint_isolation = v; self }
    pub fn on_complete(mut self, v: CompletionCallback) -> Self { self.config.on_complete = Some(v); self }

    /// Validates and produces the config.
    pub fn build(self) -> Result<ShimmerConfig, ConfigError> {
        let c = self.config;
        if !(0.0..=1.0).contains(&c.static_percent) || !c.static_percent.is_finite() {
            return Err(ConfigError::StaticPercentOutOfRange(c.static_percent));
        }
        if c.period.is_zero() {
            return Err(ConfigError::ZeroPeriod);
        }
        if !c.gradient.is_valid() {
            return Err(ConfigError::InvalidGradient);
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ShimmerConfigBuilder {
        ShimmerConfig::from_colors(
            Color::from_rgba8(40, 40, 40, 255),
            Color::from_rgba8(200, 200, 200, 255),
            Direction::LeftToRight,
        )
    }

    #[test]
    fn defaults_build() {
        let c = base_builder().build().unwrap();
        assert_eq!(c.loop_count(), 0);
        assert!(!c.bounce());
        assert!(c.enabled());
        assert_eq!(c.period(), Duration::from_millis(1000));
        assert_eq!(c.composite(), CompositeMode::ReplaceColor);
    }

    #[test]
    fn static_percent_out_of_range_is_rejected() {
        let err = base_builder().static_percent(1.5).build().unwrap_err();
        assert!(matches!(err, ConfigError::StaticPercentOutOfRange(_)));

        let err = base_builder().static_percent(-0.1).build().unwrap_err();
        assert!(matches!(err, ConfigError::StaticPercentOutOfRange(_)));
    }

    #[test]
    fn static_percent_boundaries_are_accepted() {
        assert!(base_builder().static_percent(0.0).build().is_ok());
        assert!(base_builder().static_percent(1.0).build().is_ok());
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = base_builder().period(Duration::ZERO).build().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPeriod));
    }

    #[test]
    fn invalid_gradient_is_rejected() {
        use crate::paint::{Anchor, ColorStop};
        let c = Color::from_rgba8(255, 255, 255, 255);
        let bad = GradientSpec::linear(
            Anchor::Unit(0.0, 0.5),
            Anchor::Unit(1.0, 0.5),
            vec![ColorStop::new(0.0, c)],
        );
        let err = ShimmerConfig::builder(bad).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGradient));
    }

    #[test]
    fn from_colors_orients_along_direction() {
        use crate::paint::{Anchor, GradientKind};
        let c = ShimmerConfig::from_colors(
            Color::from_rgba8(0, 0, 0, 255),
            Color::from_rgba8(255, 255, 255, 255),
            Direction::TopToBottom,
        )
        .build()
        .unwrap();
        match c.gradient().kind {
            GradientKind::Linear { begin, end } => {
                assert_eq!(begin, Anchor::Unit(0.5, 0.0));
                assert_eq!(end, Anchor::Unit(0.5, 1.0));
            }
            _ => panic!("expected linear gradient"),
        }
    }
}
