//! Gradient resolution and point sampling.
//!
//! A [`GradientSpec`] is declarative; resolving it against a concrete sample
//! rect and text direction produces a [`ResolvedGradient`], a pure point→color
//! function. Resolution is cheap but not free (anchor math, stop scan), so
//! per-instance callers go through [`SamplerCache`], which re-resolves only
//! when the rect, the gradient spec, or the text direction actually changed.

use crate::coords::{Rect, Vec2};

use super::gradient::{ColorStop, GradientKind, GradientSpec, SpreadMode, TextDirection};
use super::Color;

// ── resolved gradient ─────────────────────────────────────────────────────

/// Resolved gradient geometry in shape-local pixel space.
#[derive(Debug, Clone, PartialEq)]
enum Geometry {
    /// Linear axis: parameter is the projection of the point onto `axis`,
    /// normalized so `base` maps to 0 and `base + axis` maps to 1.
    Axis { base: Vec2, axis: Vec2, inv_len_sq: f32 },
    /// Radial: parameter is distance from `center` over the radius.
    Radial { center: Vec2, inv_radius: f32 },
    /// Sweep: parameter is the angle fraction within [start, start + span].
    Sweep { center: Vec2, start: f32, inv_span: f32 },
    /// Degenerate geometry: every point samples the first stop.
    Solid,
}

/// A gradient resolved over a concrete rect: a pure point→color function.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGradient {
    geometry: Geometry,
    stops: Vec<ColorStop>,
    spread: SpreadMode,
}

impl ResolvedGradient {
    /// Resolves `spec` over `rect`.
    ///
    /// Degenerate inputs (empty rect, zero-length axis, zero radius or angle
    /// span, fewer than two stops) resolve to a solid fill of the first stop
    /// color rather than an error.
    pub fn resolve(spec: &GradientSpec, rect: Rect, dir: TextDirection) -> Self {
        let stops = spec.stops.clone();

        if rect.is_empty() || stops.len() < 2 {
            log::debug!("gradient resolve: degenerate input, sampling as solid");
            return Self { geometry: Geometry::Solid, stops, spread: spec.spread };
        }

        let geometry = match spec.kind {
            GradientKind::Linear { begin, end } => {
                let b = begin.resolve(dir, rect);
                let e = end.resolve(dir, rect);
                let axis = e - b;
                let len_sq = axis.length_sq();
                if len_sq <= f32::EPSILON {
                    log::debug!("gradient resolve: zero-length axis, sampling as solid");
                    Geometry::Solid
                } else {
                    Geometry::Axis { base: b, axis, inv_len_sq: 1.0 / len_sq }
                }
            }
            GradientKind::Radial { center, radius } => {
                let c = center.resolve(dir, rect);
                let r = radius * rect.size.x.min(rect.size.y);
                if r <= f32::EPSILON {
                    Geometry::Solid
                } else {
                    Geometry::Radial { center: c, inv_radius: 1.0 / r }
                }
            }
            GradientKind::Sweep { center, start_angle, end_angle } => {
                let c = center.resolve(dir, rect);
                let span = end_angle - start_angle;
                if span.abs() <= f32::EPSILON {
                    Geometry::Solid
                } else {
                    Geometry::Sweep { center: c, start: start_angle, inv_span: 1.0 / span }
                }
            }
        };

        Self { geometry, stops, spread: spec.spread }
    }

    /// Samples the gradient color at a point in shape-local space.
    pub fn sample(&self, p: Vec2) -> Color {
        let t = match self.geometry {
            Geometry::Axis { base, axis, inv_len_sq } => (p - base).dot(axis) * inv_len_sq,
            Geometry::Radial { center, inv_radius } => {
                (p - center).length_sq().sqrt() * inv_radius
            }
            Geometry::Sweep { center, start, inv_span } => {
                let d = p - center;
                (d.y.atan2(d.x) - start) * inv_span
            }
            Geometry::Solid => return self.stops.first().map_or(Color::transparent(), |s| s.color),
        };
        self.color_at(self.apply_spread(t))
    }

    #[inline]
    fn apply_spread(&self, t: f32) -> f32 {
        match self.spread {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let u = t.rem_euclid(2.0);
                if u > 1.0 { 2.0 - u } else { u }
            }
        }
    }

    fn color_at(&self, t: f32) -> Color {
        // Stops are validated nondecreasing at config build time; out-of-range
        // parameters clamp to the edge stops.
        let first = match self.stops.first() {
            Some(s) => s,
            None => return Color::transparent(),
        };
        if t <= first.t {
            return first.color;
        }
        let last = self.stops[self.stops.len() - 1];
        if t >= last.t {
            return last.color;
        }

        for w in self.stops.windows(2) {
            let (s0, s1) = (w[0], w[1]);
            if t <= s1.t {
                let span = s1.t - s0.t;
                if span <= f32::EPSILON {
                    return s1.color;
                }
                return s0.color.lerp(s1.color, (t - s0.t) / span);
            }
        }
        last.color
    }
}

// ── cache ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    rect: Rect,
    spec: GradientSpec,
    dir: TextDirection,
}

/// Per-instance resolution cache.
///
/// Keyed by (rect, gradient, text direction); any change to a key component
/// re-resolves, so a cached sampler is never stale. Not shared across
/// instances.
#[derive(Debug, Default)]
pub struct SamplerCache {
    entry: Option<(CacheKey, ResolvedGradient)>,
}

impl SamplerCache {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the resolved gradient for the key, re-resolving on any change.
    pub fn resolve(
        &mut self,
        spec: &GradientSpec,
        rect: Rect,
        dir: TextDirection,
    ) -> &ResolvedGradient {
        let stale = match &self.entry {
            Some((key, _)) => key.rect != rect || key.dir != dir || key.spec != *spec,
            None => true,
        };
        if stale {
            log::trace!("sampler cache miss: re-resolving gradient over {rect:?}");
            let key = CacheKey { rect, spec: spec.clone(), dir };
            let resolved = ResolvedGradient::resolve(spec, rect, dir);
            self.entry = Some((key, resolved));
        }
        &self.entry.as_ref().expect("entry populated above").1
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
