use crate::coords::{Rect, Vec2};

use super::Color;

/// Gradient spread behavior outside the [0, 1] parameter range.
///
/// `Repeat` is the reference mode for shimmer sweeps: the seamless-loop
/// guarantee in [`crate::sweep`] holds only under repeat tiling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and nondecreasing across the stop list;
/// [`GradientSpec::is_valid`] checks both.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Inherited layout direction, used only to resolve `Anchor::Leading`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Unit-square anchor for a gradient axis endpoint.
///
/// `(0, 0)` is the rect's top-left, `(1, 1)` its bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Anchor {
    /// Fixed point, independent of layout direction.
    Unit(f32, f32),
    /// Horizontal component measured from the leading edge; the x coordinate
    /// flips under RTL layout.
    Leading(f32, f32),
}

impl Anchor {
    /// Resolves the anchor to a point inside `rect`.
    #[inline]
    pub fn resolve(self, dir: TextDirection, rect: Rect) -> Vec2 {
        let (ux, uy) = match self {
            Anchor::Unit(x, y) => (x, y),
            Anchor::Leading(x, y) => match dir {
                TextDirection::Ltr => (x, y),
                TextDirection::Rtl => (1.0 - x, y),
            },
        };
        Vec2::new(
            rect.origin.x + rect.size.x * ux,
            rect.origin.y + rect.size.y * uy,
        )
    }
}

/// Gradient geometry.
///
/// Only `Linear` carries correctness guarantees; `Radial` and `Sweep` are
/// accepted and sampled best-effort.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientKind {
    Linear {
        begin: Anchor,
        end: Anchor,
    },
    Radial {
        center: Anchor,
        /// Radius as a fraction of the rect's shorter extent.
        radius: f32,
    },
    Sweep {
        center: Anchor,
        /// Angle range in radians; the gradient parameter spans it once.
        start_angle: f32,
        end_angle: f32,
    },
}

/// Gradient definition: geometry kind, ordered stops, spread behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl GradientSpec {
    pub fn linear(begin: Anchor, end: Anchor, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: GradientKind::Linear { begin, end },
            stops,
            spread: SpreadMode::Repeat,
        }
    }

    /// The canonical two-color sweep: a highlight band over a base color.
    ///
    /// The stop layout is fixed at `[0, 0.35, 0.5, 0.65, 1]` with colors
    /// `[base, base, highlight, base, base]`; it determines the visual width
    /// of the highlight band and is relied on by downstream callers.
    pub fn sweep_between(base: Color, highlight: Color, begin: Anchor, end: Anchor) -> Self {
        Self::linear(
            begin,
            end,
            vec![
                ColorStop::new(0.0, base),
                ColorStop::new(0.35, base),
                ColorStop::new(0.5, highlight),
                ColorStop::new(0.65, base),
                ColorStop::new(1.0, base),
            ],
        )
    }

    /// Returns true when the definition is structurally usable: at least two
    /// stops, each `t` finite, inside [0, 1] and nondecreasing, all colors
    /// finite.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self
                .stops
                .iter()
                .all(|s| s.t.is_finite() && (0.0..=1.0).contains(&s.t) && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_between_stop_layout() {
        let base = Color::from_straight(0.2, 0.2, 0.2, 1.0);
        let hi = Color::from_straight(0.9, 0.9, 0.9, 1.0);
        let g = GradientSpec::sweep_between(base, hi, Anchor::Unit(0.0, 0.5), Anchor::Unit(1.0, 0.5));

        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.35, 0.5, 0.65, 1.0]);

        let colors: Vec<Color> = g.stops.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![base, base, hi, base, base]);
        assert_eq!(g.spread, SpreadMode::Repeat);
        assert!(g.is_valid());
    }

    #[test]
    fn leading_anchor_flips_under_rtl() {
        let rect = Rect::from_size(10.0, 4.0);
        let a = Anchor::Leading(0.0, 0.5);
        assert_eq!(a.resolve(TextDirection::Ltr, rect), Vec2::new(0.0, 2.0));
        assert_eq!(a.resolve(TextDirection::Rtl, rect), Vec2::new(10.0, 2.0));
    }

    #[test]
    fn unit_anchor_ignores_text_direction() {
        let rect = Rect::new(-30.0, 0.0, 30.0, 10.0);
        let a = Anchor::Unit(1.0, 0.0);
        assert_eq!(a.resolve(TextDirection::Ltr, rect), Vec2::new(0.0, 0.0));
        assert_eq!(a.resolve(TextDirection::Rtl, rect), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn invalid_when_stops_unsorted() {
        let c = Color::from_straight(1.0, 1.0, 1.0, 1.0);
        let g = GradientSpec::linear(
            Anchor::Unit(0.0, 0.5),
            Anchor::Unit(1.0, 0.5),
            vec![ColorStop::new(0.8, c), ColorStop::new(0.2, c)],
        );
        assert!(!g.is_valid());
    }

    #[test]
    fn invalid_when_single_stop() {
        let c = Color::from_straight(1.0, 1.0, 1.0, 1.0);
        let g = GradientSpec::linear(
            Anchor::Unit(0.0, 0.5),
            Anchor::Unit(1.0, 0.5),
            vec![ColorStop::new(0.0, c)],
        );
        assert!(!g.is_valid());
    }
}
