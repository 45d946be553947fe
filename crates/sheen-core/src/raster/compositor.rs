//! The per-pixel compositing step.
//!
//! The reference rule is "replace color, preserve alpha": for every pixel,
//! the output keeps the source's alpha and takes its color from the gradient
//! sample at that position. Pixels the source does not cover stay fully
//! transparent, so the gradient never bleeds outside the silhouette.

use crate::coords::Vec2;
use crate::paint::{Color, ResolvedGradient};

use super::pixmap::{Pixmap, Rgba8};

/// Pixel-combination rule between the sampled gradient and the source.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CompositeMode {
    /// `out.alpha = source.alpha; out.color = sample(position)`. The
    /// reference behavior; the gradient's own alpha is ignored.
    #[default]
    ReplaceColor,
    /// Source-atop: the gradient is drawn only where the source covers, with
    /// the gradient's alpha blending over the source color.
    SrcAtop,
    /// Source-over: the gradient over the source, including outside the
    /// silhouette where the gradient has alpha of its own.
    SrcOver,
}

/// Composites `gradient` over `source` into a fresh pixmap.
///
/// Samples at pixel centers in the source's local space (the same space the
/// sweep rect lives in). Returns `None` when the source has zero area:
/// nothing to paint, no layer produced.
pub fn composite(
    source: &Pixmap,
    gradient: &ResolvedGradient,
    mode: CompositeMode,
) -> Option<Pixmap> {
    if source.is_empty() {
        log::debug!("composite: zero-area source, skipping");
        return None;
    }

    let mut out = Pixmap::new(source.width(), source.height());
    for y in 0..source.height() {
        for x in 0..source.width() {
            let d = source.pixel(x, y).to_color();
            if mode != CompositeMode::SrcOver && d.a <= 0.0 {
                // Outside the silhouette: stays fully transparent.
                continue;
            }
            let s = gradient.sample(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
            out.set_pixel(x, y, Rgba8::from_color(blend(mode, s, d)));
        }
    }
    Some(out)
}

#[inline]
fn blend(mode: CompositeMode, s: Color, d: Color) -> Color {
    match mode {
        CompositeMode::ReplaceColor => {
            let (r, g, b, _) = s.to_straight();
            Color::from_premul(r * d.a, g * d.a, b * d.a, d.a)
        }
        // Premultiplied Porter-Duff terms.
        CompositeMode::SrcAtop => Color::from_premul(
            s.r * d.a + d.r * (1.0 - s.a),
            s.g * d.a + d.g * (1.0 - s.a),
            s.b * d.a + d.b * (1.0 - s.a),
            d.a,
        ),
        CompositeMode::SrcOver => Color::from_premul(
            s.r + d.r * (1.0 - s.a),
            s.g + d.g * (1.0 - s.a),
            s.b + d.b * (1.0 - s.a),
            s.a + d.a * (1.0 - s.a),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::gradient::{Anchor, ColorStop, GradientSpec, SpreadMode, TextDirection};

    fn solid_gradient(color: Color) -> ResolvedGradient {
        let spec = GradientSpec::linear(
            Anchor::Unit(0.0, 0.5),
            Anchor::Unit(1.0, 0.5),
            vec![ColorStop::new(0.0, color), ColorStop::new(1.0, color)],
        );
        ResolvedGradient::resolve(&spec, Rect::from_size(4.0, 4.0), TextDirection::Ltr)
    }

    fn horizontal_ramp() -> ResolvedGradient {
        let mut spec = GradientSpec::linear(
            Anchor::Unit(0.0, 0.5),
            Anchor::Unit(1.0, 0.5),
            vec![
                ColorStop::new(0.0, Color::from_straight(0.0, 0.0, 0.0, 1.0)),
                ColorStop::new(1.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)),
            ],
        );
        spec.spread = SpreadMode::Pad;
        ResolvedGradient::resolve(&spec, Rect::from_size(4.0, 4.0), TextDirection::Ltr)
    }

    fn source_with_alpha(a: u8) -> Pixmap {
        let mut pm = Pixmap::new(4, 4);
        for p in pm.pixels_mut() {
            // Premultiplied blue at the given alpha.
            *p = Rgba8 { r: 0, g: 0, b: a, a };
        }
        pm
    }

    // ── alpha preservation ────────────────────────────────────────────────

    #[test]
    fn transparent_pixels_stay_transparent() {
        let src = source_with_alpha(0);
        let g = solid_gradient(Color::from_straight(1.0, 0.0, 0.0, 1.0));
        let out = composite(&src, &g, CompositeMode::ReplaceColor).unwrap();
        assert!(out.pixels().iter().all(|p| *p == Rgba8::TRANSPARENT));
    }

    #[test]
    fn replace_keeps_alpha_and_takes_gradient_color() {
        let src = source_with_alpha(128);
        let g = solid_gradient(Color::from_straight(1.0, 0.0, 0.0, 1.0));
        let out = composite(&src, &g, CompositeMode::ReplaceColor).unwrap();

        let p = out.pixel(2, 2);
        assert_eq!(p.a, 128);
        // Pure replacement: red channel carries the source alpha
        // (premultiplied), blue from the source is gone.
        assert_eq!(p.r, 128);
        assert_eq!(p.b, 0);
    }

    #[test]
    fn replace_ignores_gradient_alpha() {
        let src = source_with_alpha(255);
        let g = solid_gradient(Color::from_straight(0.0, 1.0, 0.0, 0.25));
        let out = composite(&src, &g, CompositeMode::ReplaceColor).unwrap();
        assert_eq!(out.pixel(0, 0).a, 255);
        assert_eq!(out.pixel(0, 0).g, 255);
    }

    // ── sampling position ─────────────────────────────────────────────────

    #[test]
    fn samples_at_pixel_centers() {
        let src = source_with_alpha(255);
        let out = composite(&src, &horizontal_ramp(), CompositeMode::ReplaceColor).unwrap();
        // Ramp over 4px: centers at 0.5/4 .. 3.5/4.
        let left = out.pixel(0, 0).r as f32 / 255.0;
        let right = out.pixel(3, 0).r as f32 / 255.0;
        assert!((left - 0.125).abs() < 0.01);
        assert!((right - 0.875).abs() < 0.01);
    }

    // ── other modes ───────────────────────────────────────────────────────

    #[test]
    fn src_atop_blends_by_gradient_alpha() {
        let src = source_with_alpha(255); // opaque blue
        let g = solid_gradient(Color::from_straight(1.0, 0.0, 0.0, 0.5));
        let out = composite(&src, &g, CompositeMode::SrcAtop).unwrap();

        let p = out.pixel(1, 1);
        assert_eq!(p.a, 255);
        // Half red over blue.
        assert!((p.r as i32 - 128).abs() <= 1);
        assert!((p.b as i32 - 128).abs() <= 1);
    }

    // ── degenerate sources ────────────────────────────────────────────────

    #[test]
    fn zero_area_source_produces_no_layer() {
        let src = Pixmap::new(0, 8);
        let g = solid_gradient(Color::from_straight(1.0, 1.0, 1.0, 1.0));
        assert!(composite(&src, &g, CompositeMode::ReplaceColor).is_none());
    }
}
