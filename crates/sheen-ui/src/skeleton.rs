//! Skeleton placeholder shapes.
//!
//! Each builder rasterizes to an [`AlphaMask`] — the shape-provider contract
//! of the core. Edges carry one pixel of analytic anti-aliasing computed from
//! the shape's signed distance, so composited output has no staircasing.

use sheen_core::raster::AlphaMask;

// ── rasterization helpers ─────────────────────────────────────────────────

/// Signed distance from `p` to a rounded rect centered at `(cx, cy)` with
/// half extents `(hx, hy)` and corner radius `r`.
#[inline]
fn rounded_rect_sdf(px: f32, py: f32, cx: f32, cy: f32, hx: f32, hy: f32, r: f32) -> f32 {
    let qx = (px - cx).abs() - (hx - r);
    let qy = (py - cy).abs() - (hy - r);
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - r
}

#[inline]
fn coverage_from_distance(d: f32) -> u8 {
    ((0.5 - d).clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Stamps a rounded rect into `mask`, keeping the max of existing and new
/// coverage so overlapping stamps union cleanly.
fn stamp_rounded_rect(mask: &mut AlphaMask, x: f32, y: f32, w: f32, h: f32, radius: f32) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (hx, hy) = (w / 2.0, h / 2.0);

    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + w).ceil() as u32).min(mask.width());
    let y1 = ((y + h).ceil() as u32).min(mask.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let d = rounded_rect_sdf(
                px as f32 + 0.5,
                py as f32 + 0.5,
                cx,
                cy,
                hx,
                hy,
                r,
            );
            let cov = coverage_from_distance(d);
            if cov > mask.coverage(px, py) {
                mask.set_coverage(px, py, cov);
            }
        }
    }
}

// ── shapes ────────────────────────────────────────────────────────────────

/// A rounded-rect placeholder block.
///
/// # Example
/// ```rust,ignore
/// let mask = SkeletonRect::new(120.0, 80.0).rounded(8.0).rasterize();
/// ```
#[derive(Debug, Clone)]
pub struct SkeletonRect {
    width: f32,
    height: f32,
    corner_radius: f32,
}

impl SkeletonRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, corner_radius: 4.0 }
    }

    pub fn rounded(mut self, radius: f32) -> Self { self.corner_radius = radius; self }

    /// Full corner radius: a pill.
    pub fn pill(mut self) -> Self { self.corner_radius = self.width.max(self.height); self }

    pub fn rasterize(&self) -> AlphaMask {
        let mut mask = AlphaMask::new(self.width.ceil().max(0.0) as u32, self.height.ceil().max(0.0) as u32);
        stamp_rounded_rect(&mut mask, 0.0, 0.0, self.width, self.height, self.corner_radius);
        mask
    }
}

/// A circular placeholder, e.g. an avatar.
#[derive(Debug, Clone)]
pub struct SkeletonCircle {
    diameter: f32,
}

impl SkeletonCircle {
    pub fn new(diameter: f32) -> Self {
        Self { diameter }
    }

    pub fn rasterize(&self) -> AlphaMask {
        // A circle is a pill-cornered square.
        SkeletonRect::new(self.diameter, self.diameter)
            .rounded(self.diameter / 2.0)
            .rasterize()
    }
}

/// A single text-like line.
#[derive(Debug, Clone)]
pub struct SkeletonLine {
    width: f32,
    height: f32,
    corner_radius: f32,
}

impl SkeletonLine {
    pub fn new(width: f32) -> Self {
        Self { width, height: 14.0, corner_radius: 2.0 }
    }

    pub fn height(mut self, v: f32) -> Self { self.height = v; self }
    pub fn rounded(mut self, v: f32) -> Self { self.corner_radius = v; self }

    pub fn rasterize(&self) -> AlphaMask {
        SkeletonRect::new(self.width, self.height)
            .rounded(self.corner_radius)
            .rasterize()
    }
}

/// A block of text-like lines with a shortened trailing line.
#[derive(Debug, Clone)]
pub struct SkeletonParagraph {
    width: f32,
    lines: u32,
    line_height: f32,
    spacing: f32,
    last_line_fraction: f32,
}

impl SkeletonParagraph {
    pub fn new(width: f32, lines: u32) -> Self {
        Self {
            width,
            lines,
            line_height: 14.0,
            spacing: 8.0,
            last_line_fraction: 0.6,
        }
    }

    pub fn line_height(mut self, v: f32) -> Self { self.line_height = v; self }
    pub fn spacing(mut self, v: f32) -> Self { self.spacing = v; self }

    /// Width of the final line as a fraction of the paragraph width.
    pub fn last_line_fraction(mut self, v: f32) -> Self {
        self.last_line_fraction = v.clamp(0.0, 1.0);
        self
    }

    pub fn rasterize(&self) -> AlphaMask {
        if self.lines == 0 {
            return AlphaMask::new(self.width.ceil().max(0.0) as u32, 0);
        }
        let total_h = self.lines as f32 * self.line_height + (self.lines - 1) as f32 * self.spacing;
        let mut mask = AlphaMask::new(
            self.width.ceil().max(0.0) as u32,
            total_h.ceil().max(0.0) as u32,
        );
        for i in 0..self.lines {
            let y = i as f32 * (self.line_height + self.spacing);
            let w = if i + 1 == self.lines {
                self.width * self.last_line_fraction
            } else {
                self.width
            };
            stamp_rounded_rect(&mut mask, 0.0, y, w, self.line_height, 2.0);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_interior_is_fully_covered() {
        let mask = SkeletonRect::new(20.0, 10.0).rounded(3.0).rasterize();
        assert_eq!(mask.width(), 20);
        assert_eq!(mask.height(), 10);
        assert_eq!(mask.coverage(10, 5), 255);
    }

    #[test]
    fn rect_corners_are_cut() {
        let mask = SkeletonRect::new(20.0, 20.0).rounded(8.0).rasterize();
        // Far corner pixel sits outside the rounded corner arc.
        assert_eq!(mask.coverage(0, 0), 0);
        // Edge midpoints are solid.
        assert_eq!(mask.coverage(10, 0), 255);
        assert_eq!(mask.coverage(0, 10), 255);
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_center_covered_corners_empty() {
        let mask = SkeletonCircle::new(16.0).rasterize();
        assert_eq!(mask.width(), 16);
        assert_eq!(mask.coverage(8, 8), 255);
        assert_eq!(mask.coverage(0, 0), 0);
        assert_eq!(mask.coverage(15, 15), 0);
    }

    #[test]
    fn circle_edge_is_antialiased() {
        let mask = SkeletonCircle::new(16.0).rasterize();
        // Some pixel along the rim must be partial coverage.
        let partial = (0..16).any(|x| {
            let c = mask.coverage(x, 2);
            c > 0 && c < 255
        });
        assert!(partial);
    }

    // ── paragraph ─────────────────────────────────────────────────────────

    #[test]
    fn paragraph_shortens_last_line() {
        let mask = SkeletonParagraph::new(100.0, 2)
            .line_height(10.0)
            .spacing(6.0)
            .last_line_fraction(0.5)
            .rasterize();
        assert_eq!(mask.height(), 26);

        // First line spans the full width, last line only half.
        assert_eq!(mask.coverage(90, 5), 255);
        assert_eq!(mask.coverage(90, 21), 0);
        assert_eq!(mask.coverage(40, 21), 255);
    }

    #[test]
    fn paragraph_gap_rows_are_empty() {
        let mask = SkeletonParagraph::new(40.0, 2)
            .line_height(10.0)
            .spacing(6.0)
            .rasterize();
        // Row 13 sits mid-gap between the two lines.
        assert!((0..40).all(|x| mask.coverage(x, 13) == 0));
    }

    #[test]
    fn zero_lines_rasterize_empty() {
        let mask = SkeletonParagraph::new(40.0, 0).rasterize();
        assert!(mask.is_empty());
    }
}
