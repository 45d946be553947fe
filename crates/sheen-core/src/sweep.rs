//! Sweep geometry: the moving sample rectangle.
//!
//! The gradient is not drawn into the shape's bounds directly. It is resolved
//! over an oversized rectangle, 3× the shape's extent along the travel axis,
//! that slides as progress advances. Under repeat tiling the rect's extent is
//! the pattern period, and one full period of travel translates the rect by
//! exactly that extent, so the pattern at progress 0 and progress 1 is
//! pixel-identical: an infinite loop with no visible seam.

use crate::coords::{Rect, Vec2};
use crate::paint::Anchor;

/// Travel direction of the highlight band across the shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// True for directions that travel against the axis (right-to-left,
    /// bottom-to-top).
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::RightToLeft | Direction::BottomToTop)
    }

    /// Unit-square (begin, end) anchors orienting the gradient axis so the
    /// highlight band is perpendicular to the travel axis.
    pub fn gradient_anchors(self) -> (Anchor, Anchor) {
        match self {
            Direction::LeftToRight => (Anchor::Unit(0.0, 0.5), Anchor::Unit(1.0, 0.5)),
            Direction::RightToLeft => (Anchor::Unit(1.0, 0.5), Anchor::Unit(0.0, 0.5)),
            Direction::TopToBottom => (Anchor::Unit(0.5, 0.0), Anchor::Unit(0.5, 1.0)),
            Direction::BottomToTop => (Anchor::Unit(0.5, 1.0), Anchor::Unit(0.5, 0.0)),
        }
    }
}

/// Computes the gradient sample rect for a shape of `size` at `progress`.
///
/// The rect is 3× the shape extent along the travel axis and matches the
/// shape on the cross axis. The travel-axis offset interpolates between
/// −2× and +1× the travel extent (order flipped for reversed directions),
/// so a full period slides the rect by its own 3× extent, which is the
/// repeat period: the loop stays seamless.
///
/// Returns `None` for zero-area sizes: nothing to render.
pub fn sample_rect(size: Vec2, direction: Direction, progress: f32) -> Option<Rect> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }

    let rect = if direction.is_horizontal() {
        let extent = size.x;
        let (from, to) = travel_endpoints(extent, direction.is_reversed());
        let x = from + (to - from) * progress;
        Rect::new(x, 0.0, 3.0 * extent, size.y)
    } else {
        let extent = size.y;
        let (from, to) = travel_endpoints(extent, direction.is_reversed());
        let y = from + (to - from) * progress;
        Rect::new(0.0, y, size.x, 3.0 * extent)
    };

    Some(rect)
}

#[inline]
fn travel_endpoints(extent: f32, reversed: bool) -> (f32, f32) {
    let (a, b) = (-2.0 * extent, extent);
    if reversed { (b, a) } else { (a, b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(100.0, 20.0);

    #[test]
    fn exactly_one_axis() {
        for d in [
            Direction::LeftToRight,
            Direction::RightToLeft,
            Direction::TopToBottom,
            Direction::BottomToTop,
        ] {
            assert_ne!(d.is_horizontal(), d.is_vertical());
        }
    }

    #[test]
    fn ltr_slides_three_extents_forward() {
        let start = sample_rect(SIZE, Direction::LeftToRight, 0.0).unwrap();
        let end = sample_rect(SIZE, Direction::LeftToRight, 1.0).unwrap();
        assert_eq!(start, Rect::new(-200.0, 0.0, 300.0, 20.0));
        assert_eq!(end, Rect::new(100.0, 0.0, 300.0, 20.0));
        // Travel distance equals the rect extent: one full repeat period.
        assert_eq!(end.origin.x - start.origin.x, start.size.x);
    }

    #[test]
    fn rtl_mirrors_ltr_in_progress() {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let rtl = sample_rect(SIZE, Direction::RightToLeft, p).unwrap();
            let ltr = sample_rect(SIZE, Direction::LeftToRight, 1.0 - p).unwrap();
            assert_eq!(rtl, ltr);
        }
    }

    #[test]
    fn btt_mirrors_ttb_in_progress() {
        for p in [0.0, 0.3, 1.0] {
            let btt = sample_rect(SIZE, Direction::BottomToTop, p).unwrap();
            let ttb = sample_rect(SIZE, Direction::TopToBottom, 1.0 - p).unwrap();
            assert_eq!(btt, ttb);
        }
    }

    #[test]
    fn vertical_uses_height_extent() {
        let r = sample_rect(SIZE, Direction::TopToBottom, 0.0).unwrap();
        assert_eq!(r, Rect::new(0.0, -40.0, 100.0, 60.0));
    }

    #[test]
    fn cross_axis_matches_shape() {
        let r = sample_rect(SIZE, Direction::LeftToRight, 0.5).unwrap();
        assert_eq!(r.origin.y, 0.0);
        assert_eq!(r.size.y, SIZE.y);
    }

    #[test]
    fn zero_area_renders_nothing() {
        assert!(sample_rect(Vec2::new(0.0, 20.0), Direction::LeftToRight, 0.5).is_none());
        assert!(sample_rect(Vec2::new(100.0, 0.0), Direction::TopToBottom, 0.5).is_none());
    }
}
