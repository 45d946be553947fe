//! Coordinate and geometry types shared across the core.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Sample rectangles produced by [`crate::sweep`] live in the same space as
//! the shape they slide over, so negative origins are ordinary values here.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
