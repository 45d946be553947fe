//! Paint model: colors, gradient specifications, and gradient sampling.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - gradient specs (stops, spread, kind, axis anchors)
//! - resolving a spec over a sample rect into a point→color function
//!
//! Geometry types remain in `coords`; the moving sample rect comes from
//! `sweep`.

pub mod color;
pub mod gradient;
pub mod sampler;

pub use color::Color;
pub use gradient::{Anchor, ColorStop, GradientKind, GradientSpec, SpreadMode, TextDirection};
pub use sampler::{ResolvedGradient, SamplerCache};
