//! CPU raster surface: pixel buffers, coverage masks, and the compositor.
//!
//! Scope:
//! - `Rgba8`/`Pixmap`: premultiplied byte pixels, viewable as raw bytes
//! - `AlphaMask`: 8-bit coverage, the contract shape providers fulfill
//! - `composite`: the per-pixel color-replacement rule over a source's alpha

pub mod compositor;
pub mod pixmap;

pub use compositor::{composite, CompositeMode};
pub use pixmap::{AlphaMask, Pixmap, Rgba8};
