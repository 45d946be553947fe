//! Convenience layer over `sheen-core`: pre-fab skeleton shapes rasterized to
//! coverage masks, and a loading cross-fade.
//!
//! Nothing here adds to the animation model — these are the "shape provider"
//! and "loading switcher" collaborators the core treats as external.

pub mod loading;
pub mod skeleton;

pub use loading::crossfade;
pub use skeleton::{SkeletonCircle, SkeletonLine, SkeletonParagraph, SkeletonRect};
