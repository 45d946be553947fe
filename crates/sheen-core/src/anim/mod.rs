//! Animation lifecycle: time→progress driving, easing, shared control.
//!
//! The driver is purely frame-driven — it never blocks and owns no timer.
//! Hosts call [`AnimationDriver::tick`] once per display refresh with the
//! elapsed delta (see [`crate::time::FrameClock`]) and read the progress
//! back out for geometry and sampling.

pub mod controller;
pub mod driver;
pub mod easing;

pub use controller::ShimmerController;
pub use driver::{AnimationDriver, Phase};
pub use easing::Easing;
