//! Host-loop timing utilities.
//!
//! The core itself is frame-driven and clockless; [`FrameClock`] is the
//! canonical way for a host render loop to turn wall time into the `dt`
//! values fed to [`crate::shimmer::Shimmer::tick`].

mod clock;

pub use clock::{FrameClock, Tick};
