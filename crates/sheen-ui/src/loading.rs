//! Loading-state switching.
//!
//! The usual embedding swaps a shimmering skeleton for real content once it
//! arrives; [`crossfade`] is the blend step of that switch.

use sheen_core::raster::{Pixmap, Rgba8};

/// Cross-fades between two equally sized pixmaps.
///
/// `t = 0` yields `from`, `t = 1` yields `to`; the blend is a per-channel
/// lerp over premultiplied pixels, so translucent edges fade without fringes.
/// Returns `None` when the sizes differ — the caller composed mismatched
/// layers, and there is no sensible output.
pub fn crossfade(from: &Pixmap, to: &Pixmap, t: f32) -> Option<Pixmap> {
    if from.width() != to.width() || from.height() != to.height() {
        log::debug!(
            "crossfade: size mismatch {}x{} vs {}x{}",
            from.width(),
            from.height(),
            to.width(),
            to.height()
        );
        return None;
    }

    let t = t.clamp(0.0, 1.0);
    let mut out = Pixmap::new(from.width(), from.height());
    for ((dst, &a), &b) in out
        .pixels_mut()
        .iter_mut()
        .zip(from.pixels())
        .zip(to.pixels())
    {
        *dst = Rgba8::from_color(a.to_color().lerp(b.to_color(), t));
    }
    Some(out)
}
