//! Renders a shimmering skeleton "profile card" to PNG frames.
//!
//! Output lands in `sheen-gallery-out/frame_NN.png`; one full animation
//! period is spread over the rendered frames, so encoding them as a looping
//! GIF/video shows the seamless wrap.

use std::time::Duration;

use anyhow::{Context, Result};

use sheen_core::config::ShimmerConfig;
use sheen_core::logging::{init_logging, LoggingConfig};
use sheen_core::paint::Color;
use sheen_core::raster::{AlphaMask, Pixmap};
use sheen_core::shimmer::Shimmer;
use sheen_core::sweep::Direction;
use sheen_ui::{SkeletonCircle, SkeletonParagraph};

const FRAMES: u32 = 24;
const PERIOD_MS: u64 = 1200;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let card = profile_card_mask();
    log::info!("card mask: {}x{}", card.width(), card.height());

    let config = ShimmerConfig::from_colors(
        Color::from_rgba8(0x3a, 0x3a, 0x3a, 0xff),
        Color::from_rgba8(0xd8, 0xd8, 0xd8, 0xff),
        Direction::LeftToRight,
    )
    .period(Duration::from_millis(PERIOD_MS))
    .build()
    .context("building shimmer config")?;
    let mut shimmer = Shimmer::new(config);

    let out_dir = std::path::Path::new("sheen-gallery-out");
    std::fs::create_dir_all(out_dir).context("creating output directory")?;

    let dt = (PERIOD_MS as f32 / 1000.0) / FRAMES as f32;
    for frame in 0..FRAMES {
        let pixels = shimmer
            .paint_mask(&card)
            .context("card mask has zero area")?;
        let path = out_dir.join(format!("frame_{frame:02}.png"));
        save_png(&pixels, &path).with_context(|| format!("writing {}", path.display()))?;
        shimmer.tick(dt);
    }

    log::info!("wrote {FRAMES} frames to {}", out_dir.display());
    Ok(())
}

/// Avatar circle beside a three-line paragraph, unioned into one mask.
fn profile_card_mask() -> AlphaMask {
    let avatar = SkeletonCircle::new(48.0).rasterize();
    let text = SkeletonParagraph::new(160.0, 3)
        .line_height(12.0)
        .spacing(8.0)
        .rasterize();

    let mut card = AlphaMask::new(240, 64);
    blit_max(&mut card, &avatar, 8, 8);
    blit_max(&mut card, &text, 68, 6);
    card
}

/// Unions `src` coverage into `dst` at the given offset.
fn blit_max(dst: &mut AlphaMask, src: &AlphaMask, ox: u32, oy: u32) {
    for y in 0..src.height().min(dst.height().saturating_sub(oy)) {
        for x in 0..src.width().min(dst.width().saturating_sub(ox)) {
            let c = src.coverage(x, y);
            if c > dst.coverage(ox + x, oy + y) {
                dst.set_coverage(ox + x, oy + y, c);
            }
        }
    }
}

/// Unpremultiplies into straight-alpha RGBA and encodes as PNG.
fn save_png(pm: &Pixmap, path: &std::path::Path) -> Result<()> {
    let mut img = image::RgbaImage::new(pm.width(), pm.height());
    for (x, y, out) in img.enumerate_pixels_mut() {
        let (r, g, b, a) = pm.pixel(x, y).to_color().to_straight();
        let q = |v: f32| (v * 255.0 + 0.5) as u8;
        *out = image::Rgba([q(r), q(g), q(b), q(a)]);
    }
    img.save(path)?;
    Ok(())
}
