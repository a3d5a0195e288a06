//! Offscreen rasterization of SVG markup.

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::QrateError;

/// Renders `svg` into a `size`×`size` straight-alpha RGBA image.
///
/// The document is scaled to fill the square regardless of its own width and
/// height attributes.
pub fn svg_to_rgba(svg: &[u8], size: u32) -> Result<RgbaImage, QrateError> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())?;

    let svg_size = tree.size();
    let sx = size as f32 / svg_size.width();
    let sy = size as f32 / svg_size.height();

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| QrateError::Raster(format!("cannot allocate a {size}x{size} surface")))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha.
    let mut data = pixmap.take();
    for px in data.chunks_exact_mut(4) {
        let alpha = px[3];
        if alpha != 0 && alpha != u8::MAX {
            for channel in &mut px[..3] {
                *channel = ((u16::from(*channel) * 255 + u16::from(alpha) / 2) / u16::from(alpha))
                    .min(255) as u8;
            }
        }
    }

    RgbaImage::from_raw(size, size, data)
        .ok_or_else(|| QrateError::Raster("pixmap size does not match its buffer".to_owned()))
}
