//! PNG export of the displayed symbol.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::{QrateError, RenderedSymbol};

/// An encoded PNG ready to be handed to a download mechanism.
#[derive(Clone, PartialEq, Eq)]
pub struct PngExport {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PngExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PngExport")
            .field("file_name", &self.file_name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Encodes the displayed symbol as PNG.
///
/// Returns [`QrateError::NothingToExport`] when `symbol` is `None`; callers
/// treat that as a no-op.
pub fn export_png(
    symbol: Option<&RenderedSymbol>,
    file_name: &str,
) -> Result<PngExport, QrateError> {
    let symbol = symbol.ok_or(QrateError::NothingToExport)?;
    let pixels = symbol.rasterize()?;
    let (width, height) = pixels.dimensions();

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(pixels).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    log::debug!(
        "Encoded {file_name}: {width}x{height}, {} bytes",
        bytes.len()
    );

    Ok(PngExport {
        file_name: file_name.to_owned(),
        width,
        height,
        bytes,
    })
}
