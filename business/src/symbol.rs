//! QR symbol rendering on top of the `qrcode` crate.
//!
//! The encoder owns module layout and error correction. This module only picks
//! its parameters and paints the result, either straight into an RGBA buffer
//! or as SVG markup that is rasterized later.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode, render::svg, types::QrError};
use serde::{Deserialize, Serialize};

use crate::{HexColor, QrateError, ValidatedTarget, raster};

/// Width of the light border around the symbol, in modules.
pub const QUIET_ZONE_MODULES: usize = 4;

/// Error-correction grade of the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// Recovers about 7% of damaged data.
    #[default]
    Low,
    /// About 15%.
    Medium,
    /// About 25%.
    Quartile,
    /// About 30%.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => Self::L,
            ErrorCorrection::Medium => Self::M,
            ErrorCorrection::Quartile => Self::Q,
            ErrorCorrection::High => Self::H,
        }
    }
}

/// Which kind of surface [`render`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Raster,
    Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    /// Edge length in pixels.
    pub size: u32,
    pub error_correction: ErrorCorrection,
    pub foreground: HexColor,
    pub background: HexColor,
    pub quiet_zone: bool,
    pub surface: SurfaceKind,
}

/// Backing store of a rendered symbol.
#[derive(Clone)]
pub enum Surface {
    Raster(RgbaImage),
    Vector(String),
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raster(image) => f
                .debug_struct("Raster")
                .field("width", &image.width())
                .field("height", &image.height())
                .finish_non_exhaustive(),
            Self::Vector(markup) => f
                .debug_struct("Vector")
                .field("bytes", &markup.len())
                .finish_non_exhaustive(),
        }
    }
}

/// A painted QR symbol together with what it was painted from.
#[derive(Debug, Clone)]
pub struct RenderedSymbol {
    target: ValidatedTarget,
    foreground: HexColor,
    size: u32,
    modules: usize,
    surface: Surface,
}

impl RenderedSymbol {
    /// The string encoded in the symbol.
    pub fn target(&self) -> &ValidatedTarget {
        &self.target
    }

    pub fn foreground(&self) -> HexColor {
        self.foreground
    }

    /// Edge length in pixels of the rasterized symbol.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Modules per side, quiet zone excluded.
    pub fn modules(&self) -> usize {
        self.modules
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Whether this symbol was painted from `target` in `foreground`.
    pub fn shows(&self, target: &ValidatedTarget, foreground: HexColor) -> bool {
        &self.target == target && self.foreground == foreground
    }

    /// Pixels of the symbol at [`size`](Self::size).
    ///
    /// Raster surfaces hand back their buffer; vector surfaces are decoded
    /// into an offscreen pixmap first.
    pub fn rasterize(&self) -> Result<RgbaImage, QrateError> {
        match &self.surface {
            Surface::Raster(image) => Ok(image.clone()),
            Surface::Vector(markup) => raster::svg_to_rgba(markup.as_bytes(), self.size),
        }
    }
}

fn encode(target: &ValidatedTarget, level: ErrorCorrection) -> Result<QrCode, QrateError> {
    QrCode::with_error_correction_level(target.as_str(), level.into()).map_err(|err| match err {
        QrError::DataTooLong => QrateError::TooLong,
        other => QrateError::Encode(other),
    })
}

/// Checks that `target` fits in a symbol at `level` without painting it.
pub fn check_capacity(target: &ValidatedTarget, level: ErrorCorrection) -> Result<(), QrateError> {
    encode(target, level).map(|_| ())
}

/// Encodes `target` and paints it with `params`.
pub fn render(target: &ValidatedTarget, params: &RenderParams) -> Result<RenderedSymbol, QrateError> {
    let code = encode(target, params.error_correction)?;
    let modules = code.width();
    let quiet = if params.quiet_zone { QUIET_ZONE_MODULES } else { 0 };
    let span = modules + 2 * quiet;
    // Never fewer pixels than modules, or modules would be dropped.
    let size = params.size.max(span as u32);

    let surface = match params.surface {
        SurfaceKind::Raster => Surface::Raster(paint_raster(&code, quiet, size, params)),
        SurfaceKind::Vector => Surface::Vector(paint_svg(&code, size, params)),
    };

    log::debug!(
        "Rendered {modules}x{modules} symbol at {size}px as {:?}",
        params.surface
    );

    Ok(RenderedSymbol {
        target: target.clone(),
        foreground: params.foreground,
        size,
        modules,
        surface,
    })
}

fn paint_raster(code: &QrCode, quiet: usize, size: u32, params: &RenderParams) -> RgbaImage {
    let modules = code.width();
    let span = modules + 2 * quiet;
    let colors = code.to_colors();
    let dark = Rgba(params.foreground.to_rgba());
    let light = Rgba(params.background.to_rgba());

    // Nearest-module sampling so the output is exactly `size` wide.
    let module_at = |px: u32| -> Option<usize> {
        let m = px as usize * span / size as usize;
        (quiet..quiet + modules).contains(&m).then(|| m - quiet)
    };

    RgbaImage::from_fn(size, size, |x, y| match (module_at(x), module_at(y)) {
        (Some(mx), Some(my)) if colors[my * modules + mx] == Color::Dark => dark,
        _ => light,
    })
}

fn paint_svg(code: &QrCode, size: u32, params: &RenderParams) -> String {
    let dark = params.foreground.to_hex();
    let light = params.background.to_hex();
    code.render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(params.quiet_zone)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    fn params(surface: SurfaceKind) -> RenderParams {
        RenderParams {
            size: 200,
            error_correction: ErrorCorrection::Low,
            foreground: HexColor::INDIGO,
            background: HexColor::WHITE,
            quiet_zone: true,
            surface,
        }
    }

    fn target(url: &str) -> ValidatedTarget {
        validate(url).expect("test url should be valid")
    }

    #[test]
    fn test_raster_has_exact_size() {
        let symbol = render(&target("https://example.com"), &params(SurfaceKind::Raster))
            .expect("render should succeed");
        let image = symbol.rasterize().expect("raster is already pixels");
        assert_eq!((image.width(), image.height()), (200, 200));
        assert_eq!(symbol.size(), 200);
    }

    #[test]
    fn test_raster_uses_foreground_and_background() {
        let symbol = render(&target("https://example.com"), &params(SurfaceKind::Raster))
            .expect("render should succeed");
        let image = symbol.rasterize().expect("raster is already pixels");

        // Quiet zone corner is background.
        assert_eq!(image.get_pixel(0, 0).0, HexColor::WHITE.to_rgba());

        // The top-left finder pattern starts right after the quiet zone.
        let span = symbol.modules() + 2 * QUIET_ZONE_MODULES;
        let finder_px = ((QUIET_ZONE_MODULES as f32 + 0.5) * 200.0 / span as f32) as u32;
        assert_eq!(
            image.get_pixel(finder_px, finder_px).0,
            HexColor::INDIGO.to_rgba()
        );
    }

    #[test]
    fn test_without_quiet_zone_corner_is_dark() {
        let mut p = params(SurfaceKind::Raster);
        p.quiet_zone = false;
        let symbol = render(&target("https://example.com"), &p).expect("render should succeed");
        let image = symbol.rasterize().expect("raster is already pixels");
        assert_eq!(image.get_pixel(0, 0).0, HexColor::INDIGO.to_rgba());
    }

    #[test]
    fn test_tiny_size_is_raised_to_module_count() {
        let mut p = params(SurfaceKind::Raster);
        p.size = 10;
        let symbol = render(&target("https://example.com"), &p).expect("render should succeed");
        assert_eq!(symbol.size() as usize, symbol.modules() + 2 * QUIET_ZONE_MODULES);
    }

    #[test]
    fn test_vector_markup_carries_colors() {
        let symbol = render(&target("https://example.com"), &params(SurfaceKind::Vector))
            .expect("render should succeed");
        let Surface::Vector(markup) = symbol.surface() else {
            panic!("expected a vector surface");
        };
        assert!(markup.contains("<svg"));
        assert!(markup.contains("#4f46e5"), "dark color should be embedded");
        assert!(markup.contains("#ffffff"), "light color should be embedded");
    }

    #[test]
    fn test_symbol_remembers_what_it_shows() {
        let url = target("https://example.com");
        let symbol = render(&url, &params(SurfaceKind::Raster)).expect("render should succeed");
        assert_eq!(symbol.target(), &url);
        assert!(symbol.shows(&url, HexColor::INDIGO));
        assert!(!symbol.shows(&url, HexColor::BLACK));
        assert!(!symbol.shows(&target("https://example.org"), HexColor::INDIGO));
    }

    #[test]
    fn test_higher_correction_grows_symbol() {
        let url = target("https://example.com/some/longer/path?with=query&and=more");
        let low = render(&url, &params(SurfaceKind::Raster)).expect("low should render");
        let mut high_params = params(SurfaceKind::Raster);
        high_params.error_correction = ErrorCorrection::High;
        let high = render(&url, &high_params).expect("high should render");
        assert!(high.modules() > low.modules());
    }

    #[test]
    fn test_oversized_target_is_too_long() {
        let url = target(&format!("https://example.com/{}", "a".repeat(4000)));
        assert!(matches!(
            check_capacity(&url, ErrorCorrection::Low),
            Err(QrateError::TooLong)
        ));
        assert!(matches!(
            render(&url, &params(SurfaceKind::Raster)),
            Err(QrateError::TooLong)
        ));
    }
}
