use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    HexColor,
    symbol::{ErrorCorrection, RenderParams, SurfaceKind},
};

/// Rendered edge length in logical pixels.
pub const DEFAULT_SYMBOL_SIZE: u32 = 200;

/// Name of the downloaded file.
pub const DEFAULT_FILE_NAME: &str = "qrcode.png";

/// Rendering and export settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct QrateConfig {
    #[builder(default = DEFAULT_SYMBOL_SIZE)]
    pub symbol_size: u32,
    #[builder(default)]
    pub error_correction: ErrorCorrection,
    /// Foreground used until the user picks another color.
    #[builder(default = HexColor::INDIGO)]
    pub foreground: HexColor,
    #[builder(default = HexColor::WHITE)]
    pub background: HexColor,
    #[builder(default = true)]
    pub quiet_zone: bool,
    #[builder(default = default_surface())]
    pub surface: SurfaceKind,
    #[builder(default = DEFAULT_FILE_NAME.to_owned(), into)]
    pub download_file_name: String,
}

/// The browser build goes through SVG like a DOM renderer would; native paints pixels directly.
fn default_surface() -> SurfaceKind {
    if cfg!(target_arch = "wasm32") {
        SurfaceKind::Vector
    } else {
        SurfaceKind::Raster
    }
}

impl Default for QrateConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl QrateConfig {
    /// Render parameters for the given foreground color.
    pub fn render_params(&self, foreground: HexColor) -> RenderParams {
        RenderParams {
            size: self.symbol_size,
            error_correction: self.error_correction,
            foreground,
            background: self.background,
            quiet_zone: self.quiet_zone,
            surface: self.surface,
        }
    }
}
