//! Core logic of QRate: URL validation, the generator state machine, QR
//! rendering through the `qrcode` crate and PNG export.
//!
//! Nothing here touches egui. The UI crate owns the input text and the texture
//! of the displayed symbol, and drives [`GeneratorState`] from user events.

mod color;
mod config;
mod error;
pub mod export;
mod generator;
pub mod raster;
pub mod symbol;
mod validator;

pub use color::HexColor;
pub use config::{DEFAULT_FILE_NAME, DEFAULT_SYMBOL_SIZE, QrateConfig};
pub use error::{INVALID_URL_MESSAGE, QrateError, RENDER_FAILED_MESSAGE, TOO_LONG_MESSAGE};
pub use export::{PngExport, export_png};
pub use generator::{GeneratorCommand, GeneratorState, GeneratorStatus};
pub use symbol::{
    ErrorCorrection, RenderParams, RenderedSymbol, Surface, SurfaceKind, check_capacity, render,
};
pub use validator::{ValidatedTarget, is_valid_url, validate};
