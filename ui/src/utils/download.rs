//! Delivery of exported PNGs to the user.
//!
//! This module provides a trait-based abstraction over "save this file", so
//! the app can be driven in tests without system dialogs or a browser.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: native save dialog via the `rfd` crate,
//!   pre-filled with the export's file name.
//! - **Web (WASM)**: a Blob object URL clicked through a temporary
//!   `<a download>` element, which is how browsers start a download.

use qrate_business::{PngExport, QrateError};

/// Trait for delivering an exported PNG, enabling mock implementations for testing.
pub trait DownloadHandler {
    /// Hands `export` to the user. Returns `Ok(())` when the user cancels.
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError>;
}

/// Default download handler for the current platform.
#[derive(Default)]
pub struct SystemDownloadHandler;

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for SystemDownloadHandler {
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError> {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(&export.file_name)
            .set_title("Save QR code")
            .save_file()
        else {
            log::debug!("Save dialog cancelled");
            return Ok(());
        };

        std::fs::write(&path, &export.bytes)?;
        log::info!("Saved {}x{} QR code to {:?}", export.width, export.height, path);
        Ok(())
    }
}

/// How long the object URL outlives the click that starts the download.
#[cfg(target_arch = "wasm32")]
const REVOKE_DELAY_MS: i32 = 10_000;

#[cfg(target_arch = "wasm32")]
impl DownloadHandler for SystemDownloadHandler {
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast as _, JsValue};
        use web_sys::js_sys::{Array, Uint8Array};

        let js_err = |err: JsValue| QrateError::Download(format!("{err:?}"));

        let window = web_sys::window().ok_or_else(|| QrateError::Download("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| QrateError::Download("no document".to_owned()))?;

        let parts = Array::of1(&Uint8Array::from(export.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let href = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_elem| QrateError::Download("<a> is not an anchor element".to_owned()))?;
        anchor.set_href(&href);
        anchor.set_download(&export.file_name);
        anchor.click();

        let revoke = Closure::once_into_js(move || {
            if let Err(err) = web_sys::Url::revoke_object_url(&href) {
                log::warn!("Failed to revoke download URL: {err:?}");
            }
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revoke.unchecked_ref(),
                REVOKE_DELAY_MS,
            )
            .map_err(js_err)?;

        log::info!(
            "Started download of {} ({}x{})",
            export.file_name,
            export.width,
            export.height
        );
        Ok(())
    }
}

/// Writes exports into a fixed directory under their own file name.
#[cfg(not(target_arch = "wasm32"))]
pub struct DirectoryDownloadHandler {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryDownloadHandler {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for DirectoryDownloadHandler {
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError> {
        let path = self.dir.join(&export.file_name);
        std::fs::write(&path, &export.bytes)?;
        log::info!("Wrote {path:?}");
        Ok(())
    }
}
