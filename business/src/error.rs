//! Error type shared by validation, rendering and export.

use thiserror::Error;

/// Message shown next to the URL field when validation fails.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Message shown when the URL is valid but cannot fit in a QR symbol.
pub const TOO_LONG_MESSAGE: &str = "URL is too long to encode as a QR code";

/// Inline message for failures the user cannot fix by editing the URL.
pub const RENDER_FAILED_MESSAGE: &str = "Could not create a QR code for this URL";

#[derive(Debug, Error)]
pub enum QrateError {
    /// The input is not an absolute URL.
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl,

    /// The input does not fit in a symbol at the configured error-correction level.
    #[error("{}", TOO_LONG_MESSAGE)]
    TooLong,

    /// Export was requested while no symbol is displayed.
    #[error("no QR code is displayed")]
    NothingToExport,

    #[error("invalid hex color `{0}`")]
    InvalidColor(String),

    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("failed to encode PNG: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("download failed: {0}")]
    Download(String),
}

impl QrateError {
    /// Whether the error belongs in the inline message slot under the URL field.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidUrl | Self::TooLong)
    }

    /// Text for the inline message slot. Other errors get a generic message.
    pub fn inline_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            RENDER_FAILED_MESSAGE.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inline_messages() {
        assert_eq!(QrateError::InvalidUrl.to_string(), INVALID_URL_MESSAGE);
        assert_eq!(QrateError::TooLong.to_string(), TOO_LONG_MESSAGE);
    }

    #[test]
    fn test_only_validation_errors_are_user_facing() {
        assert!(QrateError::InvalidUrl.is_user_facing());
        assert!(QrateError::TooLong.is_user_facing());
        assert!(!QrateError::NothingToExport.is_user_facing());
        assert!(!QrateError::Download("blocked".to_owned()).is_user_facing());
    }

    #[test]
    fn test_inline_message_hides_internal_errors() {
        assert_eq!(QrateError::TooLong.inline_message(), TOO_LONG_MESSAGE);
        assert_eq!(
            QrateError::Raster("pixmap".to_owned()).inline_message(),
            RENDER_FAILED_MESSAGE
        );
    }
}
