mod color_picker;
mod error_banner;
mod header;
mod qr_display;
mod url_form;

pub use color_picker::color_picker;
pub use error_banner::error_banner;
pub use header::header;
pub use qr_display::{SymbolView, qr_section};
pub use url_form::url_form;
