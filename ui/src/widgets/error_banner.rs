use egui::{Response, RichText, Ui};

use crate::utils::colors::COLOR_RED;

/// Inline error shown under the URL field.
pub fn error_banner(message: &str, ui: &mut Ui) -> Response {
    ui.label(RichText::new(format!("⚠ {message}")).color(COLOR_RED))
}
