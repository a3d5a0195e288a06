use egui::{Response, RichText, Ui};

use crate::utils::colors::{COLOR_ACCENT, COLOR_MUTED};

/// App title, wordmark and tagline.
pub fn header(ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("QRate")
                .heading()
                .strong()
                .size(32.0)
                .color(COLOR_ACCENT),
        );
        ui.label(RichText::new("QR + Create").small().color(COLOR_MUTED));
        ui.add_space(4.0);
        ui.label("Generate QR codes instantly");
    })
    .response
}
