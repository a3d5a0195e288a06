use egui::{RichText, Ui};
use qrate_business::HexColor;

use crate::utils::colors::to_color32;

/// Foreground color control with its hex value.
///
/// Returns the new color when the user changed it this frame.
pub fn color_picker(current: HexColor, ui: &mut Ui) -> Option<HexColor> {
    let mut rgb = current.to_rgb();

    let changed = ui
        .horizontal(|ui| {
            ui.label("QR Code Color");
            let changed = ui.color_edit_button_srgb(&mut rgb).changed();
            let picked = HexColor::from(rgb);
            ui.label(
                RichText::new(picked.to_hex())
                    .monospace()
                    .color(to_color32(picked)),
            );
            changed
        })
        .inner;

    changed.then(|| HexColor::from(rgb))
}
