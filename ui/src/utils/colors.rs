//! Shared color constants for the UI.

use egui::Color32;
use qrate_business::HexColor;

/// Purple used for the title and the generate button.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(147, 51, 234);

/// Red for the inline validation message.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Gray for secondary text.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

pub fn to_color32(color: HexColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
