use egui::{Button, Color32, Key, RichText, TextEdit, Ui};
use qrate_business::QrateError;

use crate::state::State;
use crate::utils::colors::COLOR_ACCENT;

const BUTTON_WIDTH: f32 = 96.0;

/// URL field plus the "Generate" button.
///
/// Clicking the button or pressing Enter in the field submits the input.
/// Returns the outcome when a generate was triggered this frame.
pub fn url_form(state: &mut State, ui: &mut Ui) -> Option<Result<(), QrateError>> {
    let triggered = ui
        .horizontal(|ui| {
            let field_width = (ui.available_width() - BUTTON_WIDTH).max(120.0);
            let field = ui.add(
                TextEdit::singleline(&mut state.input)
                    .hint_text("Enter URL here")
                    .desired_width(field_width),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let clicked = ui
                .add(
                    Button::new(RichText::new("Generate").color(Color32::WHITE))
                        .fill(COLOR_ACCENT)
                        .min_size([BUTTON_WIDTH - 8.0, 0.0].into()),
                )
                .clicked();

            submitted || clicked
        })
        .inner;

    triggered.then(|| state.generate())
}
