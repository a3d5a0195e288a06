use crate::{state::State, widgets};

/// Widest the card gets on large windows.
const MAX_CONTENT_WIDTH: f32 = 420.0;

#[derive(bon::Builder)]
pub struct QrateApp {
    #[builder(default)]
    state: State,
}

impl QrateApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for QrateApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(MAX_CONTENT_WIDTH);
                ui.add_space(24.0);

                widgets::header(ui);
                ui.add_space(16.0);

                widgets::url_form(&mut self.state, ui);
                if let Some(message) = self.state.generator.status().error() {
                    widgets::error_banner(message, ui);
                }
                ui.add_space(16.0);

                widgets::qr_section(&mut self.state, ui);
            });
        });
    }
}
