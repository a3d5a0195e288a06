//! Displayed QR code, its download button and the color picker.
//!
//! The symbol texture lives in a [`SymbolView`]. Dropping the view frees the
//! texture, so replacing or clearing `State::symbol_view` is all it takes to
//! release the previous symbol.

use egui::{Context, RichText, TextureHandle, TextureOptions, Ui};
use qrate_business::{HexColor, QrateError, RenderedSymbol, ValidatedTarget};

use crate::state::State;
use crate::utils::colors::COLOR_MUTED;
use crate::widgets::color_picker;

/// A rendered symbol together with the GPU texture showing it.
pub struct SymbolView {
    symbol: RenderedSymbol,
    texture: TextureHandle,
}

impl std::fmt::Debug for SymbolView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolView")
            .field("symbol", &self.symbol)
            .field("texture_id", &self.texture.id())
            .finish()
    }
}

impl SymbolView {
    /// Uploads `symbol` as a texture.
    pub fn acquire(ctx: &Context, symbol: RenderedSymbol) -> Result<Self, QrateError> {
        let pixels = symbol.rasterize()?;
        let size = [pixels.width() as usize, pixels.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_raw());
        let texture = ctx.load_texture("qrate_symbol", image, TextureOptions::NEAREST);

        Ok(Self { symbol, texture })
    }

    pub fn symbol(&self) -> &RenderedSymbol {
        &self.symbol
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub fn shows(&self, target: &ValidatedTarget, foreground: HexColor) -> bool {
        self.symbol.shows(target, foreground)
    }
}

/// Everything below the form: the symbol, "Download" and the color picker.
///
/// Renders nothing until a symbol is displayed.
pub fn qr_section(state: &mut State, ui: &mut Ui) {
    state.sync_symbol(ui.ctx());

    let Some(view) = state.symbol_view.as_ref() else {
        return;
    };

    let side = view.symbol().size() as f32;
    let texture = egui::load::SizedTexture::new(view.texture().id(), [side, side]);
    let caption = format!("🔗 Encodes {}", view.symbol().target());
    let file_name = state.config.download_file_name.clone();
    let current = state.generator.foreground();

    let (download, picked) = ui
        .vertical_centered(|ui| {
            ui.image(texture);
            ui.add_space(8.0);
            let download = ui
                .button("⬇ Download")
                .on_hover_text(format!("Save as {file_name}"))
                .clicked();
            ui.label(RichText::new(caption).small().color(COLOR_MUTED));
            ui.add_space(8.0);
            let picked = color_picker(current, ui);
            (download, picked)
        })
        .inner;

    if download {
        state.download();
    }
    if let Some(color) = picked {
        state.set_foreground(color);
    }
}
