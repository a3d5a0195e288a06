use qrate_business::{
    GeneratorCommand, GeneratorState, GeneratorStatus, HexColor, QrateConfig, QrateError,
    RenderedSymbol, export_png, render,
};

use crate::utils::download::{DownloadHandler, SystemDownloadHandler};
use crate::widgets::SymbolView;

/// The main application state.
///
/// Note: We manually implement Default because the download handler is a
/// trait object.
pub struct State {
    pub config: QrateConfig,
    /// Text in the URL field. Editing it never regenerates.
    pub input: String,
    pub generator: GeneratorState,
    /// Texture of the displayed symbol. Present exactly while the generator is ready.
    pub symbol_view: Option<SymbolView>,
    pub download_handler: Box<dyn DownloadHandler>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(QrateConfig::default(), Box::new(SystemDownloadHandler))
    }
}

impl State {
    pub fn new(config: QrateConfig, download_handler: Box<dyn DownloadHandler>) -> Self {
        let generator = GeneratorState::new(config.foreground, config.error_correction);
        Self {
            config,
            input: String::new(),
            generator,
            symbol_view: None,
            download_handler,
        }
    }

    pub fn test(download_handler: Box<dyn DownloadHandler>) -> Self {
        Self::new(QrateConfig::default(), download_handler)
    }

    /// Submits the current input. A rejection is also shown inline.
    pub fn generate(&mut self) -> Result<(), QrateError> {
        self.generator
            .dispatch(GeneratorCommand::Generate(self.input.clone()))
    }

    pub fn set_foreground(&mut self, color: HexColor) {
        self.generator.set_foreground(color);
    }

    /// The symbol currently on screen, if any.
    pub fn displayed_symbol(&self) -> Option<&RenderedSymbol> {
        self.symbol_view.as_ref().map(SymbolView::symbol)
    }

    /// Brings `symbol_view` in line with the generator status.
    ///
    /// A new view is acquired when the target or color changed, and the old
    /// one is dropped (releasing its texture) in the same step.
    pub fn sync_symbol(&mut self, ctx: &egui::Context) {
        let GeneratorStatus::Ready { target, foreground } = self.generator.status() else {
            if self.symbol_view.take().is_some() {
                log::debug!("Released QR code texture");
            }
            return;
        };

        if self
            .symbol_view
            .as_ref()
            .is_some_and(|view| view.shows(target, *foreground))
        {
            return;
        }

        let params = self.config.render_params(*foreground);
        match render(target, &params).and_then(|s| SymbolView::acquire(ctx, s)) {
            Ok(view) => {
                log::debug!("Showing QR code for {target} in {foreground}");
                self.symbol_view = Some(view);
            }
            Err(err) => {
                self.symbol_view = None;
                self.generator.fail(&err);
            }
        }
    }

    /// Exports the displayed symbol and hands it to the download handler.
    ///
    /// Does nothing when no symbol is displayed.
    pub fn download(&self) {
        let export = match export_png(self.displayed_symbol(), &self.config.download_file_name) {
            Ok(export) => export,
            Err(QrateError::NothingToExport) => {
                log::debug!("Download requested with no QR code displayed");
                return;
            }
            Err(err) => {
                log::error!("Failed to export QR code: {err}");
                return;
            }
        };

        if let Err(err) = self.download_handler.deliver(&export) {
            log::warn!("Failed to deliver {}: {err}", export.file_name);
        }
    }
}
