use std::cell::RefCell;
use std::rc::Rc;

use egui_kittest::Harness;
use kittest::Queryable;
use qrate_business::{PngExport, QrateError};
use qrate_ui::QrateApp;
use qrate_ui::state::State;
use qrate_ui::utils::download::DownloadHandler;

/// Download handler that keeps every export in memory.
#[derive(Clone, Default)]
pub struct RecordingDownloadHandler {
    exports: Rc<RefCell<Vec<PngExport>>>,
}

impl RecordingDownloadHandler {
    pub fn exports(&self) -> Vec<PngExport> {
        self.exports.borrow().clone()
    }
}

impl DownloadHandler for RecordingDownloadHandler {
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError> {
        self.exports.borrow_mut().push(export.clone());
        Ok(())
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, QrateApp>,
    downloads: RecordingDownloadHandler,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        let downloads = RecordingDownloadHandler::default();
        Self::new_app_with_handler(Box::new(downloads.clone()), downloads)
    }

    /// App whose downloads go to `handler`; `downloads` stays empty.
    #[allow(unused)]
    pub fn new_app_with(handler: Box<dyn DownloadHandler>) -> Self {
        Self::new_app_with_handler(handler, RecordingDownloadHandler::default())
    }

    fn new_app_with_handler(
        handler: Box<dyn DownloadHandler>,
        downloads: RecordingDownloadHandler,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let app = QrateApp::new(State::test(handler));
        let harness = Harness::new_eframe(|_| app);

        Self { harness, downloads }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrateApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QrateApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn downloads(&self) -> Vec<PngExport> {
        self.downloads.exports()
    }
}

/// Puts `input` in the URL field and clicks "Generate".
#[allow(unused)]
pub fn submit(harness: &mut Harness<'_, QrateApp>, input: &str) {
    harness.state_mut().state_mut().input = input.to_owned();
    harness.step();

    harness.get_by_label("Generate").click();
    harness.step();
    harness.step();
}
