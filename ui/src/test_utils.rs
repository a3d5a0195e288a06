use std::cell::RefCell;
use std::rc::Rc;

use egui_kittest::Harness;
use qrate_business::{PngExport, QrateError};

use crate::state::State;
use crate::utils::download::DownloadHandler;

/// Download handler that keeps every export in memory.
#[derive(Clone, Default)]
pub struct RecordingDownloadHandler {
    exports: Rc<RefCell<Vec<PngExport>>>,
}

impl DownloadHandler for RecordingDownloadHandler {
    fn deliver(&self, export: &PngExport) -> Result<(), QrateError> {
        self.exports.borrow_mut().push(export.clone());
        Ok(())
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
    downloads: RecordingDownloadHandler,
}

impl<'a> TestCtx<'a> {
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let downloads = RecordingDownloadHandler::default();
        let state = State::test(Box::new(downloads.clone()));
        let harness = Harness::new_ui_state(app, state);

        Self { harness, downloads }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    /// Exports delivered so far.
    pub fn downloads(&self) -> Vec<PngExport> {
        self.downloads.exports.borrow().clone()
    }
}
