#![warn(clippy::all, rust_2018_idioms)]
//! egui front end of QRate: the URL form, the displayed QR code and its download.

mod app;
pub mod state;
pub mod utils;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use app::QrateApp;
