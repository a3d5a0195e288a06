pub mod colors;
pub mod download;
