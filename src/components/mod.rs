//! UI Components for imgdrop.

mod image_uploader;
mod result_panel;

pub use image_uploader::ImageUploader;
pub use result_panel::ResultPanel;
