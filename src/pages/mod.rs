//! Page components for imgdrop.

mod upload;

pub use upload::UploadPage;
