//! Context providers for imgdrop.
//!
//! The uploader is handed to the root scope at launch; the toast queue is
//! provided by [`App`](crate::app::App).
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let uploader = use_uploader();
//! let toasts = use_toasts();
//! ```

use dioxus::prelude::*;
use imgdrop_core::CloudinaryUploader;
use imgdrop_ui::ToastQueue;

/// Hook to access the configured Cloudinary client.
pub fn use_uploader() -> CloudinaryUploader {
    use_context::<CloudinaryUploader>()
}

/// Hook to access the shared toast queue.
///
/// Push a notice to show it; the toaster removes it again.
pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}
