//! imgdrop Core Library
//!
//! Unsigned image uploads to Cloudinary and the state behind the upload
//! widget, kept free of any UI toolkit.
//!
//! ## Overview
//!
//! A user drops or picks one image. It is checked for an `image/` content
//! type, sent as a multipart POST with an unsigned upload preset, and the
//! returned `secure_url` is kept in [`UploadState`] until the next attempt.
//!
//! ## Quick Start
//!
//! ```ignore
//! use imgdrop_core::{flow, CloudinaryConfig, CloudinaryUploader, MemoryStore, SelectedFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let uploader = CloudinaryUploader::new(CloudinaryConfig::new("demo", "unsigned"))?;
//!     let mut store = MemoryStore::default();
//!
//!     let file = SelectedFile::from_path("cat.png".as_ref()).await?;
//!     flow::submit_file(&uploader, &mut store, file).await;
//!
//!     println!("{:?}", store.state.image_url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod media;
pub mod notice;
pub mod state;
pub mod upload;

// Re-exports
pub use config::CloudinaryConfig;
pub use error::{ClipboardError, ErrorCategory, UploadError, UploadResult};
pub use flow::{ClipboardWriter, MemoryStore, SubmitOutcome, UploadStore, COPIED_RESET_DELAY};
pub use media::SelectedFile;
pub use notice::{Notice, Tone};
pub use state::{Phase, UploadState};
pub use upload::{CloudinaryUploader, UploadedImage, Uploader};
