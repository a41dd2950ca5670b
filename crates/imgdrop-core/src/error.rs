//! Error types for imgdrop

use thiserror::Error;

/// The two failure categories a user ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The selected file is not an image. Nothing was sent.
    InvalidFile,
    /// The request failed, was rejected, or returned an unusable body.
    UploadFailed,
}

/// Main error type for upload operations
#[derive(Error, Debug)]
pub enum UploadError {
    /// Declared content type does not start with `image/`
    #[error("Invalid file: {name} has content type {content_type}")]
    InvalidFile { name: String, content_type: String },

    /// Cloudinary answered with a non-success status
    #[error("Upload rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body has no usable `secure_url`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Reading the selected file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Map to the user-facing category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            UploadError::InvalidFile { .. } => ErrorCategory::InvalidFile,
            _ => ErrorCategory::UploadFailed,
        }
    }
}

/// Clipboard access failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using UploadError
pub type UploadResult<T> = Result<T, UploadError>;
