//! User-facing notices shown as toasts.

use crate::error::{ErrorCategory, UploadError};

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Success,
    Destructive,
}

impl Tone {
    /// Returns the CSS modifier class for this tone
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "toast--success",
            Tone::Destructive => "toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone,
        }
    }

    pub fn upload_succeeded() -> Self {
        Self::new("Upload complete!", "The image link is ready to copy.", Tone::Success)
    }

    /// Failure notice. Points at configuration, the usual culprit.
    pub fn upload_failed() -> Self {
        Self::new(
            "Upload failed",
            "Make sure the Cloudinary cloud name and upload preset are configured correctly.",
            Tone::Destructive,
        )
    }

    pub fn invalid_file() -> Self {
        Self::new("Invalid file", "Only image files are allowed.", Tone::Destructive)
    }

    pub fn copied() -> Self {
        Self::new("Copied!", "The link is on your clipboard.", Tone::Success)
    }

    pub fn copy_failed() -> Self {
        Self::new("Copy failed", "The clipboard is not available.", Tone::Destructive)
    }

    pub fn for_error(err: &UploadError) -> Self {
        match err.category() {
            ErrorCategory::InvalidFile => Self::invalid_file(),
            ErrorCategory::UploadFailed => Self::upload_failed(),
        }
    }
}
