//! Upload page - the only screen.

use dioxus::prelude::*;

use crate::components::ImageUploader;

/// Heading, subtitle, and the uploader widget.
#[component]
pub fn UploadPage() -> Element {
    rsx! {
        main { class: "upload-page",
            header { class: "upload-page__header",
                h1 { class: "page-title", "Upload Image" }
                p { class: "tagline", "Upload to Cloudinary, get a link" }
            }

            ImageUploader {}
        }
    }
}
