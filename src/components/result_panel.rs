//! Result panel - the uploaded link with a copy button and preview.

use dioxus::prelude::*;
use imgdrop_core::media::format_size;
use imgdrop_core::UploadedImage;
use imgdrop_ui::{IconButton, IconButtonVariant};

/// Props for the result panel component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// The secure URL returned by Cloudinary
    pub url: String,
    /// Show the "copied" check instead of the copy glyph
    pub copied: bool,
    /// Metadata from the same upload, when available
    #[props(!optional)]
    pub details: Option<UploadedImage>,
    pub on_copy: EventHandler<()>,
}

/// Read-only link field, copy button, preview and metadata line.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let meta = props.details.as_ref().map(describe).filter(|line| !line.is_empty());

    rsx! {
        div { class: "result-panel",
            p { class: "result-panel__label", "Image link" }
            div { class: "result-panel__row",
                input {
                    class: "result-panel__url",
                    r#type: "text",
                    readonly: true,
                    value: "{props.url}",
                }
                IconButton {
                    onclick: move |_| props.on_copy.call(()),
                    aria_label: if props.copied { "Copied".to_string() } else { "Copy link".to_string() },
                    variant: IconButtonVariant::Solid,
                    class: if props.copied { "copy-btn copy-btn--done".to_string() } else { "copy-btn".to_string() },
                    if props.copied { "✓" } else { "⧉" }
                }
            }

            img { class: "result-panel__preview", src: "{props.url}", alt: "Uploaded image" }

            if let Some(line) = meta {
                p { class: "result-panel__meta", "{line}" }
            }
        }
    }
}

/// "PNG · 864×576 · 117.4 KB", skipping whatever Cloudinary left out.
fn describe(image: &UploadedImage) -> String {
    let mut parts = Vec::new();
    if let Some(format) = &image.format {
        parts.push(format.to_uppercase());
    }
    if let (Some(w), Some(h)) = (image.width, image.height) {
        parts.push(format!("{}×{}", w, h));
    }
    if let Some(bytes) = image.bytes {
        parts.push(format_size(bytes));
    }
    parts.join(" · ")
}
