//! Image Uploader Widget
//!
//! Drop zone plus file picker that sends one image to Cloudinary and shows
//! the resulting link with a copy button.
//!
//! All timers and uploads run as tasks spawned in this component's scope, so
//! unmounting the widget cancels them.

use std::path::Path;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use imgdrop_core::flow::{self, SubmitOutcome, UploadStore};
use imgdrop_core::media::IMAGE_EXTENSIONS;
use imgdrop_core::{
    CloudinaryUploader, Notice, SelectedFile, UploadError, UploadResult, UploadState, UploadedImage,
    COPIED_RESET_DELAY,
};
use imgdrop_ui::{PhaseBadge, Spinner, ToastQueue};
use rfd::FileDialog;

use super::ResultPanel;
use crate::clipboard::SystemClipboard;
use crate::context::{use_toasts, use_uploader};

/// Widget state and toast queue, as seen by the upload flow.
#[derive(Clone, Copy)]
struct WidgetStore {
    state: Signal<UploadState>,
    toasts: Signal<ToastQueue>,
}

impl UploadStore for WidgetStore {
    fn snapshot(&self) -> UploadState {
        self.state.peek().clone()
    }

    fn update<F: FnOnce(&mut UploadState)>(&mut self, f: F) {
        f(&mut *self.state.write());
    }

    fn notify(&mut self, notice: Notice) {
        self.toasts.write().push(notice);
    }
}

/// Drag-and-drop / click-to-pick image uploader
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageUploader {}
/// }
/// ```
#[component]
pub fn ImageUploader() -> Element {
    let uploader = use_uploader();
    let toasts = use_toasts();
    let state = use_signal(UploadState::default);
    let details: Signal<Option<UploadedImage>> = use_signal(|| None);
    let mut copy_reset: Signal<Option<Task>> = use_signal(|| None);
    let mut store = WidgetStore { state, toasts };

    let pick_uploader = uploader.clone();
    let pick_file = move |_| {
        if !state.peek().accepts_input() {
            return;
        }

        let uploader = pick_uploader.clone();
        spawn(async move {
            let mut store = store;
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match SelectedFile::from_path(&path).await {
                    Ok(file) => upload_and_record(&uploader, store, details, file).await,
                    Err(e) => flow::report_unreadable(&mut store, &e),
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::warn!("File picker error: {:?}", e);
                }
            }
        });
    };

    let on_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        let current = state.peek().clone();
        if !current.is_dragging && current.accepts_input() {
            store.update(UploadState::drag_over);
        }
    };

    let on_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        if state.peek().is_dragging {
            store.update(UploadState::drag_leave);
        }
    };

    let drop_uploader = uploader.clone();
    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        store.update(UploadState::drop_received);

        if !state.peek().accepts_input() {
            return;
        }
        let Some(files) = evt.files() else {
            return;
        };

        let uploader = drop_uploader.clone();
        spawn(async move {
            let mut store = store;
            match first_dropped_file(files).await {
                Ok(Some(file)) => upload_and_record(&uploader, store, details, file).await,
                Ok(None) => {}
                Err(e) => flow::report_unreadable(&mut store, &e),
            }
        });
    };

    let copy_link = move |_| {
        let mut clipboard = SystemClipboard;
        if let Ok(Some(generation)) = flow::copy_result(&mut clipboard, &mut store) {
            // A fresh copy restarts the countdown
            if let Some(previous) = copy_reset.write().take() {
                previous.cancel();
            }
            let task = spawn(async move {
                let mut store = store;
                flow::revert_copied_after(&mut store, generation, COPIED_RESET_DELAY).await;
            });
            copy_reset.set(Some(task));
        }
    };

    let current = state.read().clone();
    let mut zone_class = String::from("drop-zone");
    if current.is_dragging {
        zone_class.push_str(" drop-zone--dragging");
    }
    if current.is_uploading {
        zone_class.push_str(" drop-zone--busy");
    }

    let shown_details = details()
        .filter(|image| current.image_url.as_deref() == Some(image.secure_url.as_str()));

    rsx! {
        div { class: "image-uploader",
            div {
                class: "{zone_class}",
                role: "button",
                tabindex: if current.is_uploading { "-1" } else { "0" },
                "aria-disabled": if current.is_uploading { "true" } else { "false" },
                onclick: pick_file,
                ondragenter: on_drag_over,
                ondragover: on_drag_over,
                ondragleave: on_drag_leave,
                ondrop: on_drop,

                if current.is_uploading {
                    Spinner { label: "Uploading...".to_string() }
                } else {
                    div { class: "drop-zone__prompt",
                        div { class: "drop-zone__icon", "⬆" }
                        p { class: "drop-zone__title", "Drag & drop an image" }
                        p { class: "drop-zone__hint", "or click to choose one" }
                    }
                }
            }

            PhaseBadge { phase: current.phase() }

            if let Some(url) = current.image_url.clone() {
                ResultPanel {
                    url: url,
                    copied: current.copied,
                    details: shown_details,
                    on_copy: copy_link,
                }
            }
        }
    }
}

/// Run the upload flow for one file and remember the CDN metadata.
async fn upload_and_record(
    uploader: &CloudinaryUploader,
    mut store: WidgetStore,
    mut details: Signal<Option<UploadedImage>>,
    file: SelectedFile,
) {
    match flow::submit_file(uploader, &mut store, file).await {
        SubmitOutcome::Uploaded(image) => details.set(Some(image)),
        SubmitOutcome::Failed(_) => details.set(None),
        SubmitOutcome::Rejected(_) | SubmitOutcome::Busy => {}
    }
}

/// Read the first file of a drop. Later files are ignored.
async fn first_dropped_file(files: Arc<dyn FileEngine>) -> UploadResult<Option<SelectedFile>> {
    let Some(path) = files.files().into_iter().next() else {
        return Ok(None);
    };

    let data = files.read_file(&path).await.ok_or_else(|| {
        UploadError::Io(std::io::Error::other(format!("cannot read {}", path)))
    })?;

    let name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&path)
        .to_string();

    Ok(Some(SelectedFile::new(name, data)))
}
