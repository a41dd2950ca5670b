//! Upload and copy flows, independent of any UI toolkit.
//!
//! The widget hands these functions a [`UploadStore`] (its reactive state and
//! toast queue) and they drive [`UploadState`] through one upload or copy.

use std::time::Duration;

use crate::error::{ClipboardError, UploadError};
use crate::media::SelectedFile;
use crate::notice::Notice;
use crate::state::UploadState;
use crate::upload::{UploadedImage, Uploader};

/// How long the "copied" indicator stays on.
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Where a flow reads and writes widget state and posts notices.
pub trait UploadStore {
    fn snapshot(&self) -> UploadState;
    fn update<F: FnOnce(&mut UploadState)>(&mut self, f: F);
    fn notify(&mut self, notice: Notice);
}

/// Write-only text clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored on the CDN
    Uploaded(UploadedImage),
    /// Not an image; nothing was sent
    Rejected(UploadError),
    /// Another upload is in flight; nothing was sent
    Busy,
    /// Sent, but the upload did not succeed
    Failed(UploadError),
}

/// Validate `file` and upload it, keeping `store` in step.
pub async fn submit_file<U, S>(uploader: &U, store: &mut S, file: SelectedFile) -> SubmitOutcome
where
    U: Uploader,
    S: UploadStore,
{
    if !store.snapshot().accepts_input() {
        tracing::warn!("Ignoring {} while an upload is in flight", file.name);
        return SubmitOutcome::Busy;
    }

    if let Err(err) = file.ensure_image() {
        tracing::warn!("Rejected file: {}", err);
        store.notify(Notice::for_error(&err));
        return SubmitOutcome::Rejected(err);
    }

    store.update(UploadState::begin_upload);
    let result = uploader.upload(&file).await;

    match result {
        Ok(image) => {
            store.update(|state| state.complete(image.secure_url.clone()));
            store.notify(Notice::upload_succeeded());
            SubmitOutcome::Uploaded(image)
        }
        Err(err) => {
            tracing::warn!("Upload of {} failed: {}", file.name, err);
            store.update(UploadState::fail);
            store.notify(Notice::for_error(&err));
            SubmitOutcome::Failed(err)
        }
    }
}

/// Report a file that could not even be read.
pub fn report_unreadable<S: UploadStore>(store: &mut S, err: &UploadError) {
    tracing::warn!("Could not read selected file: {}", err);
    store.notify(Notice::for_error(err));
}

/// Copy the current result URL to the clipboard.
///
/// Returns `Ok(None)` when there is nothing to copy. On success the
/// `copied` flag is set and the copy's generation is returned; the caller
/// hands it to [`revert_copied_after`].
pub fn copy_result<C, S>(clipboard: &mut C, store: &mut S) -> Result<Option<u64>, ClipboardError>
where
    C: ClipboardWriter,
    S: UploadStore,
{
    let Some(url) = store.snapshot().image_url else {
        return Ok(None);
    };

    if let Err(err) = clipboard.write_text(&url) {
        tracing::warn!("{}", err);
        store.notify(Notice::copy_failed());
        return Err(err);
    }

    let mut generation = 0;
    store.update(|state| {
        state.mark_copied();
        generation = state.copy_generation;
    });
    store.notify(Notice::copied());
    Ok(Some(generation))
}

/// Wait `delay`, then turn the "copied" indicator off unless a later copy
/// has taken over.
pub async fn revert_copied_after<S: UploadStore>(store: &mut S, generation: u64, delay: Duration) {
    tokio::time::sleep(delay).await;
    let mut cleared = false;
    store.update(|state| cleared = state.clear_copied_if(generation));
    if !cleared {
        tracing::debug!("Copy {} superseded; indicator kept", generation);
    }
}

/// Plain in-memory store, for headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub state: UploadState,
    pub notices: Vec<Notice>,
}

impl UploadStore for MemoryStore {
    fn snapshot(&self) -> UploadState {
        self.state.clone()
    }

    fn update<F: FnOnce(&mut UploadState)>(&mut self, f: F) {
        f(&mut self.state);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
